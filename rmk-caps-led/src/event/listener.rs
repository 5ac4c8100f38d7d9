//! Synchronous listener chain.
//!
//! Listeners run in registration order on the caller's context. A listener either lets the event
//! bubble to the next listener, or captures it and stops the dispatch.

/// What happens to an event after a listener has seen it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventDisposition {
    /// Continue delivering the event to the following listeners
    Bubble,
    /// Stop delivering the event
    Capture,
}

/// A listener which is called synchronously for every dispatched event.
///
/// Implementors must not block, the dispatch path waits for every listener to return.
pub trait Listener<E> {
    fn on_event(&mut self, event: &E) -> EventDisposition;
}

/// Deliver `event` to `listeners` in order, until one of them captures it.
pub fn dispatch<E>(listeners: &mut [&mut dyn Listener<E>], event: &E) -> EventDisposition {
    for listener in listeners.iter_mut() {
        if listener.on_event(event) == EventDisposition::Capture {
            return EventDisposition::Capture;
        }
    }
    EventDisposition::Bubble
}
