//! Controller module
//!
//! A controller subscribes to events and drives an output device accordingly.
//!
//! # Usage
//!
//! ```rust,ignore
//! struct MyController { /* ... */ }
//!
//! impl Controller for MyController {
//!     type Event = KeyboardStateEvent;
//!
//!     async fn process_event(&mut self, event: Self::Event) {
//!         // handle event
//!     }
//! }
//!
//! // Run the controller
//! let mut c = MyController { /* ... */ };
//! c.event_loop().await;
//! ```

pub mod caps_lock_led;

use crate::event::{EventSubscriber, SubscribableEvent};

/// This trait provides the interface for individual output device controllers.
pub trait Controller {
    /// Type of the received events.
    type Event: SubscribableEvent;

    /// Create a new event subscriber.
    fn subscriber() -> <Self::Event as SubscribableEvent>::Subscriber {
        <Self::Event as SubscribableEvent>::subscriber()
    }

    /// Process the received event
    async fn process_event(&mut self, event: Self::Event);
}

/// The trait for event-driven controllers.
///
/// This trait is automatically implemented for all types that implement `Controller`.
pub trait EventController: Controller {
    /// Event loop that continuously processes incoming events
    async fn event_loop(&mut self) -> ! {
        let mut sub = Self::subscriber();
        loop {
            let event = sub.next_event().await;
            self.process_event(event).await;
        }
    }
}

// Auto impl `EventController` trait for all `Controller`
impl<T: Controller> EventController for T {}
