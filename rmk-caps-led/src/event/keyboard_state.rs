//! Keyboard state events

use embassy_sync::pubsub::{ImmediatePublisher, PubSubChannel, Subscriber};

use super::{EventPublisher, LedIndicator, PublishableEvent, SubscribableEvent};
use crate::RawMutex;
use crate::config::{KEYBOARD_STATE_EVENT_CHANNEL_SIZE, KEYBOARD_STATE_EVENT_PUB_SIZE, KEYBOARD_STATE_EVENT_SUB_SIZE};

/// Keyboard state changed event
///
/// Every variant travels on the same channel, so subscribers match on the variant they are interested in
/// and let the others through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardStateEvent {
    /// LED indicator state sent by the host changed
    Indicator(LedIndicator),
    /// Active layer changed
    LayerChange(u8),
    /// Sleep state changed
    Sleep(bool),
}

static KEYBOARD_STATE_EVENT_CHANNEL: PubSubChannel<
    RawMutex,
    KeyboardStateEvent,
    KEYBOARD_STATE_EVENT_CHANNEL_SIZE,
    KEYBOARD_STATE_EVENT_SUB_SIZE,
    KEYBOARD_STATE_EVENT_PUB_SIZE,
> = PubSubChannel::new();

impl PublishableEvent for KeyboardStateEvent {
    type Publisher = ImmediatePublisher<
        'static,
        RawMutex,
        KeyboardStateEvent,
        KEYBOARD_STATE_EVENT_CHANNEL_SIZE,
        KEYBOARD_STATE_EVENT_SUB_SIZE,
        KEYBOARD_STATE_EVENT_PUB_SIZE,
    >;

    fn publisher() -> Self::Publisher {
        KEYBOARD_STATE_EVENT_CHANNEL.immediate_publisher()
    }
}

impl SubscribableEvent for KeyboardStateEvent {
    type Subscriber = Subscriber<
        'static,
        RawMutex,
        KeyboardStateEvent,
        KEYBOARD_STATE_EVENT_CHANNEL_SIZE,
        KEYBOARD_STATE_EVENT_SUB_SIZE,
        KEYBOARD_STATE_EVENT_PUB_SIZE,
    >;

    fn subscriber() -> Self::Subscriber {
        KEYBOARD_STATE_EVENT_CHANNEL
            .subscriber()
            .expect("Failed to create subscriber for KeyboardStateEvent. The 'subs' limit has been exceeded.")
    }
}

/// Decode the LED output report received from the host and publish it as [`KeyboardStateEvent::Indicator`].
///
/// A malformed report is dropped with a warning.
pub fn publish_indicator_report(report: &[u8]) -> Option<LedIndicator> {
    match LedIndicator::from_report(report) {
        Ok(indicator) => {
            debug!("Received LED indicator report: {:?}", indicator);
            KeyboardStateEvent::publisher().publish(KeyboardStateEvent::Indicator(indicator));
            Some(indicator)
        }
        Err(e) => {
            warn!("Dropping malformed LED indicator report: {:?}", e);
            None
        }
    }
}
