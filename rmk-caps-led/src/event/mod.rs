//! Event system for the Caps Lock LED
//!
//! This module provides:
//! - The HID LED indicator state ([`LedIndicator`])
//! - Keyboard state events and their pubsub channel ([`KeyboardStateEvent`])
//! - A synchronous listener chain which lets an event bubble through all listeners ([`dispatch`])

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::pubsub::{ImmediatePublisher, Subscriber};

mod keyboard_state;
mod led_indicator;
mod listener;

pub use keyboard_state::{KeyboardStateEvent, publish_indicator_report};
pub use led_indicator::{LedIndicator, LedIndicatorType, ReportError};
pub use listener::{EventDisposition, Listener, dispatch};

/// Publishes events without waiting, the oldest message is dropped when the channel is full
pub trait EventPublisher<T> {
    fn publish(&self, message: T);
}

/// Waits for the next event
pub trait EventSubscriber<T> {
    async fn next_event(&mut self) -> T;
}

/// Events which have a publisher
pub trait PublishableEvent: Clone + Send {
    type Publisher: EventPublisher<Self>;

    fn publisher() -> Self::Publisher;
}

/// Events which can be subscribed
pub trait SubscribableEvent: Clone + Send {
    type Subscriber: EventSubscriber<Self>;

    fn subscriber() -> Self::Subscriber;
}

impl<M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> EventPublisher<T>
    for ImmediatePublisher<'_, M, T, CAP, SUBS, PUBS>
{
    fn publish(&self, message: T) {
        self.publish_immediate(message);
    }
}

impl<M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> EventSubscriber<T>
    for Subscriber<'_, M, T, CAP, SUBS, PUBS>
{
    async fn next_event(&mut self) -> T {
        // Lagged messages are skipped, only the messages themselves are returned
        self.next_message_pure().await
    }
}
