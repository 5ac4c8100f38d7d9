//! The controller which drives the Caps Lock LED from the LED indicator state sent by the host.

use crate::brightness::{BrightnessPolicy, LedCommand};
use crate::config::CapsLedConfig;
use crate::controller::Controller;
use crate::driver::{LedDevice, LedError};
use crate::event::{EventDisposition, KeyboardStateEvent, LedIndicator, LedIndicatorType, Listener};

/// Caps Lock LED controller.
///
/// The LED device is owned by the board, the controller only borrows it. No state is kept between
/// events: every indicator event is turned into exactly one LED command, or none if the device isn't ready.
pub struct CapsLockLedController<'d, D: LedDevice, P: BrightnessPolicy> {
    led: &'d mut D,
    policy: P,
    index: u8,
}

impl<'d, D: LedDevice, P: BrightnessPolicy> CapsLockLedController<'d, D, P> {
    /// Create the controller.
    ///
    /// A device which isn't ready is reported but not fatal, the readiness is checked again on every event.
    pub fn new(led: &'d mut D, policy: P, config: &CapsLedConfig) -> Self {
        if led.is_ready() {
            info!("Caps Lock LED initialized, LED index: {}", config.led_index);
        } else {
            error!("Caps Lock LED device not ready at boot");
        }
        Self {
            led,
            policy,
            index: config.led_index,
        }
    }

    /// Compute the LED command for `indicator` and send it to the LED device.
    pub fn apply(&mut self, indicator: LedIndicator) -> Result<LedCommand, LedError> {
        let active = indicator.is_active(LedIndicatorType::CapsLock);
        if !self.led.is_ready() {
            return Err(LedError::NotReady);
        }

        let command = self.policy.command(active);
        debug!("Caps Lock active: {}, LED command: {:?}", active, command);
        match command {
            LedCommand::On => self.led.on(self.index)?,
            LedCommand::Off => self.led.off(self.index)?,
            LedCommand::Brightness(percent) => self.led.set_brightness(self.index, percent)?,
        }
        Ok(command)
    }

    /// Handle an indicator update, errors are logged and dropped.
    pub fn update(&mut self, indicator: LedIndicator) {
        debug!("LED indicator changed: {:#x}", indicator.into_bits());
        match self.apply(indicator) {
            Ok(command) => debug!("Caps Lock LED updated: {:?}", command),
            Err(LedError::NotReady) => error!("Caps Lock LED device not ready"),
            Err(e) => error!("Failed to set Caps Lock LED (err {}): {:?}", e.code(), e),
        }
    }
}

impl<D: LedDevice, P: BrightnessPolicy> Listener<KeyboardStateEvent> for CapsLockLedController<'_, D, P> {
    fn on_event(&mut self, event: &KeyboardStateEvent) -> EventDisposition {
        if let KeyboardStateEvent::Indicator(indicator) = event {
            self.update(*indicator);
        }
        // Other listeners always see the event as well
        EventDisposition::Bubble
    }
}

impl<D: LedDevice, P: BrightnessPolicy> Controller for CapsLockLedController<'_, D, P> {
    type Event = KeyboardStateEvent;

    async fn process_event(&mut self, event: Self::Event) {
        self.on_event(&event);
    }
}
