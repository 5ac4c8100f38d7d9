use embedded_hal::pwm::{Error, SetDutyCycle};

use super::{LedDevice, LedError};

/// A dimmable LED driven by a PWM channel.
///
/// For low-active LEDs the duty cycle is inverted.
pub struct PwmLed<P: SetDutyCycle> {
    pwm: P,
    low_active: bool,
    ready: bool,
}

impl<P: SetDutyCycle> PwmLed<P> {
    pub fn new(pwm: P, low_active: bool) -> Self {
        Self {
            pwm,
            low_active,
            ready: true,
        }
    }

    /// Mark the LED as not ready, commands are rejected until [`Self::resume`]
    pub fn suspend(&mut self) {
        self.ready = false;
    }

    /// Mark the LED as ready
    pub fn resume(&mut self) {
        self.ready = true;
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> LedDevice for PwmLed<P> {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_brightness(&mut self, index: u8, percent: u8) -> Result<(), LedError> {
        if !self.ready {
            return Err(LedError::NotReady);
        }
        if index != 0 {
            return Err(LedError::InvalidIndex(index));
        }
        if percent > 100 {
            return Err(LedError::InvalidBrightness(percent));
        }
        let duty = if self.low_active { 100 - percent } else { percent };
        self.pwm
            .set_duty_cycle_percent(duty)
            .map_err(|e| LedError::Pwm(e.kind()))
    }
}
