use embedded_hal::digital::{Error, OutputPin};

use super::{LedDevice, LedError};

/// An on/off LED connected to a GPIO pin.
///
/// It wraps the low-active and high-active pins. Any non-zero brightness turns the LED on.
pub struct GpioLed<P: OutputPin> {
    pin: P,
    low_active: bool,
    ready: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new GpioLed instance
    pub fn new(pin: P, low_active: bool) -> Self {
        Self {
            pin,
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

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }

    fn set_active(&mut self, active: bool) -> Result<(), LedError> {
        let result = if active != self.low_active {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|e| LedError::Gpio(e.kind()))
    }
}

impl<P: OutputPin> LedDevice for GpioLed<P> {
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
        self.set_active(percent > 0)
    }
}
