//! LED device drivers
//!
//! The [`LedDevice`] trait is the interface between the Caps Lock controller and the LED hardware.
//! The device is created and owned by the board code, the controller borrows it.

pub mod gpio;
pub mod pwm;

pub use gpio::GpioLed;
pub use pwm::PwmLed;

/// Errors of LED devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// The device is not ready, eg. it's suspended or failed to initialize
    NotReady,
    /// The device has no LED at this index
    InvalidIndex(u8),
    /// Brightness is out of 0 ~ 100
    InvalidBrightness(u8),
    /// GPIO error
    Gpio(embedded_hal::digital::ErrorKind),
    /// PWM error
    Pwm(embedded_hal::pwm::ErrorKind),
}

impl LedError {
    /// Errno-style code of the error, used in logs
    pub fn code(&self) -> i32 {
        match self {
            LedError::NotReady => -19,
            LedError::InvalidIndex(_) | LedError::InvalidBrightness(_) => -22,
            LedError::Gpio(_) | LedError::Pwm(_) => -5,
        }
    }
}

/// A group of LEDs addressed by index.
pub trait LedDevice {
    /// Whether the device can accept commands now.
    ///
    /// Readiness can change at runtime, callers should check it before every command.
    fn is_ready(&self) -> bool {
        true
    }

    /// Set the brightness of the LED at `index`, in percent
    fn set_brightness(&mut self, index: u8, percent: u8) -> Result<(), LedError>;

    /// Turn the LED at `index` on
    fn on(&mut self, index: u8) -> Result<(), LedError> {
        self.set_brightness(index, 100)
    }

    /// Turn the LED at `index` off
    fn off(&mut self, index: u8) -> Result<(), LedError> {
        self.set_brightness(index, 0)
    }
}

impl<D: LedDevice + ?Sized> LedDevice for &mut D {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn set_brightness(&mut self, index: u8, percent: u8) -> Result<(), LedError> {
        (**self).set_brightness(index, percent)
    }

    fn on(&mut self, index: u8) -> Result<(), LedError> {
        (**self).on(index)
    }

    fn off(&mut self, index: u8) -> Result<(), LedError> {
        (**self).off(index)
    }
}
