//! Ambient backlight level.
//!
//! The backlight is owned by another part of the firmware, the Caps Lock LED only reads it.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;

use crate::RawMutex;
use crate::config::{DEFAULT_BACKLIGHT_STEPS, MAX_BRIGHTNESS};

/// Read access to the current backlight level
pub trait BacklightLevel {
    /// Current backlight level
    fn level(&self) -> u8;

    /// Convert a backlight level to a brightness in percent, 0 ~ 100
    fn level_to_percent(&self, level: u8) -> u8;

    /// Current backlight brightness in percent
    fn percent(&self) -> u8 {
        self.level_to_percent(self.level())
    }
}

impl<B: BacklightLevel + ?Sized> BacklightLevel for &B {
    fn level(&self) -> u8 {
        (**self).level()
    }

    fn level_to_percent(&self, level: u8) -> u8 {
        (**self).level_to_percent(level)
    }
}

/// Stepped backlight level, which can be shared between tasks.
///
/// Levels range from 0 (off) to `steps` (full brightness).
pub struct Backlight {
    level: Mutex<RawMutex, Cell<u8>>,
    steps: u8,
}

impl Backlight {
    pub const fn new(steps: u8) -> Self {
        Self {
            level: Mutex::new(Cell::new(0)),
            steps,
        }
    }

    /// Number of steps above "off"
    pub fn steps(&self) -> u8 {
        self.steps
    }

    /// Set the backlight level, values above the number of steps are clamped
    pub fn set_level(&self, level: u8) {
        let level = level.min(self.steps);
        self.level.lock(|l| l.set(level));
        debug!("Backlight level set to {}", level);
    }
}

impl Default for Backlight {
    fn default() -> Self {
        Self::new(DEFAULT_BACKLIGHT_STEPS)
    }
}

impl BacklightLevel for Backlight {
    fn level(&self) -> u8 {
        self.level.lock(|l| l.get())
    }

    fn level_to_percent(&self, level: u8) -> u8 {
        if self.steps == 0 {
            return 0;
        }
        let level = level.min(self.steps) as u16;
        (level * MAX_BRIGHTNESS as u16 / self.steps as u16) as u8
    }
}
