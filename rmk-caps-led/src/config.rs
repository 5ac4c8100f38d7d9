//! Compile-time constants and the config of the Caps Lock LED controller.

/// Index of the Caps Lock LED in its LED group. The group has a single element.
pub const CAPS_LOCK_LED_INDEX: u8 = 0;
/// Caps Lock brightness in percent when no backlight is present.
pub const DEFAULT_CAPS_BRIGHTNESS: u8 = 50;
/// Caps Lock brightness in percent when the backlight is off, keeps the indicator visible.
pub const MIN_VISIBLE_BRIGHTNESS: u8 = 30;
/// Percent added on top of the backlight brightness.
pub const BACKLIGHT_BOOST: u8 = 20;
/// Upper bound of every brightness value, in percent.
pub const MAX_BRIGHTNESS: u8 = 100;
/// Number of backlight steps above "off".
pub const DEFAULT_BACKLIGHT_STEPS: u8 = 8;

pub(crate) const KEYBOARD_STATE_EVENT_CHANNEL_SIZE: usize = 4;
pub(crate) const KEYBOARD_STATE_EVENT_PUB_SIZE: usize = 2;
pub(crate) const KEYBOARD_STATE_EVENT_SUB_SIZE: usize = 4;

/// Config for [`crate::CapsLockLedController`] and the brightness policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapsLedConfig {
    /// Index of the LED in the LED device
    pub led_index: u8,
    /// Brightness used by [`crate::FixedBrightness::from_config`]
    pub fixed_brightness: u8,
    /// Brightness used by [`crate::BacklightRelative`] when the backlight is off
    pub min_visible_brightness: u8,
    /// Boost added by [`crate::BacklightRelative`] when the backlight is on
    pub backlight_boost: u8,
}

impl CapsLedConfig {
    pub const fn new() -> Self {
        Self {
            led_index: CAPS_LOCK_LED_INDEX,
            fixed_brightness: DEFAULT_CAPS_BRIGHTNESS,
            min_visible_brightness: MIN_VISIBLE_BRIGHTNESS,
            backlight_boost: BACKLIGHT_BOOST,
        }
    }
}

impl Default for CapsLedConfig {
    fn default() -> Self {
        Self::new()
    }
}
