//! Brightness policies of the Caps Lock LED.

use crate::backlight::BacklightLevel;
use crate::config::{CapsLedConfig, MAX_BRIGHTNESS};

/// Command sent to the LED device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCommand {
    On,
    Off,
    /// Brightness in percent, 0 ~ 100
    Brightness(u8),
}

/// Maps the Caps Lock state to the LED command.
pub trait BrightnessPolicy {
    fn command(&self, active: bool) -> LedCommand;
}

/// Plain on/off LED
#[derive(Clone, Copy, Debug, Default)]
pub struct OnOff;

impl BrightnessPolicy for OnOff {
    fn command(&self, active: bool) -> LedCommand {
        if active { LedCommand::On } else { LedCommand::Off }
    }
}

/// Constant brightness in percent while Caps Lock is active
#[derive(Clone, Copy, Debug)]
pub struct FixedBrightness(pub u8);

impl FixedBrightness {
    pub fn from_config(config: &CapsLedConfig) -> Self {
        Self(config.fixed_brightness)
    }
}

impl BrightnessPolicy for FixedBrightness {
    fn command(&self, active: bool) -> LedCommand {
        LedCommand::Brightness(if active { self.0.min(MAX_BRIGHTNESS) } else { 0 })
    }
}

/// Brightness derived from the ambient backlight.
///
/// The LED is boosted above the backlight so that it stands out, and stays visible when the backlight is off.
pub struct BacklightRelative<B: BacklightLevel> {
    backlight: B,
    min_visible: u8,
    boost: u8,
}

impl<B: BacklightLevel> BacklightRelative<B> {
    pub fn new(backlight: B, min_visible: u8, boost: u8) -> Self {
        Self {
            backlight,
            min_visible,
            boost,
        }
    }

    pub fn from_config(backlight: B, config: &CapsLedConfig) -> Self {
        Self::new(backlight, config.min_visible_brightness, config.backlight_boost)
    }
}

impl<B: BacklightLevel> BrightnessPolicy for BacklightRelative<B> {
    fn command(&self, active: bool) -> LedCommand {
        if !active {
            return LedCommand::Brightness(0);
        }
        let percent = self.backlight.percent();
        LedCommand::Brightness(backlight_boosted(percent, self.min_visible, self.boost))
    }
}

/// Caps Lock brightness for the given backlight brightness, clamped to 100.
pub fn backlight_boosted(backlight_percent: u8, min_visible: u8, boost: u8) -> u8 {
    let percent = if backlight_percent == 0 {
        min_visible
    } else {
        backlight_percent.saturating_add(boost)
    };
    percent.min(MAX_BRIGHTNESS)
}
