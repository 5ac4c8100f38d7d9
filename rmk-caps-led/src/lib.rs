//! # RMK Caps Lock LED
//!
//! Drives a single LED from the Caps Lock bit of the HID indicator report sent by the host.
//!
//! ## Modules
//!
//! - [`event`] - LED indicator state, keyboard state events and the listener chain
//! - [`controller`] - The controller which turns indicator events into LED commands
//! - [`brightness`] - Brightness policies: on/off, fixed percentage and backlight relative
//! - [`backlight`] - Ambient backlight level which the backlight relative policy reads
//! - [`driver`] - The LED device trait and GPIO/PWM implementations
//! - [`config`] - Compile-time constants and the controller config
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod backlight;
pub mod brightness;
pub mod config;
pub mod controller;
pub mod driver;
pub mod event;

pub use backlight::{Backlight, BacklightLevel};
pub use brightness::{BacklightRelative, BrightnessPolicy, FixedBrightness, LedCommand, OnOff};
pub use config::CapsLedConfig;
pub use controller::caps_lock_led::CapsLockLedController;
pub use controller::{Controller, EventController};
pub use driver::{LedDevice, LedError};
pub use event::{EventDisposition, KeyboardStateEvent, LedIndicator, Listener};

/// Mutex type used by all channels and shared states in this crate
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
