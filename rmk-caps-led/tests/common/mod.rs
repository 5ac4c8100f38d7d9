#![allow(dead_code)]

use rmk_caps_led::{LedCommand, LedDevice, LedError};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// LED device which records every command it receives
pub struct FakeLed {
    pub ready: bool,
    pub fail_with: Option<LedError>,
    pub commands: Vec<(u8, LedCommand)>,
}

impl FakeLed {
    pub fn new() -> Self {
        Self {
            ready: true,
            fail_with: None,
            commands: Vec::new(),
        }
    }

    fn record(&mut self, index: u8, command: LedCommand) -> Result<(), LedError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.commands.push((index, command));
        Ok(())
    }
}

impl LedDevice for FakeLed {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_brightness(&mut self, index: u8, percent: u8) -> Result<(), LedError> {
        self.record(index, LedCommand::Brightness(percent))
    }

    fn on(&mut self, index: u8) -> Result<(), LedError> {
        self.record(index, LedCommand::On)
    }

    fn off(&mut self, index: u8) -> Result<(), LedError> {
        self.record(index, LedCommand::Off)
    }
}
