mod common;
pub(crate) use crate::common::*;

mod caps_lock_led_test {
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
    use rmk_caps_led::driver::GpioLed;
    use rmk_caps_led::event::dispatch;
    use rmk_caps_led::{
        Backlight, BacklightRelative, CapsLedConfig, CapsLockLedController, EventDisposition, FixedBrightness,
        KeyboardStateEvent, LedCommand, LedError, LedIndicator, Listener, OnOff,
    };

    use super::*;

    fn indicator(mask: u8) -> KeyboardStateEvent {
        KeyboardStateEvent::Indicator(LedIndicator::from_bits(mask))
    }

    #[test]
    fn test_fixed_brightness_scenario() {
        let mut led = FakeLed::new();
        let mut controller = CapsLockLedController::new(&mut led, FixedBrightness(5), &CapsLedConfig::default());

        assert_eq!(controller.on_event(&indicator(0x02)), EventDisposition::Bubble);
        assert_eq!(controller.on_event(&indicator(0x00)), EventDisposition::Bubble);
        assert_eq!(controller.on_event(&indicator(0x06)), EventDisposition::Bubble);

        assert_eq!(
            led.commands,
            vec![
                (0, LedCommand::Brightness(5)),
                (0, LedCommand::Brightness(0)),
                (0, LedCommand::Brightness(5)),
            ]
        );
    }

    #[test]
    fn test_every_mask_follows_caps_lock_bit() {
        let mut led = FakeLed::new();
        let mut controller = CapsLockLedController::new(&mut led, OnOff, &CapsLedConfig::default());
        for mask in 0..=u8::MAX {
            let expected = if mask & 0b10 != 0 { LedCommand::On } else { LedCommand::Off };
            assert_eq!(controller.apply(LedIndicator::from_bits(mask)), Ok(expected));
        }
        assert_eq!(led.commands.len(), 256);
    }

    #[test]
    fn test_same_mask_twice_gives_same_command() {
        let backlight = Backlight::default();
        backlight.set_level(4);
        let mut led = FakeLed::new();
        let policy = BacklightRelative::from_config(&backlight, &CapsLedConfig::default());
        let mut controller = CapsLockLedController::new(&mut led, policy, &CapsLedConfig::default());

        controller.on_event(&indicator(0x02));
        controller.on_event(&indicator(0x02));
        controller.on_event(&indicator(0x03));

        // Backlight at 50%, boosted by 20%
        assert_eq!(led.commands, vec![(0, LedCommand::Brightness(70)); 3]);
    }

    #[test]
    fn test_backlight_relative() {
        let backlight = Backlight::new(10);
        let mut led = FakeLed::new();
        let policy = BacklightRelative::from_config(&backlight, &CapsLedConfig::default());
        let mut controller = CapsLockLedController::new(&mut led, policy, &CapsLedConfig::default());

        // Backlight off, keep the indicator visible
        assert_eq!(controller.apply(LedIndicator::CAPS_LOCK), Ok(LedCommand::Brightness(30)));
        backlight.set_level(3);
        assert_eq!(controller.apply(LedIndicator::CAPS_LOCK), Ok(LedCommand::Brightness(50)));
        backlight.set_level(8);
        assert_eq!(controller.apply(LedIndicator::CAPS_LOCK), Ok(LedCommand::Brightness(100)));
        backlight.set_level(10);
        assert_eq!(controller.apply(LedIndicator::CAPS_LOCK), Ok(LedCommand::Brightness(100)));
        assert_eq!(controller.apply(LedIndicator::NUM_LOCK), Ok(LedCommand::Brightness(0)));
    }

    #[test]
    fn test_not_ready_issues_no_command() {
        let mut led = FakeLed::new();
        led.ready = false;
        {
            let mut controller = CapsLockLedController::new(&mut led, OnOff, &CapsLedConfig::default());
            assert_eq!(controller.apply(LedIndicator::CAPS_LOCK), Err(LedError::NotReady));
            assert_eq!(controller.on_event(&indicator(0x02)), EventDisposition::Bubble);
        }
        assert!(led.commands.is_empty());

        // Readiness is checked on every event
        led.ready = true;
        let mut controller = CapsLockLedController::new(&mut led, OnOff, &CapsLedConfig::default());
        controller.on_event(&indicator(0x02));
        assert_eq!(led.commands, vec![(0, LedCommand::On)]);
    }

    #[test]
    fn test_driver_error_is_not_propagated() {
        let mut led = FakeLed::new();
        led.fail_with = Some(LedError::InvalidIndex(0));
        {
            let mut controller = CapsLockLedController::new(&mut led, FixedBrightness(5), &CapsLedConfig::default());
            assert_eq!(controller.apply(LedIndicator::CAPS_LOCK), Err(LedError::InvalidIndex(0)));
            assert_eq!(controller.on_event(&indicator(0x02)), EventDisposition::Bubble);
        }
        assert!(led.commands.is_empty());

        led.fail_with = None;
        let mut controller = CapsLockLedController::new(&mut led, FixedBrightness(5), &CapsLedConfig::default());
        controller.on_event(&indicator(0x02));
        assert_eq!(led.commands, vec![(0, LedCommand::Brightness(5))]);
    }

    #[test]
    fn test_other_events_are_ignored() {
        let mut led = FakeLed::new();
        let mut controller = CapsLockLedController::new(&mut led, OnOff, &CapsLedConfig::default());
        assert_eq!(controller.on_event(&KeyboardStateEvent::LayerChange(2)), EventDisposition::Bubble);
        assert_eq!(controller.on_event(&KeyboardStateEvent::Sleep(true)), EventDisposition::Bubble);
        assert!(led.commands.is_empty());
    }

    #[test]
    fn test_led_index_from_config() {
        let mut led = FakeLed::new();
        let config = CapsLedConfig {
            led_index: 2,
            ..CapsLedConfig::default()
        };
        let mut controller = CapsLockLedController::new(&mut led, FixedBrightness::from_config(&config), &config);
        controller.on_event(&indicator(0x02));
        assert_eq!(led.commands, vec![(2, LedCommand::Brightness(50))]);
    }

    struct Seen(Vec<KeyboardStateEvent>);

    impl Listener<KeyboardStateEvent> for Seen {
        fn on_event(&mut self, event: &KeyboardStateEvent) -> EventDisposition {
            self.0.push(*event);
            EventDisposition::Bubble
        }
    }

    #[test]
    fn test_event_bubbles_to_next_listener() {
        let mut led = FakeLed::new();
        led.ready = false;
        let mut controller = CapsLockLedController::new(&mut led, OnOff, &CapsLedConfig::default());
        let mut seen = Seen(Vec::new());

        let events = [indicator(0x02), KeyboardStateEvent::LayerChange(1), indicator(0x00)];
        for event in events.iter() {
            let disposition = dispatch::<KeyboardStateEvent>(&mut [&mut controller, &mut seen], event);
            assert_eq!(disposition, EventDisposition::Bubble);
        }
        assert_eq!(seen.0, events.to_vec());
    }

    #[test]
    fn test_gpio_led() {
        let expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ];
        // Low-active LED
        let mut led = GpioLed::new(PinMock::new(&expectations), true);
        {
            let mut controller = CapsLockLedController::new(&mut led, OnOff, &CapsLedConfig::default());
            controller.on_event(&indicator(0x02));
            controller.on_event(&indicator(0x01));
            controller.on_event(&indicator(0x06));
        }
        led.release().done();
    }
}
