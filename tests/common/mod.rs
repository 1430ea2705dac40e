//! Shared test infrastructure for controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use led_mode_controller::time::from_millis;
use led_mode_controller::{Buzzer, Controller, Inputs, LED_COUNT, Leds, Status, StatusDisplay};

/// Control loop period used by the rig, matching the firmware.
pub const TICK_MS: u64 = 8;

/// How long the helpers hold and then release a button.
pub const TAP_MS: u64 = 80;

pub const IDLE: Inputs = Inputs {
    mode: false,
    action: false,
    reset: false,
};
pub const MODE: Inputs = Inputs {
    mode: true,
    ..IDLE
};
pub const ACTION: Inputs = Inputs {
    action: true,
    ..IDLE
};
pub const RESET: Inputs = Inputs {
    reset: true,
    ..IDLE
};

// ============================================================================
// Mock PWM channel
// ============================================================================

/// PWM channel with an 8-bit counter whose duty can be observed after the
/// channel has been moved into the controller.
#[derive(Clone, Default)]
pub struct MockPwm {
    duty: Rc<Cell<u16>>,
    writes: Rc<Cell<usize>>,
}

impl MockPwm {
    pub fn duty(&self) -> u16 {
        self.duty.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.set(duty);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// ============================================================================
// Mock display
// ============================================================================

/// Display that remembers every status it was asked to show.
#[derive(Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Status>,
}

impl StatusDisplay for RecordingDisplay {
    fn show(&mut self, status: &Status) {
        self.shown.push(*status);
    }
}

// ============================================================================
// Test rig
// ============================================================================

/// A booted controller plus a simulated millisecond clock.
pub struct Rig {
    pub controller: Controller<MockPwm, MockPwm, RecordingDisplay>,
    pub leds: [MockPwm; LED_COUNT],
    pub buzzer: MockPwm,
    pub now: u64,
}

impl Rig {
    /// Controller after `start` at t = 0.
    pub fn booted() -> Self {
        let leds = [MockPwm::default(), MockPwm::default(), MockPwm::default()];
        let buzzer = MockPwm::default();
        let mut controller = Controller::new(
            Leds::new(leds.clone()),
            Buzzer::new(buzzer.clone()),
            RecordingDisplay::default(),
        );
        controller.start(from_millis(0));
        Self {
            controller,
            leds,
            buzzer,
            now: 0,
        }
    }

    /// Advance one loop period and tick with `inputs`.
    pub fn tick(&mut self, inputs: Inputs) -> u64 {
        self.now += TICK_MS;
        self.controller.tick(from_millis(self.now), inputs);
        self.now
    }

    /// Tick with the same `inputs` for `ms` milliseconds.
    pub fn run(&mut self, ms: u64, inputs: Inputs) {
        let end = self.now + ms;
        while self.now < end {
            self.tick(inputs);
        }
    }

    pub fn idle(&mut self, ms: u64) {
        self.run(ms, IDLE);
    }

    /// Press and release `inputs`, returning the tick the press landed on.
    pub fn tap(&mut self, inputs: Inputs) -> u64 {
        let pressed_at = self.tick(inputs);
        self.run(TAP_MS - TICK_MS, inputs);
        self.idle(TAP_MS);
        pressed_at
    }

    pub fn press_mode(&mut self) -> u64 {
        self.tap(MODE)
    }

    pub fn press_reset(&mut self) -> u64 {
        self.tap(RESET)
    }

    /// Hold the action button for `ms`, then release it.
    pub fn hold_action(&mut self, ms: u64) {
        self.run(ms, ACTION);
        self.idle(TAP_MS);
    }

    /// Duties actually written to the LED channels.
    pub fn led_duties(&self) -> [u16; LED_COUNT] {
        [self.leds[0].duty(), self.leds[1].duty(), self.leds[2].duty()]
    }

    pub fn shown(&self) -> &[Status] {
        &self.controller.display().shown
    }

    pub fn last_shown(&self) -> Status {
        *self.shown().last().expect("nothing shown")
    }

    pub fn count_shown(&self, status: Status) -> usize {
        self.shown().iter().filter(|s| **s == status).count()
    }
}
