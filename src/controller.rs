//! The control loop state machine.
//!
//! [`Controller`] owns every piece of runtime state (mode, manual override,
//! button debouncers, press classifier, animation timers) together with the
//! LED bank, buzzer and display it drives. The caller samples the buttons and
//! reads the clock, then calls [`tick`](Controller::tick) once per loop
//! iteration. Nothing in here blocks.
//!
//! Per tick, in order:
//! 1. mode button: a debounced press advances the mode
//! 2. reset button: a debounced press forces [`LightingMode::Off`]
//! 3. action button: short press toggles the manual override, long press beeps
//! 4. buzzer deadline
//! 5. mode renderer, unless the manual override owns the LEDs

#[cfg(feature = "defmt")]
use defmt::info;
use embedded_hal::pwm::SetDutyCycle;

use crate::{
    action::{
        PressClassifier,
        PressEvent,
    },
    buttons::{
        Debouncer,
        Edge,
        Inputs,
    },
    buzzer::Buzzer,
    config::{
        BUZZER_TONE_DURATION,
        DUTY_MAX,
    },
    display::{
        Status,
        StatusDisplay,
    },
    leds::Leds,
    lighting::{
        Frame,
        Renderer,
    },
    mode::LightingMode,
    time::Instant,
};

/// Manual LED control set by a short press on the action button.
///
/// While enabled, the mode renderer is suspended and all LEDs sit at one
/// level that flips on every short press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManualOverride {
    pub enabled: bool,
    pub led_on: bool,
}

pub struct Controller<P, B, D> {
    leds: Leds<P>,
    buzzer: Buzzer<B>,
    display: D,
    mode: LightingMode,
    manual: ManualOverride,
    mode_button: Debouncer,
    reset_button: Debouncer,
    action_button: Debouncer,
    action: PressClassifier,
    renderer: Renderer,
}

impl<P, B, D> Controller<P, B, D>
where
    P: SetDutyCycle,
    B: SetDutyCycle,
    D: StatusDisplay,
{
    pub fn new(leds: Leds<P>, buzzer: Buzzer<B>, display: D) -> Self {
        Self {
            leds,
            buzzer,
            display,
            mode: LightingMode::Off,
            manual: ManualOverride::default(),
            mode_button: Debouncer::new(),
            reset_button: Debouncer::new(),
            action_button: Debouncer::new(),
            action: PressClassifier::new(),
            renderer: Renderer::new(),
        }
    }

    /// Announce readiness and enter [`LightingMode::Off`].
    pub fn start(&mut self, now: Instant) {
        #[cfg(feature = "defmt")]
        info!("System ready");
        self.display.show(&Status::READY);
        self.set_mode(LightingMode::Off, now);
    }

    /// Run one loop iteration with the buttons as sampled at `now`.
    pub fn tick(&mut self, now: Instant, inputs: Inputs) {
        if self.mode_button.sample(inputs.mode, now) == Some(Edge::Pressed) {
            self.set_mode(self.mode.next(), now);
        }

        if self.reset_button.sample(inputs.reset, now) == Some(Edge::Pressed) {
            self.reset(now);
        }

        let edge = self.action_button.sample(inputs.action, now);
        match self.action.update(edge, now) {
            Some(PressEvent::Short) => self.toggle_manual(),
            Some(PressEvent::Long) => self.long_press(now),
            None => {}
        }

        self.buzzer.service(now);

        if !self.manual.enabled {
            if let Some(frame) = self.renderer.render(self.mode, now) {
                self.write(frame);
            }
        }
    }

    /// Switch to `mode`, dropping any manual override.
    pub fn set_mode(&mut self, mode: LightingMode, now: Instant) {
        #[cfg(feature = "defmt")]
        info!("Mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.manual.enabled = false;
        self.display.show(&mode.status());
        if let Some(frame) = self.renderer.enter(mode, now) {
            self.write(frame);
        }
    }

    /// Force everything off, as the BOOT button does.
    pub fn reset(&mut self, now: Instant) {
        #[cfg(feature = "defmt")]
        info!("Reset");
        self.set_mode(LightingMode::Off, now);
        self.display.show(&Status::RESET);
    }

    fn toggle_manual(&mut self) {
        self.manual.enabled = true;
        self.manual.led_on = !self.manual.led_on;
        #[cfg(feature = "defmt")]
        info!("Action: short press, LEDs {}", if self.manual.led_on { "on" } else { "off" });

        if self.manual.led_on {
            self.leds.fill(DUTY_MAX);
            self.display.show(&Status::SHORT_ON);
        } else {
            self.leds.clear();
            self.display.show(&Status::SHORT_OFF);
        }
        self.leds.update();
    }

    fn long_press(&mut self, now: Instant) {
        #[cfg(feature = "defmt")]
        info!("Action: long press");
        self.display.show(&Status::LONG_PRESS);
        self.buzzer.beep(now, BUZZER_TONE_DURATION);
    }

    fn write(&mut self, frame: Frame) {
        self.leds.set_all(frame);
        self.leds.update();
    }

    pub const fn mode(&self) -> LightingMode {
        self.mode
    }

    pub const fn manual_override(&self) -> ManualOverride {
        self.manual
    }

    pub const fn leds(&self) -> &Leds<P> {
        &self.leds
    }

    pub const fn buzzer(&self) -> &Buzzer<B> {
        &self.buzzer
    }

    pub const fn display(&self) -> &D {
        &self.display
    }
}
