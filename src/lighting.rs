//! Per-mode LED duty computation.
//!
//! [`Renderer`] decides what the three LED channels should show for the
//! active [`LightingMode`]. It only produces frames; writing them to the PWM
//! channels is the caller's job. A `None` frame means "leave the LEDs as
//! they are".

use core::f32::consts::TAU;

use crate::config::{
    BLINK_INTERVAL,
    DUTY_MAX,
    FADE_PERIOD,
};
use crate::leds::LED_COUNT;
use crate::mode::LightingMode;
use crate::time::{
    Duration,
    Instant,
    elapsed,
    from_millis,
};

/// One duty value per LED channel (red, green, yellow).
pub type Frame = [u8; LED_COUNT];

/// Phase offset of each channel in the fade, as a fraction of the period.
pub const FADE_PHASE_OFFSETS: [f32; LED_COUNT] = [0.0, 1.0 / 3.0, 2.0 / 3.0];

const DARK: Frame = [0; LED_COUNT];
const FULL: Frame = [DUTY_MAX; LED_COUNT];

/// Duty of one fade channel at `phase` (fraction of the period in `[0, 1)`).
///
/// `round(255 × (sin(2π × (phase + offset)) + 1) / 2)`
pub fn fade_duty(phase: f32, offset: f32) -> u8 {
    let wave = libm::sinf(TAU * (phase + offset));
    libm::roundf(f32::from(DUTY_MAX) * (wave + 1.0) / 2.0) as u8
}

/// Position inside the fade period for a given time since the fade started.
pub fn fade_phase(since_epoch: Duration) -> f32 {
    let period = FADE_PERIOD.to_millis();
    (since_epoch.to_millis() % period) as f32 / period as f32
}

/// All three fade duties for a given time since the fade started.
pub fn fade_frame(since_epoch: Duration) -> Frame {
    let phase = fade_phase(since_epoch);
    FADE_PHASE_OFFSETS.map(|offset| fade_duty(phase, offset))
}

/// Frame with only `index` lit at full duty.
const fn single(index: usize) -> Frame {
    let mut frame = DARK;
    frame[index] = DUTY_MAX;
    frame
}

/// Timers and counters behind the animated modes.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    blink_on: bool,
    blink_started: Instant,
    lit_index: usize,
    fade_epoch: Instant,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub const fn new() -> Self {
        Self {
            blink_on: false,
            blink_started: from_millis(0),
            lit_index: 0,
            fade_epoch: from_millis(0),
        }
    }

    /// Whether the alternate pattern is in its "on" phase.
    pub const fn blink_on(&self) -> bool {
        self.blink_on
    }

    /// Channel lit during the most recent "on" phase.
    pub const fn lit_index(&self) -> usize {
        self.lit_index
    }

    /// Reset the timers for `mode` and return the frame to show on entry.
    ///
    /// Static modes are written once here and never again. The rotating
    /// index of the alternate pattern survives mode changes.
    pub fn enter(&mut self, mode: LightingMode, now: Instant) -> Option<Frame> {
        match mode {
            LightingMode::Off => Some(DARK),
            LightingMode::AllOn => Some(FULL),
            LightingMode::Alternate => {
                self.blink_started = now;
                self.blink_on = false;
                None
            }
            LightingMode::Fade => {
                self.fade_epoch = now;
                None
            }
        }
    }

    /// Frame for this tick, if the LEDs need to change.
    pub fn render(&mut self, mode: LightingMode, now: Instant) -> Option<Frame> {
        match mode {
            LightingMode::Off | LightingMode::AllOn => None,
            LightingMode::Alternate => self.blink(now),
            LightingMode::Fade => Some(fade_frame(elapsed(now, self.fade_epoch))),
        }
    }

    fn blink(&mut self, now: Instant) -> Option<Frame> {
        if elapsed(now, self.blink_started) < BLINK_INTERVAL {
            return None;
        }

        self.blink_started = now;
        self.blink_on = !self.blink_on;

        if self.blink_on {
            self.lit_index = (self.lit_index + 1) % LED_COUNT;
            Some(single(self.lit_index))
        } else {
            Some(DARK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_at_phase_zero() {
        assert_eq!(fade_frame(Duration::millis(0)), [128, 238, 17]);
        for (duty, offset) in fade_frame(Duration::millis(0)).iter().zip(FADE_PHASE_OFFSETS) {
            assert_eq!(*duty, fade_duty(0.0, offset));
        }
    }

    #[test]
    fn fade_channels_are_phase_shifted_by_thirds() {
        for ms in (0..2_000).step_by(40) {
            let phase = fade_phase(Duration::millis(ms));
            assert_eq!(fade_duty(phase, 1.0 / 3.0), fade_duty(phase + 1.0 / 3.0, 0.0));
            assert_eq!(fade_duty(phase, 2.0 / 3.0), fade_duty(phase + 2.0 / 3.0, 0.0));
        }
    }

    #[test]
    fn fade_repeats_every_period() {
        for ms in [0, 250, 999, 1_500, 1_999] {
            assert_eq!(
                fade_frame(Duration::millis(ms)),
                fade_frame(Duration::millis(ms + 2_000))
            );
        }
    }

    #[test]
    fn fade_covers_full_duty_range() {
        assert_eq!(fade_duty(0.25, 0.0), 255);
        assert_eq!(fade_duty(0.75, 0.0), 0);
    }

    #[test]
    fn static_modes_write_on_entry_only() {
        let mut renderer = Renderer::new();
        assert_eq!(renderer.enter(LightingMode::Off, from_millis(0)), Some([0; 3]));
        assert_eq!(renderer.render(LightingMode::Off, from_millis(500)), None);
        assert_eq!(renderer.enter(LightingMode::AllOn, from_millis(600)), Some([255; 3]));
        assert_eq!(renderer.render(LightingMode::AllOn, from_millis(5_000)), None);
    }

    #[test]
    fn alternate_lights_one_then_gap() {
        let mut renderer = Renderer::new();
        assert_eq!(renderer.enter(LightingMode::Alternate, from_millis(0)), None);
        assert_eq!(renderer.render(LightingMode::Alternate, from_millis(399)), None);
        assert_eq!(
            renderer.render(LightingMode::Alternate, from_millis(400)),
            Some([0, 255, 0])
        );
        assert_eq!(renderer.render(LightingMode::Alternate, from_millis(700)), None);
        assert_eq!(
            renderer.render(LightingMode::Alternate, from_millis(800)),
            Some([0, 0, 0])
        );
        assert_eq!(
            renderer.render(LightingMode::Alternate, from_millis(1_200)),
            Some([0, 0, 255])
        );
        assert_eq!(
            renderer.render(LightingMode::Alternate, from_millis(1_600)),
            Some([0, 0, 0])
        );
        assert_eq!(
            renderer.render(LightingMode::Alternate, from_millis(2_000)),
            Some([255, 0, 0])
        );
    }

    #[test]
    fn alternate_index_survives_reentry() {
        let mut renderer = Renderer::new();
        renderer.enter(LightingMode::Alternate, from_millis(0));
        renderer.render(LightingMode::Alternate, from_millis(400));
        assert_eq!(renderer.lit_index(), 1);

        renderer.enter(LightingMode::Off, from_millis(500));
        renderer.enter(LightingMode::Alternate, from_millis(1_000));
        assert!(!renderer.blink_on());
        assert_eq!(
            renderer.render(LightingMode::Alternate, from_millis(1_400)),
            Some([0, 0, 255])
        );
    }

    #[test]
    fn fade_restarts_from_entry_time() {
        let mut renderer = Renderer::new();
        renderer.enter(LightingMode::Fade, from_millis(12_345));
        assert_eq!(
            renderer.render(LightingMode::Fade, from_millis(12_345)),
            Some(fade_frame(Duration::millis(0)))
        );
        assert_eq!(
            renderer.render(LightingMode::Fade, from_millis(12_845)),
            Some(fade_frame(Duration::millis(500)))
        );
    }
}
