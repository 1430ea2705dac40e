//! Three-channel PWM LED bank.
//!
//! The board has a red, a green and a yellow LED, each on its own LEDC
//! channel with 8-bit resolution. Duties are staged in an in-memory
//! framebuffer and written to hardware with [`update`](Leds::update).

#[cfg(feature = "defmt")]
use defmt::warn;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::DUTY_MAX;

/// Number of LEDs on the board.
/// Index 0 is red, 1 is green, 2 is yellow.
pub const LED_COUNT: usize = 3;

/// PWM LED bank over any `embedded-hal` duty-cycle channel.
pub struct Leds<P> {
    channels: [P; LED_COUNT],
    framebuffer: [u8; LED_COUNT],
}

impl<P: SetDutyCycle> Leds<P> {
    /// Wrap three channels. The framebuffer starts dark; nothing is written
    /// until the first [`update`](Self::update).
    pub const fn new(channels: [P; LED_COUNT]) -> Self {
        Self {
            channels,
            framebuffer: [0; LED_COUNT],
        }
    }

    /// Write the framebuffer to the PWM channels.
    ///
    /// A channel that rejects its duty is logged and skipped; the remaining
    /// channels are still written.
    pub fn update(&mut self) {
        for (channel, duty) in self.channels.iter_mut().zip(self.framebuffer) {
            if channel
                .set_duty_cycle_fraction(u16::from(duty), u16::from(DUTY_MAX))
                .is_err()
            {
                #[cfg(feature = "defmt")]
                warn!("LED: failed to set duty {}", duty);
            }
        }
    }

    /// Set a single LED by index.
    pub const fn set(&mut self, index: usize, duty: u8) {
        self.framebuffer[index] = duty;
    }

    /// Replace the whole framebuffer.
    pub const fn set_all(&mut self, duties: [u8; LED_COUNT]) {
        self.framebuffer = duties;
    }

    /// Set all LEDs to one duty.
    pub fn fill(&mut self, duty: u8) {
        self.framebuffer.fill(duty);
    }

    /// Turn all LEDs off.
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Currently staged duties.
    pub const fn duties(&self) -> [u8; LED_COUNT] {
        self.framebuffer
    }

    /// Number of LEDs in the bank.
    pub const fn len(&self) -> usize {
        LED_COUNT
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::{
        ErrorKind,
        ErrorType,
    };

    use super::*;

    /// Channel with a 10-bit counter, like a LEDC timer at higher resolution.
    #[derive(Default)]
    struct Channel {
        duty: u16,
        writes: usize,
    }

    impl ErrorType for Channel {
        type Error = Infallible;
    }

    impl SetDutyCycle for Channel {
        fn max_duty_cycle(&self) -> u16 {
            1023
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            self.writes += 1;
            Ok(())
        }
    }

    struct Broken;

    impl ErrorType for Broken {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for Broken {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn nothing_is_written_before_update() {
        let mut leds = Leds::new([Channel::default(), Channel::default(), Channel::default()]);
        leds.fill(DUTY_MAX);
        assert!(leds.channels.iter().all(|c| c.writes == 0));
        leds.update();
        assert!(leds.channels.iter().all(|c| c.writes == 1));
    }

    #[test]
    fn duty_is_scaled_to_channel_resolution() {
        let mut leds = Leds::new([Channel::default(), Channel::default(), Channel::default()]);
        leds.set_all([0, 255, 51]);
        leds.update();
        assert_eq!(leds.channels[0].duty, 0);
        assert_eq!(leds.channels[1].duty, 1023);
        assert_eq!(leds.channels[2].duty, 204);
    }

    #[test]
    fn set_and_clear_edit_framebuffer() {
        let mut leds = Leds::new([Channel::default(), Channel::default(), Channel::default()]);
        leds.set(2, 40);
        assert_eq!(leds.duties(), [0, 0, 40]);
        leds.clear();
        assert_eq!(leds.duties(), [0; LED_COUNT]);
        assert_eq!(leds.len(), 3);
    }

    #[test]
    fn failing_channel_does_not_stop_flush() {
        let mut leds = Leds::new([Broken, Broken, Broken]);
        leds.fill(DUTY_MAX);
        leds.update();
        assert_eq!(leds.duties(), [DUTY_MAX; LED_COUNT]);
    }
}
