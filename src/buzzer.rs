//! Passive buzzer on a PWM channel.
//!
//! The buzzer's LEDC timer is configured at [`BUZZER_TONE_HZ`], so sounding
//! the tone is a matter of switching the channel between a 50 % square wave
//! and zero duty. [`beep`](Buzzer::beep) starts the tone and arms a stop
//! deadline; [`service`](Buzzer::service) must be called every loop tick to
//! honour it.
//!
//! [`BUZZER_TONE_HZ`]: crate::config::BUZZER_TONE_HZ

#[cfg(feature = "defmt")]
use defmt::{
    debug,
    warn,
};
use embedded_hal::pwm::SetDutyCycle;

use crate::config::BUZZER_ON_DUTY_PERCENT;
use crate::time::{
    Duration,
    Instant,
};

pub struct Buzzer<P> {
    channel: P,
    stop_at: Option<Instant>,
}

impl<P: SetDutyCycle> Buzzer<P> {
    /// Wrap a channel and make sure it starts silent.
    pub fn new(channel: P) -> Self {
        let mut buzzer = Self {
            channel,
            stop_at: None,
        };
        buzzer.off();
        buzzer
    }

    pub fn on(&mut self) {
        if self.channel.set_duty_cycle_percent(BUZZER_ON_DUTY_PERCENT).is_err() {
            #[cfg(feature = "defmt")]
            warn!("Buzzer: failed to start tone");
        }
    }

    pub fn off(&mut self) {
        if self.channel.set_duty_cycle_fully_off().is_err() {
            #[cfg(feature = "defmt")]
            warn!("Buzzer: failed to stop tone");
        }
    }

    /// Sound the tone from `now` for `duration`.
    pub fn beep(&mut self, now: Instant, duration: Duration) {
        #[cfg(feature = "defmt")]
        debug!("Buzzer: on for {} ms", duration.to_millis());
        self.on();
        self.stop_at = Some(now + duration);
    }

    /// Silence the buzzer once the beep deadline has passed.
    pub fn service(&mut self, now: Instant) {
        if let Some(stop_at) = self.stop_at {
            if now >= stop_at {
                self.off();
                self.stop_at = None;
                #[cfg(feature = "defmt")]
                debug!("Buzzer: off");
            }
        }
    }

    /// Whether a beep is in progress.
    pub const fn is_sounding(&self) -> bool {
        self.stop_at.is_some()
    }
}
