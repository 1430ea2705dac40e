//! Compile-time configuration.
//!
//! Timing parameters, PWM settings and display addressing live here so they
//! can be tuned in one place. There is no runtime configuration.

use crate::time::Duration;

// GPIO pin assignments (ESP32 DevKit v1)
//
// The concrete `esp_hal::peripherals::GPIO*` types are bound in `board.rs`.
//
//   LED red        → GPIO19  (LEDC channel 0, timer 0)
//   LED green      → GPIO18  (LEDC channel 1, timer 0)
//   LED yellow     → GPIO5   (LEDC channel 2, timer 0)
//   Buzzer         → GPIO27  (LEDC channel 3, timer 1)
//   Mode button    → GPIO13
//   Action button  → GPIO12
//   BOOT button    → GPIO0   (used as reset)
//   I²C SDA        → GPIO21
//   I²C SCL        → GPIO22

// Buttons

/// A level change is ignored unless more than this has passed since the
/// previously accepted change.
pub const BUTTON_DEBOUNCE: Duration = Duration::millis(50);

/// Holding the action button at least this long is a long press.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::millis(1500);

// Lighting

/// Half-period of the alternate pattern (on phase, then off phase).
pub const BLINK_INTERVAL: Duration = Duration::millis(400);

/// Period of the three-channel sinusoidal crossfade.
pub const FADE_PERIOD: Duration = Duration::millis(2000);

/// Full-on LED duty at 8-bit resolution.
pub const DUTY_MAX: u8 = 255;

/// LED PWM carrier frequency (Hz).
pub const LED_PWM_FREQUENCY_HZ: u32 = 5_000;

// Buzzer

/// Tone emitted on a long press (Hz). The buzzer LEDC timer runs at this rate.
pub const BUZZER_TONE_HZ: u32 = 2_500;

/// How long the long-press tone sounds.
pub const BUZZER_TONE_DURATION: Duration = Duration::millis(300);

/// Buzzer duty while sounding (percent). 50 % gives a square wave.
pub const BUZZER_ON_DUTY_PERCENT: u8 = 50;

// Display

/// SSD1306 I²C address.
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus speed (kHz).
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// Main loop

/// Pause between control loop iterations.
pub const LOOP_PERIOD: Duration = Duration::millis(8);
