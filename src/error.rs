//! Error type for board bring-up.
//!
//! Only hardware initialisation can fail. Once the control loop is running
//! every input is a binary GPIO level, so the logic itself is infallible.

/// Top-level error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An LEDC timer or channel could not be configured.
    Pwm,

    /// The I²C bus could not be configured.
    I2c,

    /// The SSD1306 did not respond to initialisation or a flush failed.
    Display,
}
