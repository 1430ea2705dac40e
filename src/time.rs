//! Millisecond time types shared by the control logic.
//!
//! The logic never reads a clock itself; the caller passes `now` into every
//! update so the state machines run identically on the host and on the board.

/// Milliseconds since boot.
pub type Instant = fugit::Instant<u64, 1, 1000>;

/// Millisecond duration.
pub type Duration = fugit::MillisDurationU64;

/// Build an instant from a millisecond timestamp.
pub const fn from_millis(millis: u64) -> Instant {
    Instant::from_ticks(millis)
}

/// Time elapsed from `earlier` to `now`, saturating at zero.
pub fn elapsed(now: Instant, earlier: Instant) -> Duration {
    now.checked_duration_since(earlier)
        .unwrap_or(Duration::from_ticks(0))
}
