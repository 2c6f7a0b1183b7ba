//! L4 Atomic Layer: Time calculation utilities for page animations
//!
//! All functions take the current instant explicitly so callers (and tests)
//! control the clock.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `duration` - Total animation duration
/// * `now` - Time at which progress is sampled
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has finished by `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Fraction of `duration` covered by `elapsed`, unclamped
#[inline]
pub fn fraction(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return f64::INFINITY;
    }
    elapsed.as_secs_f64() / duration.as_secs_f64()
}
