//! L3 Molecular Layer: Viewport scroll animator
//!
//! Combines easing functions and timing utilities to move the page viewport
//! from one section offset to another over a fixed duration.

use std::time::{Duration, Instant};

use super::config::{NavigatorConfig, NavigatorConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};
use crate::navigator::ScrollDriver;

/// Active scroll animation state
#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting offset
    from: f64,
    /// Target offset
    to: f64,
}

/// Viewport scroll animator
///
/// Call [`ScrollAnimator::scroll_to`] to start a transition, then
/// [`ScrollAnimator::update`] each frame to get the interpolated offset.
/// A started animation always runs to its target; a new `scroll_to`
/// restarts from the current interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    duration: Duration,
    easing: EasingType,
    /// Current viewport offset (always up-to-date after `update`)
    current: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::from_config(&NavigatorConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            animation: None,
            duration,
            easing,
            current: 0.0,
        }
    }

    pub fn from_config(config: &NavigatorConfig) -> Self {
        Self::new(config.scroll_duration(), config.easing)
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the current animation lands
    pub fn target(&self) -> f64 {
        self.animation.map(|a| a.to).unwrap_or(self.current)
    }

    /// Current interpolated offset
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump to an offset without animating (viewport resize)
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Start animating towards `target`
    pub fn scroll_to(&mut self, target: f64, now: Instant) {
        if self.duration.is_zero() || (target - self.current).abs() < f64::EPSILON {
            self.set_offset(target);
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(anim) = self.animation {
            if is_complete(anim.start, self.duration, now) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = self.easing.apply(progress(anim.start, self.duration, now));
                self.current = lerp(anim.from, anim.to, t);
            }
        }

        self.current
    }
}

impl ScrollDriver for ScrollAnimator {
    fn scroll_to(&mut self, offset: f64, now: Instant) {
        ScrollAnimator::scroll_to(self, offset, now);
    }

    fn poll_complete(&mut self, now: Instant) -> bool {
        self.update(now);
        !self.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(Duration::from_millis(ms), EasingType::Linear)
    }

    #[test]
    fn test_instant_jump_when_duration_zero() {
        let mut animator = linear(0);
        animator.scroll_to(400.0, Instant::now());
        assert_eq!(animator.current(), 400.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_interpolates_and_lands() {
        let start = Instant::now();
        let mut animator = linear(1000);

        animator.scroll_to(200.0, start);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 200.0);

        let mid = animator.update(start + Duration::from_millis(500));
        assert!((mid - 100.0).abs() < 1e-6);

        let end = animator.update(start + Duration::from_millis(1000));
        assert_eq!(end, 200.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_same_target_completes_immediately() {
        let now = Instant::now();
        let mut animator = linear(1000);
        animator.set_offset(80.0);
        assert!(ScrollDriver::poll_complete(&mut animator, now));
        ScrollDriver::scroll_to(&mut animator, 80.0, now);
        assert!(ScrollDriver::poll_complete(&mut animator, now));
    }

    #[test]
    fn test_poll_complete_tracks_duration() {
        let start = Instant::now();
        let mut animator = linear(300);
        ScrollDriver::scroll_to(&mut animator, 50.0, start);
        assert!(!animator.poll_complete(start + Duration::from_millis(100)));
        assert!(animator.poll_complete(start + Duration::from_millis(300)));
        assert_eq!(animator.current(), 50.0);
    }
}
