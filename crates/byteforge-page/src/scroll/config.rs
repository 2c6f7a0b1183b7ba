//! L4 Atomic Layer: Timing configuration derived from `[navigator]`
//!
//! Re-exports configuration from byteforge-core and adds Duration accessors.

use std::time::Duration;

pub use byteforge_core::NavigatorConfig;

/// Extension trait for NavigatorConfig with utility methods
pub trait NavigatorConfigExt {
    /// Section-to-section scroll duration
    fn scroll_duration(&self) -> Duration;

    /// Lock held after a scroll lands
    fn cooldown(&self) -> Duration;

    /// Stall guard for scrolls that never complete, `None` when disabled
    fn stall_timeout(&self) -> Option<Duration>;

    /// Entrance presentation duration
    fn entrance_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;
}

impl NavigatorConfigExt for NavigatorConfig {
    #[inline]
    fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    #[inline]
    fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[inline]
    fn stall_timeout(&self) -> Option<Duration> {
        (self.stall_timeout_ms > 0).then(|| Duration::from_millis(self.stall_timeout_ms))
    }

    #[inline]
    fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let config = NavigatorConfig::default();
        assert_eq!(config.scroll_duration(), Duration::from_millis(1200));
        assert_eq!(config.cooldown(), Duration::from_millis(700));
        assert_eq!(config.stall_timeout(), Some(Duration::from_millis(4000)));
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_stall_timeout_disabled() {
        let config = NavigatorConfig {
            stall_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.stall_timeout(), None);
    }

    #[test]
    fn test_zero_fps_falls_back() {
        let config = NavigatorConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }
}
