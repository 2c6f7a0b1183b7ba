//! Per-section entrance and exit presentation
//!
//! Each section owns an [`EntranceTimeline`]. Activating the section plays
//! the entrance from the very beginning; deactivating it reverses whatever
//! part of the entrance has already played.

use std::time::{Duration, Instant};

use crate::scroll::timing::fraction;
use crate::scroll::{EasingType, EasingTypeExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Playback {
    started: Instant,
    from: f64,
}

/// Entrance timeline with progress in `[0, 1]`
#[derive(Debug, Clone)]
pub struct EntranceTimeline {
    progress: f64,
    direction: PlayDirection,
    duration: Duration,
    easing: EasingType,
    active: bool,
    playback: Option<Playback>,
}

impl EntranceTimeline {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            progress: 0.0,
            direction: PlayDirection::Forward,
            duration,
            easing,
            active: false,
            playback: None,
        }
    }

    /// Raw progress, 0 before the entrance and 1 once fully presented
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress with the easing curve applied
    pub fn eased(&self) -> f64 {
        self.easing.apply(self.progress)
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// Follow the section's active flag; repeated values are ignored
    pub fn set_active(&mut self, active: bool, now: Instant) {
        if active == self.active {
            return;
        }
        self.active = active;

        if active {
            self.progress = 0.0;
            self.direction = PlayDirection::Forward;
            self.playback = Some(Playback {
                started: now,
                from: 0.0,
            });
        } else if self.progress > 0.0 {
            self.direction = PlayDirection::Reverse;
            self.playback = Some(Playback {
                started: now,
                from: self.progress,
            });
        } else {
            self.direction = PlayDirection::Reverse;
            self.playback = None;
        }
    }

    /// Advance the timeline to `now`
    pub fn update(&mut self, now: Instant) -> f64 {
        let Some(playback) = self.playback else {
            return self.progress;
        };

        let delta = fraction(now.saturating_duration_since(playback.started), self.duration);
        let (progress, done) = match self.direction {
            PlayDirection::Forward => {
                let p = (playback.from + delta).min(1.0);
                (p, p >= 1.0)
            }
            PlayDirection::Reverse => {
                let p = (playback.from - delta).max(0.0);
                (p, p <= 0.0)
            }
        };

        self.progress = progress;
        if done {
            self.playback = None;
        }
        self.progress
    }
}
