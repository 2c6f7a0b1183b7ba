//! Full-page step navigator
//!
//! Owns the current step and arbitrates discrete step transitions from
//! wheel, keyboard and explicit requests. At most one transition is in
//! flight: while the viewport scrolls, and for a cooldown after it lands,
//! every input is dropped. The step itself changes as soon as a transition
//! is accepted, before the scroll finishes, so dependent views update
//! immediately.
//!
//! Time never comes from the system clock here; each call carries `now` and
//! [`StepNavigator::tick`] advances the state machine.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::scroll::{NavigatorConfig, NavigatorConfigExt};
use crate::sections::SectionRegistry;

/// Moves the viewport on behalf of the navigator
pub trait ScrollDriver {
    /// Begin scrolling the viewport to `offset`
    fn scroll_to(&mut self, offset: f64, now: Instant);

    /// Advance the scroll; true once the target has been reached
    fn poll_complete(&mut self, now: Instant) -> bool;
}

/// Phase of an in-flight transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Viewport scroll in progress
    Scrolling { started: Instant },
    /// Scroll landed; lock released at `until`
    Cooldown { until: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorState {
    Idle,
    Transitioning(TransitionPhase),
}

/// What the navigator did with an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDecision {
    /// Transition started
    Moved { from: usize, to: usize },
    /// Dropped: a transition is in flight
    Busy,
    /// Dropped: target outside `[0, max_step]`
    OutOfRange,
    /// Dropped: target is the current step
    Unchanged,
    /// Not a step request (small wheel delta, unrelated key)
    Ignored,
}

impl StepDecision {
    pub fn is_moved(&self) -> bool {
        matches!(self, StepDecision::Moved { .. })
    }
}

/// Result of a wheel or key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOutcome {
    pub decision: StepDecision,
    /// Whether the platform's own scrolling must be suppressed
    pub suppress_default: bool,
}

/// Keys that move between sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
}

impl NavKey {
    /// Parse a DOM-style key code (`"ArrowDown"`, `"PageUp"`, ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "PageDown" => Some(NavKey::PageDown),
            "PageUp" => Some(NavKey::PageUp),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            NavKey::ArrowDown => "ArrowDown",
            NavKey::ArrowUp => "ArrowUp",
            NavKey::PageDown => "PageDown",
            NavKey::PageUp => "PageUp",
        }
    }

    pub fn direction(&self) -> i64 {
        match self {
            NavKey::ArrowDown | NavKey::PageDown => 1,
            NavKey::ArrowUp | NavKey::PageUp => -1,
        }
    }
}

/// Timing and threshold settings for [`StepNavigator`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorSettings {
    pub wheel_threshold: f64,
    pub cooldown: Duration,
    /// Expected length of a section scroll
    pub scroll_duration: Duration,
    /// Grace period past `scroll_duration` before a silent scroll is released
    pub stall_timeout: Option<Duration>,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self::from(&NavigatorConfig::default())
    }
}

impl From<&NavigatorConfig> for NavigatorSettings {
    fn from(config: &NavigatorConfig) -> Self {
        Self {
            wheel_threshold: config.wheel_threshold,
            cooldown: config.cooldown(),
            scroll_duration: config.scroll_duration(),
            stall_timeout: config.stall_timeout(),
        }
    }
}

/// Step/scroll state machine
pub struct StepNavigator<D: ScrollDriver> {
    step: usize,
    state: NavigatorState,
    settings: NavigatorSettings,
    registry: SectionRegistry,
    driver: D,
}

impl<D: ScrollDriver> StepNavigator<D> {
    pub fn new(registry: SectionRegistry, driver: D, settings: NavigatorSettings) -> Self {
        Self {
            step: 0,
            state: NavigatorState::Idle,
            settings,
            registry,
            driver,
        }
    }

    /// Current step
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Highest valid step (0 for an empty registry, which accepts nothing)
    pub fn max_step(&self) -> usize {
        self.registry.max_step()
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Transition lock
    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self.state, NavigatorState::Transitioning(_))
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    /// Whether the section at `step` is the current one
    pub fn is_active(&self, step: usize) -> bool {
        step == self.step
    }

    /// Offset of the current step's section
    pub fn current_offset(&self) -> f64 {
        self.registry.offset_of(self.step).unwrap_or(0.0)
    }

    /// Explicit request to move to step `n`
    pub fn request_step(&mut self, n: i64, now: Instant) -> StepDecision {
        if self.is_locked() {
            debug!(requested = n, step = self.step, "Step request dropped: transition in flight");
            return StepDecision::Busy;
        }
        self.begin(n, now)
    }

    /// Continuous wheel input; positive `delta_y` scrolls down
    ///
    /// Wheel input always suppresses native scrolling, accepted or not.
    pub fn wheel(&mut self, delta_y: f64, now: Instant) -> InputOutcome {
        let decision = if self.is_locked() {
            StepDecision::Busy
        } else if delta_y.is_nan() || delta_y.abs() < self.settings.wheel_threshold {
            StepDecision::Ignored
        } else {
            let direction = if delta_y > 0.0 { 1 } else { -1 };
            self.begin(self.step as i64 + direction, now)
        };

        InputOutcome {
            decision,
            suppress_default: true,
        }
    }

    /// Keyboard input by DOM key code; non-navigation keys pass through
    pub fn key(&mut self, code: &str, now: Instant) -> InputOutcome {
        let Some(key) = NavKey::from_code(code) else {
            return InputOutcome {
                decision: StepDecision::Ignored,
                suppress_default: false,
            };
        };

        let decision = if self.is_locked() {
            StepDecision::Busy
        } else {
            self.begin(self.step as i64 + key.direction(), now)
        };

        InputOutcome {
            decision,
            suppress_default: true,
        }
    }

    /// Advance the transition: poll the scroll, run the cooldown, unlock
    pub fn tick(&mut self, now: Instant) {
        if let NavigatorState::Transitioning(TransitionPhase::Scrolling { started }) = self.state {
            let landed = self.driver.poll_complete(now);
            let stalled = !landed
                && self
                    .settings
                    .stall_timeout
                    .is_some_and(|limit| {
                        now.saturating_duration_since(started)
                            >= self.settings.scroll_duration + limit
                    });

            if stalled {
                warn!(
                    step = self.step,
                    "Scroll did not report completion in time, releasing after cooldown"
                );
            }
            if landed || stalled {
                self.state = NavigatorState::Transitioning(TransitionPhase::Cooldown {
                    until: now + self.settings.cooldown,
                });
            }
        }

        if let NavigatorState::Transitioning(TransitionPhase::Cooldown { until }) = self.state {
            if now >= until {
                debug!(step = self.step, "Transition finished");
                self.state = NavigatorState::Idle;
            }
        }
    }

    fn begin(&mut self, candidate: i64, now: Instant) -> StepDecision {
        if candidate < 0 || self.registry.is_empty() || candidate as usize > self.max_step() {
            debug!(requested = candidate, max = self.max_step(), "Step request out of range");
            return StepDecision::OutOfRange;
        }

        let to = candidate as usize;
        if to == self.step {
            return StepDecision::Unchanged;
        }

        let from = self.step;
        self.state = NavigatorState::Transitioning(TransitionPhase::Scrolling { started: now });
        self.step = to;

        let offset = self.registry.offset_of(to).unwrap_or(0.0);
        self.driver.scroll_to(offset, now);

        debug!(from, to, offset, "Step transition started");
        StepDecision::Moved { from, to }
    }
}
