use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use byteforge_core::contact::ContactRequest;
use byteforge_core::AppConfig;
use tracing::{debug, info};

use crate::contact_form::{ContactForm, FormStatus};
use crate::content::{page_sections, SectionContent};
use crate::navigator::{InputOutcome, NavigatorSettings, StepNavigator};
use crate::presentation::EntranceTimeline;
use crate::scroll::{NavigatorConfigExt, ScrollAnimator};
use crate::sections::{SectionDescriptor, SectionRegistry};
use crate::side_nav::SideNav;
use crate::signals::{PageSignal, SignalBus, SignalSender};
use crate::theme::Theme;

/// Page state: navigator, section presentations, side nav and contact modal
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Runtime theme
    pub theme: Theme,
    /// Section copy in step order
    pub sections: Vec<SectionContent>,
    /// Step navigator driving the viewport animator
    pub navigator: StepNavigator<ScrollAnimator>,
    /// One entrance timeline per section
    pub timelines: Vec<EntranceTimeline>,
    pub side_nav: SideNav,
    /// Focused call to action within the current section
    pub cta_focus: usize,
    /// Open contact modal
    pub contact: Option<ContactForm>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    bus: SignalBus,
    viewport_height: Rc<Cell<u16>>,
    last_step: usize,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, now: Instant) -> Self {
        let sections = page_sections();
        let bus = SignalBus::new();
        let viewport_height = Rc::new(Cell::new(0u16));

        let mut registry = SectionRegistry::new();
        for section in &sections {
            let height = Rc::clone(&viewport_height);
            let step = section.step;
            registry.register(SectionDescriptor::new(
                step,
                section.id,
                section.title,
                move || step as f64 * f64::from(height.get()),
            ));
        }

        let nav_config = &config.navigator;
        let navigator = StepNavigator::new(
            registry,
            ScrollAnimator::from_config(nav_config),
            NavigatorSettings::from(nav_config),
        );

        let mut timelines: Vec<EntranceTimeline> = sections
            .iter()
            .map(|_| EntranceTimeline::new(nav_config.entrance_duration(), nav_config.easing))
            .collect();
        if let Some(first) = timelines.first_mut() {
            first.set_active(true, now);
        }

        let side_nav = SideNav::new(
            sections.iter().map(SectionContent::nav_item).collect(),
            bus.sender(),
        );

        Self {
            config,
            theme,
            sections,
            navigator,
            timelines,
            side_nav,
            cta_focus: 0,
            contact: None,
            should_quit: false,
            status_message: None,
            bus,
            viewport_height,
            last_step: 0,
        }
    }

    /// Handle for emitting page signals
    pub fn signals(&self) -> SignalSender {
        self.bus.sender()
    }

    pub fn step(&self) -> usize {
        self.navigator.step()
    }

    pub fn current_section(&self) -> Option<&SectionContent> {
        self.sections.get(self.step())
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height.get()
    }

    /// Track the page viewport; sections are one viewport tall
    pub fn set_viewport_height(&mut self, height: u16) {
        if self.viewport_height.get() == height {
            return;
        }
        self.viewport_height.set(height);
        let offset = self.navigator.current_offset();
        self.navigator.driver_mut().set_offset(offset);
    }

    /// Viewport offset in rows for this frame
    pub fn scroll_offset(&self) -> f64 {
        self.navigator.driver().current()
    }

    pub fn is_contact_open(&self) -> bool {
        self.contact.is_some()
    }

    /// Wheel input, ignored while the contact modal is up
    pub fn wheel(&mut self, delta_y: f64, now: Instant) -> Option<InputOutcome> {
        if self.is_contact_open() {
            return None;
        }
        Some(self.navigator.wheel(delta_y, now))
    }

    /// Navigation key by DOM key code
    pub fn nav_key(&mut self, code: &str, now: Instant) -> Option<InputOutcome> {
        if self.is_contact_open() {
            return None;
        }
        Some(self.navigator.key(code, now))
    }

    /// Move CTA focus within the current section
    pub fn focus_next_cta(&mut self) {
        let count = self.current_section().map(|s| s.ctas.len()).unwrap_or(0);
        if count > 0 {
            self.cta_focus = (self.cta_focus + 1) % count;
        }
    }

    /// Fire the focused call to action
    pub fn activate_cta(&mut self) {
        let Some(section) = self.sections.get(self.step()) else {
            return;
        };
        if let Some(cta) = section.ctas.get(self.cta_focus) {
            debug!(section = section.id, cta = cta.label, "CTA activated");
            cta.activate(section.id, &self.bus.sender());
        }
    }

    pub fn open_contact(&mut self, source: impl Into<String>) {
        let source = source.into();
        if self.contact.is_some() {
            debug!(%source, "Contact form already open");
            return;
        }
        info!(%source, "Contact form opened");
        self.contact = Some(ContactForm::new(source));
    }

    pub fn close_contact(&mut self) {
        if let Some(form) = &self.contact {
            if form.is_sending() {
                return;
            }
        }
        self.contact = None;
    }

    /// Validate the open form and hand back the request to send
    pub fn submit_contact(&mut self) -> Option<ContactRequest> {
        self.contact.as_mut().and_then(ContactForm::submit)
    }

    /// Apply the result of a send started with [`App::submit_contact`]
    pub fn finish_contact(&mut self, result: Result<(), String>, now: Instant) {
        if let Some(form) = self.contact.as_mut() {
            form.finish(result, now);
        }
    }

    /// Apply pending signals and advance every animation to `now`
    pub fn update(&mut self, now: Instant) {
        for signal in self.bus.drain() {
            match signal {
                PageSignal::GotoStep { step } => {
                    self.navigator.request_step(step, now);
                }
                PageSignal::OpenContact { source } => self.open_contact(source),
            }
        }

        self.navigator.tick(now);
        if !self.navigator.is_locked() {
            self.navigator.driver_mut().update(now);
        }

        let step = self.navigator.step();
        if step != self.last_step {
            self.last_step = step;
            self.cta_focus = 0;
        }

        for (idx, timeline) in self.timelines.iter_mut().enumerate() {
            timeline.set_active(idx == step, now);
            timeline.update(now);
        }

        if self
            .contact
            .as_ref()
            .is_some_and(|form| form.should_close(now))
        {
            self.contact = None;
            self.set_status("Thanks! We'll be in touch shortly.");
        }
    }

    /// Whether the next frame should come at the animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.navigator.is_locked()
            || self.navigator.driver().is_animating()
            || self.timelines.iter().any(EntranceTimeline::is_playing)
            || self
                .contact
                .as_ref()
                .is_some_and(|form| matches!(form.status(), FormStatus::Sent { .. }))
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::StepDecision;
    use std::time::Duration;

    fn app(now: Instant) -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), now);
        app.set_viewport_height(40);
        app
    }

    /// Run updates until the navigator unlocks
    fn settle(app: &mut App, mut now: Instant) -> Instant {
        for _ in 0..100 {
            now += Duration::from_millis(100);
            app.update(now);
            if !app.navigator.is_locked() {
                break;
            }
        }
        now
    }

    #[test]
    fn test_wheel_scrolls_to_next_section() {
        let now = Instant::now();
        let mut app = app(now);

        let outcome = app.wheel(120.0, now).unwrap();
        assert_eq!(outcome.decision, StepDecision::Moved { from: 0, to: 1 });
        assert_eq!(app.navigator.driver().target(), 40.0);

        settle(&mut app, now);
        assert_eq!(app.scroll_offset(), 40.0);
        assert_eq!(app.step(), 1);
    }

    #[test]
    fn test_goto_signal_moves_and_out_of_range_is_ignored() {
        let now = Instant::now();
        let mut app = app(now);

        app.signals().goto_step(7);
        app.update(now);
        assert_eq!(app.step(), 0);
        assert!(!app.navigator.is_locked());

        app.signals().goto_step(4);
        app.update(now);
        assert_eq!(app.step(), 4);
    }

    #[test]
    fn test_hero_cta_opens_contact_with_source() {
        let now = Instant::now();
        let mut app = app(now);

        app.activate_cta();
        app.update(now);
        assert_eq!(app.contact.as_ref().map(|f| f.source()), Some("hero"));

        assert!(app.wheel(120.0, now).is_none());
        assert!(app.nav_key("ArrowDown", now).is_none());
        assert_eq!(app.step(), 0);

        app.close_contact();
        assert!(!app.is_contact_open());
    }

    #[test]
    fn test_second_cta_jumps_to_interlude() {
        let now = Instant::now();
        let mut app = app(now);
        app.focus_next_cta();
        app.activate_cta();
        app.update(now);
        assert_eq!(app.step(), 4);
        assert_eq!(app.cta_focus, 0);
    }

    #[test]
    fn test_entrance_follows_active_section() {
        let now = Instant::now();
        let mut app = app(now);
        app.update(now + Duration::from_secs(1));
        assert_eq!(app.timelines[0].progress(), 1.0);

        let later = now + Duration::from_secs(1);
        app.nav_key("PageDown", later);
        app.update(later);
        assert!(app.timelines[1].is_active());
        assert!(!app.timelines[0].is_active());
        assert_eq!(app.timelines[1].progress(), 0.0);
        assert!(app.needs_fast_update());
    }

    #[test]
    fn test_contact_closes_after_sent() {
        let now = Instant::now();
        let mut app = app(now);
        app.open_contact("final");
        {
            let form = app.contact.as_mut().unwrap();
            form.name = "Jo".to_string();
            form.email = "jo@x.io".to_string();
            form.message = "hi".to_string();
        }

        assert!(app.submit_contact().is_some());
        app.close_contact();
        assert!(app.is_contact_open());

        app.finish_contact(Ok(()), now);
        app.update(now + Duration::from_millis(900));
        assert!(!app.is_contact_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_side_nav_index_moves_page() {
        let now = Instant::now();
        let mut app = app(now);
        assert!(app.side_nav.select_index(3));
        app.update(now);
        assert_eq!(app.step(), 3);
        assert!(!app.side_nav.select_index(6));
    }

    #[test]
    fn test_long_scroll_holds_lock_until_landing() {
        let now = Instant::now();
        let mut config = AppConfig::default();
        config.navigator.scroll_duration_ms = 5000;
        config.navigator.stall_timeout_ms = 4000;
        let mut app = App::new(Arc::new(config), Theme::default(), now);
        app.set_viewport_height(40);

        app.wheel(120.0, now).unwrap();

        app.update(now + Duration::from_millis(4000));
        let mid = now + Duration::from_millis(4700);
        app.update(mid);
        assert!(app.navigator.is_locked());
        assert!(app.navigator.driver().is_animating());
        assert_eq!(app.wheel(120.0, mid).unwrap().decision, StepDecision::Busy);

        settle(&mut app, mid);
        assert!(!app.navigator.driver().is_animating());
        assert_eq!(app.scroll_offset(), 40.0);
        assert_eq!(app.step(), 1);
    }

    #[test]
    fn test_resize_keeps_section_aligned() {
        let now = Instant::now();
        let mut app = app(now);
        app.signals().goto_step(2);
        app.update(now);
        settle(&mut app, now);
        assert_eq!(app.scroll_offset(), 80.0);

        app.set_viewport_height(30);
        assert_eq!(app.scroll_offset(), 60.0);
    }
}
