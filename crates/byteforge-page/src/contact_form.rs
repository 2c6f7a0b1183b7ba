//! Contact modal form state
//!
//! Holds the field values, focus and submission status. Submitting only
//! produces the [`ContactRequest`]; the caller sends it and reports back
//! through [`ContactForm::finish`].

use std::time::{Duration, Instant};

use byteforge_core::contact::{ContactRequest, ServiceNeed, ValidationError};
use tracing::debug;

/// How long the "sent" confirmation stays up before the modal closes
pub const SENT_CLOSE_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Phone,
    Need,
    Message,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Phone,
        FormField::Need,
        FormField::Message,
        FormField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name *",
            FormField::Email => "Email *",
            FormField::Company => "Company",
            FormField::Phone => "Phone",
            FormField::Need => "What do you need?",
            FormField::Message => "Message *",
            FormField::Submit => "Send",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Need | FormField::Submit)
    }

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Sending,
    Sent { at: Instant },
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    source: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub need: ServiceNeed,
    pub message: String,
    focus: FormField,
    status: FormStatus,
}

impl ContactForm {
    /// Empty form opened from `source` (the section that asked)
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: String::new(),
            email: String::new(),
            company: String::new(),
            phone: String::new(),
            need: ServiceNeed::default(),
            message: String::new(),
            focus: FormField::Name,
            status: FormStatus::Editing,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Text value of a field, `None` for the select and the submit row
    pub fn value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Company => Some(&self.company),
            FormField::Phone => Some(&self.phone),
            FormField::Message => Some(&self.message),
            FormField::Need | FormField::Submit => None,
        }
    }

    fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Company => Some(&mut self.company),
            FormField::Phone => Some(&mut self.phone),
            FormField::Message => Some(&mut self.message),
            FormField::Need | FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        let idx = (self.focus.index() + 1) % FormField::ORDER.len();
        self.focus = FormField::ORDER[idx];
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::ORDER.len();
        let idx = (self.focus.index() + len - 1) % len;
        self.focus = FormField::ORDER[idx];
    }

    fn editable(&mut self) -> bool {
        match self.status {
            FormStatus::Sending | FormStatus::Sent { .. } => false,
            FormStatus::Failed(_) => {
                self.status = FormStatus::Editing;
                true
            }
            FormStatus::Editing => true,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if !self.editable() {
            return;
        }
        let focus = self.focus;
        if let Some(value) = self.value_mut(focus) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.editable() {
            return;
        }
        let focus = self.focus;
        if let Some(value) = self.value_mut(focus) {
            value.pop();
        }
    }

    /// Left/right on the need select
    pub fn cycle_need(&mut self, forward: bool) {
        if self.focus != FormField::Need || !self.editable() {
            return;
        }
        self.need = if forward {
            self.need.next()
        } else {
            self.need.prev()
        };
    }

    /// Request body for the current values
    pub fn request(&self) -> ContactRequest {
        ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            company: Some(self.company.clone()),
            phone: Some(self.phone.clone()),
            need: Some(self.need.value().to_string()),
            message: Some(self.message.clone()),
        }
    }

    /// Validate and move to `Sending`
    ///
    /// Returns the request to send, or `None` when a send is already in
    /// flight or required fields are missing (the error is kept in the
    /// status).
    pub fn submit(&mut self) -> Option<ContactRequest> {
        if !matches!(self.status, FormStatus::Editing | FormStatus::Failed(_)) {
            return None;
        }

        let request = self.request();
        let missing = request.missing_fields();
        if !missing.is_empty() {
            let err = ValidationError { missing };
            debug!(source = %self.source, "Contact form incomplete: {}", err);
            self.status = FormStatus::Failed(err.to_string());
            return None;
        }

        self.status = FormStatus::Sending;
        Some(request)
    }

    /// Record the outcome of a send started by [`ContactForm::submit`]
    pub fn finish(&mut self, result: Result<(), String>, now: Instant) {
        if !self.is_sending() {
            return;
        }
        self.status = match result {
            Ok(()) => FormStatus::Sent { at: now },
            Err(error) => FormStatus::Failed(error),
        };
    }

    /// Whether the confirmation has been shown long enough
    pub fn should_close(&self, now: Instant) -> bool {
        match self.status {
            FormStatus::Sent { at } => now.saturating_duration_since(at) >= SENT_CLOSE_DELAY,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteforge_core::contact::RequiredField;

    fn type_str(form: &mut ContactForm, s: &str) {
        for c in s.chars() {
            form.input_char(c);
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new("hero");
        type_str(&mut form, "Jane");
        form.focus_next();
        type_str(&mut form, "jane@acme.io");
        while form.focus() != FormField::Message {
            form.focus_next();
        }
        type_str(&mut form, "New site please");
        form
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = ContactForm::new("final");
        form.focus_prev();
        assert_eq!(form.focus(), FormField::Submit);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new("hero");
        type_str(&mut form, "Jo");
        form.backspace();
        form.focus_next();
        type_str(&mut form, "j@x.io");
        assert_eq!(form.name, "J");
        assert_eq!(form.email, "j@x.io");

        form.focus = FormField::Submit;
        type_str(&mut form, "zzz");
        assert_eq!(form.value(FormField::Submit), None);
    }

    #[test]
    fn test_need_cycles_only_when_focused() {
        let mut form = ContactForm::new("hero");
        form.cycle_need(true);
        assert_eq!(form.need, ServiceNeed::ManagedIt);

        form.focus = FormField::Need;
        form.cycle_need(true);
        assert_eq!(form.need, ServiceNeed::Security);
        form.cycle_need(false);
        form.cycle_need(false);
        assert_eq!(form.need, ServiceNeed::Combo);
    }

    #[test]
    fn test_submit_with_missing_fields_fails_locally() {
        let mut form = ContactForm::new("hero");
        assert!(form.submit().is_none());
        assert_eq!(
            form.status(),
            &FormStatus::Failed("Missing required fields: name, email, message".to_string())
        );

        type_str(&mut form, "J");
        assert_eq!(form.status(), &FormStatus::Editing);
    }

    #[test]
    fn test_submit_then_success_closes_after_delay() {
        let now = Instant::now();
        let mut form = filled_form();

        let request = form.submit().unwrap();
        assert!(request.missing_fields().is_empty());
        assert_eq!(request.need.as_deref(), Some("managed-it"));
        assert!(form.is_sending());

        assert!(form.submit().is_none());
        form.input_char('x');
        assert_eq!(form.message, "New site please");

        form.finish(Ok(()), now);
        assert!(!form.should_close(now + Duration::from_millis(899)));
        assert!(form.should_close(now + SENT_CLOSE_DELAY));
    }

    #[test]
    fn test_failure_keeps_values_and_allows_retry() {
        let now = Instant::now();
        let mut form = filled_form();
        form.submit();
        form.finish(Err("Mail delivery failed: timeout".to_string()), now);

        assert_eq!(
            form.status(),
            &FormStatus::Failed("Mail delivery failed: timeout".to_string())
        );
        assert_eq!(form.name, "Jane");
        assert!(!form.should_close(now + Duration::from_secs(10)));
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_request_maps_fields() {
        let form = filled_form();
        let request = form.request();
        assert_eq!(request.name.as_deref(), Some("Jane"));
        assert_eq!(request.company.as_deref(), Some(""));
        let lead = request.validate().unwrap();
        assert_eq!(lead.company, None);
        assert!(request
            .missing_fields()
            .iter()
            .all(|f| *f != RequiredField::Email));
    }
}
