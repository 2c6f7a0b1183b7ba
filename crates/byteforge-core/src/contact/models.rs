use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a contact form submission as received from the page
///
/// Every field is optional on the wire; required ones are checked by
/// [`ContactRequest::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub need: Option<String>,
    pub message: Option<String>,
}

/// Fields a submission cannot be delivered without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Message => "message",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission missing one or more required fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn join_fields(fields: &[RequiredField]) -> String {
    let names: Vec<&str> = fields.iter().map(RequiredField::as_str).collect();
    names.join(", ")
}

/// Non-blank, trimmed value of an optional form field
fn filled(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_need(mut self, need: impl Into<String>) -> Self {
        self.need = Some(need.into());
        self
    }

    /// Required fields that are missing or blank, in form order
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if filled(&self.name).is_none() {
            missing.push(RequiredField::Name);
        }
        if filled(&self.email).is_none() {
            missing.push(RequiredField::Email);
        }
        if filled(&self.message).is_none() {
            missing.push(RequiredField::Message);
        }
        missing
    }

    /// Check required fields and turn the submission into a lead
    pub fn validate(&self) -> Result<Lead, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        Ok(Lead {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name: filled(&self.name).unwrap_or_default(),
            email: filled(&self.email).unwrap_or_default(),
            company: filled(&self.company),
            phone: filled(&self.phone),
            need: filled(&self.need),
            message: filled(&self.message).unwrap_or_default(),
        })
    }
}

/// A validated submission ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub need: Option<String>,
    pub message: String,
}

impl Lead {
    /// Human label for the requested service, if any
    pub fn need_label(&self) -> Option<String> {
        self.need.as_deref().map(|need| {
            ServiceNeed::from_value(need)
                .map(|known| known.label().to_string())
                .unwrap_or_else(|| need.to_string())
        })
    }
}

/// Services offered in the contact form's "What do you need?" select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceNeed {
    #[default]
    ManagedIt,
    Security,
    Backup,
    Web,
    App,
    Combo,
}

impl ServiceNeed {
    pub const ALL: [ServiceNeed; 6] = [
        ServiceNeed::ManagedIt,
        ServiceNeed::Security,
        ServiceNeed::Backup,
        ServiceNeed::Web,
        ServiceNeed::App,
        ServiceNeed::Combo,
    ];

    /// Value sent on the wire
    pub fn value(&self) -> &'static str {
        match self {
            ServiceNeed::ManagedIt => "managed-it",
            ServiceNeed::Security => "security",
            ServiceNeed::Backup => "backup",
            ServiceNeed::Web => "web",
            ServiceNeed::App => "app",
            ServiceNeed::Combo => "combo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceNeed::ManagedIt => "Managed IT / Support",
            ServiceNeed::Security => "Cybersecurity",
            ServiceNeed::Backup => "Backup & Recovery",
            ServiceNeed::Web => "Website Design & Development",
            ServiceNeed::App => "App Development (MVP)",
            ServiceNeed::Combo => "Combination (IT + Web/App)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|need| need.value() == value)
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|n| n == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|n| n == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_reported() {
        let req = ContactRequest::new("", "a@b.com", "hi");
        let err = req.validate().unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::Name]);
        assert_eq!(err.to_string(), "Missing required fields: name");
    }

    #[test]
    fn test_blank_and_absent_fields_are_missing() {
        let req = ContactRequest {
            name: Some("   ".to_string()),
            email: None,
            message: Some("hello".to_string()),
            ..Default::default()
        };
        assert_eq!(
            req.missing_fields(),
            vec![RequiredField::Name, RequiredField::Email]
        );
    }

    #[test]
    fn test_validate_trims_and_drops_empty_optionals() {
        let req = ContactRequest::new(" Jane ", "jane@acme.io", " Need a site ")
            .with_company("")
            .with_need("web");
        let lead = req.validate().unwrap();
        assert_eq!(lead.name, "Jane");
        assert_eq!(lead.message, "Need a site");
        assert_eq!(lead.company, None);
        assert_eq!(lead.need.as_deref(), Some("web"));
        assert_eq!(lead.need_label().as_deref(), Some("Website Design & Development"));
    }

    #[test]
    fn test_deserialize_accepts_nulls_and_missing_fields() {
        let req: ContactRequest =
            serde_json::from_str(r#"{"name":"Jo","email":null,"message":"hi"}"#).unwrap();
        assert_eq!(req.email, None);
        assert_eq!(req.phone, None);
        assert_eq!(req.missing_fields(), vec![RequiredField::Email]);
    }

    #[test]
    fn test_unknown_need_keeps_raw_value() {
        let lead = ContactRequest::new("Jo", "jo@x.io", "hi")
            .with_need("consulting")
            .validate()
            .unwrap();
        assert_eq!(lead.need_label().as_deref(), Some("consulting"));
    }

    #[test]
    fn test_service_need_cycles() {
        assert_eq!(ServiceNeed::Combo.next(), ServiceNeed::ManagedIt);
        assert_eq!(ServiceNeed::ManagedIt.prev(), ServiceNeed::Combo);
        assert_eq!(ServiceNeed::from_value("backup"), Some(ServiceNeed::Backup));
        assert_eq!(ServiceNeed::from_value("nope"), None);
    }
}
