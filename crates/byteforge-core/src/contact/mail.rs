use serde::{Deserialize, Serialize};

use super::models::Lead;
use crate::config::MailerConfig;

/// Plain-text message addressed to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

impl OutgoingMail {
    /// Compose the operator notification for a lead
    pub fn for_lead(lead: &Lead, config: &MailerConfig) -> Self {
        let need = lead.need_label();
        let subject = format!(
            "ByteForge Lead - {} - {}",
            need.as_deref().unwrap_or("Inquiry"),
            lead.name
        );

        let text = format!(
            "New ByteForge Lead\n\n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Phone: {}\n\
             Need: {}\n\n\
             Message:\n{}",
            lead.name,
            lead.email,
            lead.company.as_deref().unwrap_or(""),
            lead.phone.as_deref().unwrap_or(""),
            need.as_deref().unwrap_or(""),
            lead.message,
        );

        Self {
            from: format!("{} <{}>", config.sender_name, config.sender_address),
            to: config.operator_address.clone(),
            reply_to: lead.email.clone(),
            subject,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactRequest;

    #[test]
    fn test_compose_with_need() {
        let lead = ContactRequest::new("Ada", "ada@example.com", "Backups are a mess")
            .with_company("Analytical Ltd")
            .with_need("backup")
            .validate()
            .unwrap();
        let mail = OutgoingMail::for_lead(&lead, &MailerConfig::default());

        assert_eq!(mail.subject, "ByteForge Lead - Backup & Recovery - Ada");
        assert_eq!(mail.reply_to, "ada@example.com");
        assert_eq!(mail.to, "leads@byteforge.dev");
        assert_eq!(mail.from, "ByteForge Website <website@byteforge.dev>");
        assert!(mail.text.contains("Company: Analytical Ltd"));
        assert!(mail.text.ends_with("Message:\nBackups are a mess"));
    }

    #[test]
    fn test_compose_without_need_uses_inquiry() {
        let lead = ContactRequest::new("Bo", "bo@example.com", "hi")
            .validate()
            .unwrap();
        let mail = OutgoingMail::for_lead(&lead, &MailerConfig::default());
        assert_eq!(mail.subject, "ByteForge Lead - Inquiry - Bo");
        assert!(mail.text.contains("Phone: \n"));
    }
}
