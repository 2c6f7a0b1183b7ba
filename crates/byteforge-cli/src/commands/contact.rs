use anyhow::{anyhow, Result};
use tracing::warn;

use byteforge_core::contact::{ContactRequest, ServiceNeed, ValidationError};
use byteforge_core::{AppConfig, ContactClient};

/// Lead fields from the command line
pub struct LeadArgs {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub need: Option<String>,
}

impl LeadArgs {
    fn into_request(self) -> ContactRequest {
        ContactRequest {
            company: self.company,
            phone: self.phone,
            need: self.need,
            ..ContactRequest::new(self.name, self.email, self.message)
        }
    }
}

pub async fn run(config: &AppConfig, lead: LeadArgs) -> Result<()> {
    if let Some(need) = lead.need.as_deref() {
        if ServiceNeed::from_value(need).is_none() {
            warn!("Unknown need '{}', sending it as given", need);
        }
    }

    let request = lead.into_request();
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError { missing }.into());
    }

    let client = ContactClient::from_config(&config.contact)?;
    println!("Sending lead to {}...", client.endpoint());

    client
        .submit(&request)
        .await
        .map_err(|e| anyhow!("Contact submission failed: {}", e))?;

    println!("Sent. ByteForge will reply to {}.", request.email.unwrap_or_default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request_keeps_optionals() {
        let request = LeadArgs {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Backups".to_string(),
            company: Some("Analytical".to_string()),
            phone: None,
            need: Some("backup".to_string()),
        }
        .into_request();

        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert_eq!(request.company.as_deref(), Some("Analytical"));
        assert_eq!(request.phone, None);
        assert!(request.missing_fields().is_empty());
    }
}
