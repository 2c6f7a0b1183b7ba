use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::Mailer;
use crate::contact::mail::OutgoingMail;
use crate::{Error, Result};

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendError {
    message: Option<String>,
    error: Option<String>,
}

/// Transactional mail API transport (JSON POST with bearer auth)
pub struct HttpMailer {
    client: Client,
    api_url: Url,
    api_key: String,
}

impl HttpMailer {
    pub fn new(api_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self> {
        let api_url = Url::parse(api_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for HttpMailer {
    fn name(&self) -> &str {
        "http"
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<()> {
        let request = SendRequest {
            from: &mail.from,
            to: [&mail.to],
            reply_to: &mail.reply_to,
            subject: &mail.subject,
            text: &mail.text,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("Mail API request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = response
            .json::<SendError>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| status.to_string());

        Err(Error::Delivery(format!("Mail API rejected message: {}", detail)))
    }
}
