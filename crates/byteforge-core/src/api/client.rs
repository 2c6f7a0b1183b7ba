//! Client for the contact endpoint

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::protocol::*;
use crate::config::ContactConfig;
use crate::contact::ContactRequest;
use crate::{Error, Result};

/// Posts contact submissions to the endpoint
#[derive(Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: Url,
}

impl ContactClient {
    /// Create a client for the given `POST` URL
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ContactConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.request_timeout_secs)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Check whether the endpoint's server answers its health route
    pub async fn health(&self) -> Result<bool> {
        let url = self.endpoint.join(HEALTH_PATH)?;
        match self.client.get(url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Submit a lead; the error carries the server's message verbatim
    pub async fn submit(&self, request: &ContactRequest) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let reply = response.json::<ContactReply>().await.map_err(|e| {
            Error::Other(format!("Unexpected response from contact endpoint ({}): {}", status, e))
        })?;

        if status.is_success() && reply.is_success() {
            return Ok(());
        }

        Err(Error::Other(
            reply
                .error
                .unwrap_or_else(|| "Failed to send message".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(matches!(
            ContactClient::new("::not-a-url::", 5),
            Err(Error::UrlParse(_))
        ));
    }

    #[test]
    fn test_health_url_replaces_path() {
        let client = ContactClient::new("http://127.0.0.1:8787/api/contact", 5).unwrap();
        let url = client.endpoint().join(HEALTH_PATH).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8787/health");
    }
}
