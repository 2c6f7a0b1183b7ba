//! Mail transports that hand composed leads to the operator
//!
//! The contact service only knows the [`Mailer`] trait; which transport
//! backs it is chosen by `mailer.transport` in the configuration.

mod http;
mod outbox;

pub use http::HttpMailer;
pub use outbox::OutboxMailer;

use std::sync::Arc;

use super::mail::OutgoingMail;
use crate::config::{AppConfig, MailTransport};
use crate::{Error, Result};

/// Delivers a single composed mail
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Transport name for logs
    fn name(&self) -> &str;

    /// Attempt delivery once; no retries
    async fn deliver(&self, mail: &OutgoingMail) -> Result<()>;
}

/// Build the configured transport
pub fn build_mailer(config: &AppConfig) -> Result<Arc<dyn Mailer>> {
    match config.mailer.transport {
        MailTransport::Outbox => Ok(Arc::new(OutboxMailer::new(config.outbox_dir()))),
        MailTransport::Http => {
            let api_url = config.mailer.api_url.as_deref().ok_or_else(|| {
                Error::Config("mailer.api_url is required for the http transport".to_string())
            })?;
            let api_key = config.mailer.resolved_api_key().ok_or_else(|| {
                Error::Config(format!(
                    "mailer.api_key (or {}) is required for the http transport",
                    crate::config::MAILER_API_KEY_ENV
                ))
            })?;
            Ok(Arc::new(HttpMailer::new(
                api_url,
                &api_key,
                config.mailer.request_timeout_secs,
            )?))
        }
    }
}
