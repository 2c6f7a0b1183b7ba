use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::Mailer;
use crate::contact::mail::OutgoingMail;
use crate::{Error, Result};

/// Writes each mail as a JSON file, one file per lead
///
/// Suited to local development and to deployments where another process
/// picks the files up and relays them.
pub struct OutboxMailer {
    dir: PathBuf,
}

impl OutboxMailer {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait::async_trait]
impl Mailer for OutboxMailer {
    fn name(&self) -> &str {
        "outbox"
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::Delivery(format!("Cannot create outbox {}: {}", self.dir.display(), e)))?;

        let file_name = format!(
            "{}-{}.json",
            Utc::now().format("%Y%m%dT%H%M%S"),
            Uuid::new_v4().simple()
        );
        let path = self.dir.join(file_name);
        let body = serde_json::to_vec_pretty(mail)?;

        tokio::fs::write(&path, body)
            .await
            .map_err(|e| Error::Delivery(format!("Cannot write {}: {}", path.display(), e)))?;

        debug!("Lead written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mail() -> OutgoingMail {
        OutgoingMail {
            from: "ByteForge Website <website@byteforge.dev>".to_string(),
            to: "leads@byteforge.dev".to_string(),
            reply_to: "ada@example.com".to_string(),
            subject: "ByteForge Lead - Inquiry - Ada".to_string(),
            text: "New ByteForge Lead".to_string(),
        }
    }

    #[tokio::test]
    async fn test_deliver_writes_one_file() {
        let dir = std::env::temp_dir().join(format!("byteforge-outbox-{}", Uuid::new_v4()));
        let mailer = OutboxMailer::new(dir.clone());

        mailer.deliver(&sample_mail()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let path = entries[0].as_ref().unwrap().path();
        let stored: OutgoingMail =
            serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(stored, sample_mail());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
