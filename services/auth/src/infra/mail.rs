use serde_json::json;

use crate::domain::repository::MailPort;
use crate::domain::types::MailMessage;
use crate::error::AuthServiceError;

/// Transactional-mail provider client (JSON-over-HTTP send API).
#[derive(Clone)]
pub struct HttpMailClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailClient {
    pub fn new(http: reqwest::Client, api_url: String, api_key: String, from: String) -> Self {
        Self {
            http,
            api_url,
            api_key,
            from,
        }
    }
}

impl MailPort for HttpMailClient {
    async fn send(&self, message: &MailMessage) -> Result<(), AuthServiceError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": message.to,
                "subject": message.subject,
                "text": message.body,
            }))
            .send()
            .await
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("mail request: {e}")))?;

        if !response.status().is_success() {
            return Err(AuthServiceError::Internal(anyhow::anyhow!(
                "mail provider returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
