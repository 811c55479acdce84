//! HTTP mail API client.
//!
//! Posts verification mail to a JSON HTTP mail API (Mailgun-style send
//! endpoint). E-mail addresses are masked in logs.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

use bb_core::services::auth::{mask_email, EmailSender};
use bb_shared::config::MailConfig;

use crate::InfrastructureError;

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// HTTP mail API implementation of the e-mail sender
pub struct HttpEmailSender {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpEmailSender {
    /// Create a new HTTP mail sender
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("HTTP mail sender ready, from: {}", config.from_address);
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailConfig::from_env())
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send_verification(&self, email: &str, token: &str) -> Result<String, String> {
        let body = json!({
            "from": self.config.from_address,
            "to": email,
            "subject": "Confirm your BookBarter account",
            "text": format!(
                "Welcome to BookBarter!\n\n\
                 Use this token to confirm your account: {}\n\n\
                 The token is valid for a limited time. If you did not register, \
                 ignore this message.",
                token
            ),
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("mail API request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            error!(
                "mail API returned {} for {}",
                status,
                mask_email(email)
            );
            return Err(format!("mail API returned {}", status));
        }

        let message_id = response
            .json::<SendResponse>()
            .await
            .ok()
            .and_then(|r| r.id)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        info!(
            "verification mail sent to {}, message id {}",
            mask_email(email),
            message_id
        );
        Ok(message_id)
    }
}
