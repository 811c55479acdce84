//! Mock e-mail sender for development and tests.
//!
//! Records every send and logs the raw token so the verification flow can be
//! exercised without a mail provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use bb_core::services::auth::{mask_email, EmailSender};

/// A sent mail recorded by the mock
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub token: String,
}

/// Recording mock implementation of the e-mail sender
pub struct MockEmailSender {
    sent: Arc<RwLock<Vec<SentMail>>>,
    counter: AtomicUsize,
}

impl MockEmailSender {
    /// Create a new mock sender
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            counter: AtomicUsize::new(0),
        }
    }

    /// All mails sent so far
    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_verification(&self, email: &str, token: &str) -> Result<String, String> {
        info!(
            "mock mail to {}: verification token {}",
            mask_email(email),
            token
        );
        self.sent.write().await.push(SentMail {
            to: email.to_string(),
            token: token.to_string(),
        });
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mock-mail-{}", n))
    }
}
