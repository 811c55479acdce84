//! Test mocks for the account service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::auth::EmailSender;

/// Recording e-mail sender; optionally failing every send
pub struct MockEmailSender {
    sent: Arc<RwLock<Vec<(String, String)>>>,
    counter: AtomicUsize,
    should_fail: bool,
}

impl MockEmailSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            counter: AtomicUsize::new(0),
            should_fail,
        }
    }

    /// The raw token last mailed to the given address
    pub async fn sent_token(&self, email: &str) -> Option<String> {
        self.sent
            .read()
            .await
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, token)| token.clone())
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_verification(&self, email: &str, token: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("mock mail failure".to_string());
        }
        self.sent
            .write()
            .await
            .push((email.to_string(), token.to_string()));
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mock-mail-{}", n))
    }
}
