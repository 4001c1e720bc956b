use super::EmailNotification;
use std::sync::Mutex;

#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, notification: &EmailNotification) -> anyhow::Result<()>;
}

/// Hands email payloads to an external mail gateway over HTTP. Template
/// rendering and the actual SMTP hop happen on the gateway side.
pub struct HttpMailer {
    client: reqwest::Client,
    gateway_url: String,
}

impl HttpMailer {
    pub fn new(gateway_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway_url,
        }
    }
}

#[async_trait::async_trait]
impl IMailer for HttpMailer {
    async fn send(&self, notification: &EmailNotification) -> anyhow::Result<()> {
        self.client
            .post(&self.gateway_url)
            .json(notification)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Keeps sent email in memory. Used in tests and as the fallback when no
/// mail gateway is configured.
pub struct InMemoryMailer {
    sent: Mutex<Vec<EmailNotification>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything sent so far
    pub fn sent(&self) -> Vec<EmailNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, notification: &EmailNotification) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
