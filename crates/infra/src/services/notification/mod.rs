mod mailer;

pub use mailer::{HttpMailer, IMailer, InMemoryMailer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

/// The templated emails this application can send, shared by every
/// module that needs to notify someone. The template for each type is
/// owned by the mail gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    Welcome,
    PasswordReset,
    EventApproved,
    EventRejected,
    PostEventReminder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailNotification {
    pub to: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    /// Template context, shape depends on `email_type`
    pub context: serde_json::Value,
}

/// Accepts email notification requests and hands them to an
/// asynchronous delivery channel. `dispatch` returns as soon as the
/// request is queued; delivery success or failure is only ever
/// reported through logging by the delivery task, never to the caller.
#[derive(Debug, Clone)]
pub struct NotificationService {
    sender: UnboundedSender<EmailNotification>,
}

impl NotificationService {
    pub fn new(mailer: Arc<dyn IMailer>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(deliver_email_notifications(receiver, mailer));
        Self { sender }
    }

    pub fn dispatch(&self, notification: EmailNotification) {
        let email_type = notification.email_type;
        let to = notification.to.clone();
        if self.sender.send(notification).is_err() {
            error!(
                "Email delivery channel is closed, dropping {:?} to {}",
                email_type, to
            );
            return;
        }
        info!("Email notification queued: {:?} to {}", email_type, to);
    }
}

async fn deliver_email_notifications(
    mut receiver: UnboundedReceiver<EmailNotification>,
    mailer: Arc<dyn IMailer>,
) {
    while let Some(notification) = receiver.recv().await {
        match mailer.send(&notification).await {
            Ok(_) => info!(
                "Email sent: {:?} to {}",
                notification.email_type, notification.to
            ),
            Err(e) => error!(
                "Failed to send email {:?} to {}: {:?}",
                notification.email_type, notification.to, e
            ),
        }
    }
}
