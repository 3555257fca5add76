use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("mail delivery failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail endpoint answered with status {0}")]
    Rejected(u16),
}

/// Outgoing email, serialized as the webhook payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError>;

    fn sender(&self) -> &str;
}

pub fn otp_mail(from: &str, to: &str, code: &str) -> OutgoingMail {
    OutgoingMail {
        from: from.to_string(),
        to: to.to_string(),
        subject: "Your RescueHub verification code".to_string(),
        text: format!(
            "Your verification code is {}. It expires in {} minutes.",
            code,
            crate::services::otp::OTP_TTL_MINUTES
        ),
    }
}

/// Posts mail as JSON to an HTTP relay.
pub struct WebhookMailer {
    client: Client,
    url: String,
    from: String,
}

impl WebhookMailer {
    pub fn new(url: String, from: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, url, from }
    }
}

#[async_trait]
impl Mailer for WebhookMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError> {
        let response = self
            .client
            .post(&self.url)
            .header("User-Agent", "RescueHub-Mailer/1.0")
            .json(&mail)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), to = %mail.to, "mail relay rejected message");
            return Err(MailerError::Rejected(status.as_u16()));
        }

        tracing::debug!(to = %mail.to, "mail delivered to relay");
        Ok(())
    }

    fn sender(&self) -> &str {
        &self.from
    }
}

/// Writes mail to the log instead of delivering it.
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: String) -> Self {
        Self { from }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "no mail relay configured, message not delivered");
        Ok(())
    }

    fn sender(&self) -> &str {
        &self.from
    }
}
