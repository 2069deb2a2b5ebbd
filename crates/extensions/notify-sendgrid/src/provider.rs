//! SendGrid mailer implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use hirewatch_protocols::error::NotifyError;
use hirewatch_protocols::provider::Mailer;
use hirewatch_protocols::types::{DeliveryReceipt, EmailDigest};

use crate::api::{Content, EmailAddress, MailSendRequest, Personalization};

const DEFAULT_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MESSAGE_ID_HEADER: &str = "X-Message-Id";

/// Delivers digests through SendGrid.
pub struct SendGridMailer {
    api_key: String,
    api_url: String,
    from: EmailAddress,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl SendGridMailer {
    pub fn new(api_key: String, from_address: String) -> Self {
        Self::with_url(api_key, from_address, DEFAULT_API_URL.to_string())
    }

    /// Create mailer against a custom endpoint.
    pub fn with_url(api_key: String, from_address: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            from: EmailAddress::new(from_address),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            client: reqwest::Client::new(),
        }
    }

    /// Display name shown next to the sender address.
    pub fn with_from_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.from.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn build_request(&self, digest: &EmailDigest) -> Result<MailSendRequest, NotifyError> {
        if digest.recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        Ok(MailSendRequest {
            personalizations: vec![Personalization {
                to: digest.recipients.iter().map(EmailAddress::new).collect(),
            }],
            from: self.from.clone(),
            subject: digest.subject.clone(),
            content: vec![
                Content {
                    content_type: "text/plain".to_string(),
                    value: digest.text_body.clone(),
                },
                Content {
                    content_type: "text/html".to_string(),
                    value: digest.html_body.clone(),
                },
            ],
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> NotifyError {
        if e.is_timeout() {
            NotifyError::Timeout(self.timeout_secs)
        } else {
            NotifyError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    fn id(&self) -> &str {
        "sendgrid"
    }

    async fn send(&self, digest: &EmailDigest) -> Result<DeliveryReceipt, NotifyError> {
        let request = self.build_request(digest)?;

        debug!(
            "Sending '{}' to {} recipient(s)",
            digest.subject,
            digest.recipients.len()
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let message_id = response
            .headers()
            .get(MESSAGE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        info!("SendGrid accepted message with status {}", status.as_u16());

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            message_id,
        })
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
