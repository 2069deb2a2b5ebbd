//! Digest delivery.

use std::sync::Arc;

use tracing::{debug, info};

use hirewatch_protocols::error::NotifyError;
use hirewatch_protocols::provider::Mailer;
use hirewatch_protocols::types::{DeliveryReceipt, JobCard};

use crate::digest::DigestBuilder;

/// What happened to a batch of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
    /// No cards, nothing sent.
    Skipped,
    Sent { receipt: DeliveryReceipt, items: usize },
}

/// Formats cards and hands the digest to a [`Mailer`].
pub struct Notifier {
    builder: DigestBuilder,
    mailer: Arc<dyn Mailer>,
}

impl Notifier {
    pub fn new(builder: DigestBuilder, mailer: Arc<dyn Mailer>) -> Self {
        Self { builder, mailer }
    }

    pub async fn send_digest(&self, cards: &[JobCard]) -> Result<DigestOutcome, NotifyError> {
        let Some(digest) = self.builder.build(cards) else {
            debug!("No job cards, skipping email");
            return Ok(DigestOutcome::Skipped);
        };

        if digest.recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        let receipt = self.mailer.send(&digest).await?;
        info!(
            "Digest '{}' delivered via {} (status {})",
            digest.subject,
            self.mailer.id(),
            receipt.status
        );

        Ok(DigestOutcome::Sent {
            receipt,
            items: digest.item_count,
        })
    }
}
