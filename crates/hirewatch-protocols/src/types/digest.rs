//! Outbound email digest.

use serde::Serialize;

/// One aggregated email covering every matched job card of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailDigest {
    /// Every entry becomes a `to` address of a single message.
    pub recipients: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    /// Number of job cards listed in the body.
    pub item_count: usize,
}

/// Provider confirmation of a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub message_id: Option<String>,
}
