//! Digest email assembly.

use url::form_urlencoded;

use hirewatch_config::EmailConfig;
use hirewatch_protocols::types::{EmailDigest, JobCard};

/// Plain-text part sent alongside the HTML list.
pub const TEXT_BODY: &str = "Jobs";

/// Builds one [`EmailDigest`] from a batch of job cards.
#[derive(Debug, Clone)]
pub struct DigestBuilder {
    recipients: Vec<String>,
    subject_prefix: String,
    detail_url: String,
    detail_locale: String,
}

impl DigestBuilder {
    pub fn new(
        recipients: Vec<String>,
        subject_prefix: impl Into<String>,
        detail_url: impl Into<String>,
        detail_locale: impl Into<String>,
    ) -> Self {
        Self {
            recipients,
            subject_prefix: subject_prefix.into(),
            detail_url: detail_url.into(),
            detail_locale: detail_locale.into(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Self {
        Self::new(
            config.recipients.clone(),
            config.subject_prefix.clone(),
            config.detail_url.clone(),
            config.detail_locale.clone(),
        )
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// `None` when there is nothing to send.
    pub fn build(&self, cards: &[JobCard]) -> Option<EmailDigest> {
        if cards.is_empty() {
            return None;
        }

        let mut html = String::from("<ul>");
        for card in cards {
            html.push_str(&self.list_item(card));
        }
        html.push_str("</ul>");

        Some(EmailDigest {
            recipients: self.recipients.clone(),
            subject: format!("{} - {}", self.subject_prefix, cards.len()),
            text_body: TEXT_BODY.to_string(),
            html_body: html,
            item_count: cards.len(),
        })
    }

    /// Listing page for one card. Query values are percent-encoded so the
    /// link never needs HTML escaping.
    pub fn detail_link(&self, job_id: &str) -> String {
        let job_id: String = form_urlencoded::byte_serialize(job_id.as_bytes()).collect();
        let locale: String =
            form_urlencoded::byte_serialize(self.detail_locale.as_bytes()).collect();
        format!("{}?jobId={}&locale={}", self.detail_url, job_id, locale)
    }

    fn list_item(&self, card: &JobCard) -> String {
        format!(
            "<li><a href=\"{}\">{} ({}, {})</a></li>",
            self.detail_link(&card.job_id),
            escape_html(&card.job_title),
            escape_html(&card.city),
            escape_html(&card.state),
        )
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "digest_tests.rs"]
mod tests;
