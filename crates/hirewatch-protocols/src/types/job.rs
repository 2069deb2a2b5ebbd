//! Job cards returned by the listing search.

use serde::{Deserialize, Deserializer, Serialize};

/// One listing record. Only the fields the digest needs are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub job_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
}

impl JobCard {
    pub fn new(
        job_id: impl Into<String>,
        job_title: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            job_title: job_title.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_no_cards<'de, D>(deserializer: D) -> Result<Vec<JobCard>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<JobCard>>::deserialize(deserializer)?.unwrap_or_default())
}

/// First page of a job search.
///
/// `next_token` is carried along for logging only; pagination is never followed.
/// Its shape is opaque, so any JSON value is accepted. A `null` card list
/// reads as no cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQueryResult {
    #[serde(rename = "jobCards", default, deserialize_with = "null_as_no_cards")]
    pub cards: Vec<JobCard>,
    #[serde(default)]
    pub next_token: Option<serde_json::Value>,
}

impl JobQueryResult {
    pub fn new(cards: Vec<JobCard>) -> Self {
        Self {
            cards,
            next_token: None,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the upstream reported more pages than were fetched.
    pub fn has_more(&self) -> bool {
        match &self.next_token {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(t)) => !t.is_empty(),
            Some(_) => true,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
