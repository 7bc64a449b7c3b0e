use serde::{Deserialize, Serialize};

/// One feedback event as supplied by the caller.
///
/// Every field is opaque text; the store assigns the row id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedbackEntry {
    pub use_case: String,
    pub user_prompt: String,
    pub model_a: String,
    pub model_b: String,
    pub model_a_response: String,
    pub model_b_response: String,
    pub feedback: String,
    pub feedback_motivation: String,
}

impl FeedbackEntry {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// A persisted row of `feedback_log`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub id: i64,
    #[serde(flatten)]
    pub entry: FeedbackEntry,
}
