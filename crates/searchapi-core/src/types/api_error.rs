//! Error bodies returned by the search API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub error_msg: String,
}

/// Rejected request parameters. `messages` may be empty but is always sent.
/// `occured_at` keeps the backend's spelling and its string timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub code: String,
    pub description: String,
    pub messages: Vec<ValidationMessage>,
    pub occured_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessage {
    pub field: String,
    pub message: String,
}
