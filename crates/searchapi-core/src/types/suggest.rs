//! Spelling suggestions for the query text.

use serde::{Deserialize, Serialize};

/// Suggestions produced by one named suggester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSearchSuggestion {
    pub name: String,
    pub suggestions: Vec<SearchSuggestion>,
}

/// A span of the original query (`offset`, `length` in characters) and the
/// candidate replacements for it, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestion {
    pub text: String,
    pub offset: i64,
    pub length: i64,
    pub options: Vec<SuggestOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestOption {
    pub text: String,
    pub score: f64,
}
