//! Term facets surfaced from the search engine.

use serde::{Deserialize, Serialize};

/// Term-frequency breakdown over `field`.
///
/// `values` is in rank order. `sum_other_doc_count` and
/// `doc_count_error_upper_bound` are the engine's approximation bounds and
/// are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSearchTermsAggregation {
    pub field: String,
    pub sum_other_doc_count: i64,
    pub doc_count_error_upper_bound: i64,
    pub values: Vec<TermValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermValue {
    pub value: String,
    pub count: i64,
}
