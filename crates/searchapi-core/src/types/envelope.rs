//! Paged envelopes wrapping the per-type result lists.

use serde::{Deserialize, Serialize};

use super::results::{ArticleResult, AudioResult, ImageResult, LearningpathResult};
use super::Language;
use crate::traits::Paged;

/// One page of results of a single resource type.
///
/// - `result_type`: discriminant sent by the backend under the `type` key
/// - `language`: language the query was resolved to
/// - `results`: hits in ranking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    #[serde(rename = "type")]
    pub result_type: String,
    pub language: Language,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub results: Vec<T>,
}

pub type ArticleResults = SearchResults<ArticleResult>;
pub type AudioResults = SearchResults<AudioResult>;
pub type ImageResults = SearchResults<ImageResult>;
pub type LearningpathResults = SearchResults<LearningpathResult>;

impl<T> Paged for SearchResults<T> {
    type Item = T;

    fn total_count(&self) -> i64 { self.total_count }
    fn page(&self) -> Option<i64> { Some(self.page) }
    fn page_size(&self) -> i64 { self.page_size }
    fn results(&self) -> &[T] { &self.results }
}
