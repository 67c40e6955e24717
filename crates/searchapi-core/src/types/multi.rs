//! Results of the combined search across resource types.

use serde::{Deserialize, Serialize};

use super::aggregation::MultiSearchTermsAggregation;
use super::localized::{MetaDescription, MetaImage, Title};
use super::suggest::MultiSearchSuggestion;
use super::taxonomy::ApiTaxonomyContext;
use super::Language;
use crate::traits::Paged;

/// A hit of any resource type.
///
/// `score` is the engine's relevance, higher is better, with no fixed bound.
/// `paths` lists alternate URL paths to the same resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSearchSummary {
    pub id: i64,
    pub title: Title,
    pub meta_description: MetaDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<MetaImage>,
    pub url: String,
    pub contexts: Vec<ApiTaxonomyContext>,
    pub supported_languages: Vec<Language>,
    pub learning_resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub traits: Vec<String>,
    pub score: f64,
    pub highlights: Vec<HighlightedField>,
    pub paths: Vec<String>,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Fragments of `field` that matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedField {
    pub field: String,
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub current: String,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSearchResult {
    pub total_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    pub page_size: i64,
    pub language: Language,
    pub results: Vec<MultiSearchSummary>,
    pub suggestions: Vec<MultiSearchSuggestion>,
    pub aggregations: Vec<MultiSearchTermsAggregation>,
}

/// A `MultiSearchResult` restricted to one `resource_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSearchResult {
    pub total_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    pub page_size: i64,
    pub language: Language,
    pub results: Vec<MultiSearchSummary>,
    pub suggestions: Vec<MultiSearchSuggestion>,
    pub aggregations: Vec<MultiSearchTermsAggregation>,
    pub resource_type: String,
}

impl Paged for MultiSearchResult {
    type Item = MultiSearchSummary;

    fn total_count(&self) -> i64 { self.total_count }
    fn page(&self) -> Option<i64> { self.page }
    fn page_size(&self) -> i64 { self.page_size }
    fn results(&self) -> &[MultiSearchSummary] { &self.results }
}

impl Paged for GroupSearchResult {
    type Item = MultiSearchSummary;

    fn total_count(&self) -> i64 { self.total_count }
    fn page(&self) -> Option<i64> { self.page }
    fn page_size(&self) -> i64 { self.page_size }
    fn results(&self) -> &[MultiSearchSummary] { &self.results }
}
