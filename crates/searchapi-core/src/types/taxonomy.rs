//! Placement of a resource in the subject/topic hierarchy.

use serde::{Deserialize, Serialize};

use super::Language;

/// One context a resource appears in.
///
/// `breadcrumbs` runs from the subject (root) down to the parent topic (leaf).
/// `relevance` is kept as the backend's open string, e.g. `"Kjernestoff"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTaxonomyContext {
    pub id: String,
    pub subject: String,
    pub subject_id: String,
    pub relevance: String,
    pub path: String,
    pub breadcrumbs: Vec<String>,
    pub filters: Vec<TaxonomyContextFilter>,
    pub learning_resource_type: String,
    pub resource_types: Vec<TaxonomyResourceType>,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyContextFilter {
    pub id: String,
    pub name: String,
    pub relevance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyResourceType {
    pub id: String,
    pub name: String,
    pub language: Language,
}
