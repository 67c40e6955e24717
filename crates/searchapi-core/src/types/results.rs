//! Single hits returned by the per-type search endpoints.

use serde::{Deserialize, Serialize};

use super::localized::{ArticleIntroduction, ImageAltText, LearningPathIntroduction, Title};
use super::Language;

/// An article hit. `introduction` is absent for articles without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResult {
    pub id: i64,
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<ArticleIntroduction>,
    pub article_type: String,
    pub supported_languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioResult {
    pub id: i64,
    pub title: Title,
    pub url: String,
    pub supported_languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub id: i64,
    pub title: Title,
    pub alt_text: ImageAltText,
    pub preview_url: String,
    pub meta_url: String,
    pub supported_languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningpathResult {
    pub id: i64,
    pub title: Title,
    pub introduction: LearningPathIntroduction,
    pub supported_languages: Vec<Language>,
}
