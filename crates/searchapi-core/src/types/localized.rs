//! Text values paired with the locale they are written in.

use serde::{Deserialize, Serialize};

use super::Language;
use crate::traits::{Localized, LocalizedText};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub title: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIntroduction {
    pub introduction: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDescription {
    pub meta_description: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAltText {
    pub alt_text: String,
    pub language: Language,
}

/// Cover image of a resource. `alt` is written in `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaImage {
    pub url: String,
    pub alt: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathIntroduction {
    pub introduction: String,
    pub language: Language,
}

macro_rules! localized_text {
    ($($ty:ident => $field:ident),* $(,)?) => {
        $(
            impl Localized for $ty {
                fn language(&self) -> &str { &self.language }
            }

            impl LocalizedText for $ty {
                fn text(&self) -> &str { &self.$field }
            }
        )*
    };
}

localized_text! {
    Title => title,
    ArticleIntroduction => introduction,
    MetaDescription => meta_description,
    ImageAltText => alt_text,
    LearningPathIntroduction => introduction,
}

impl Localized for MetaImage {
    fn language(&self) -> &str { &self.language }
}
