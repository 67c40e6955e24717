//! Registry of every wire shape, addressable by its schema name.
//!
//! Checking a document decodes it into the typed record and encodes it back,
//! so the returned JSON is the canonical form: unknown keys dropped, absent
//! optionals omitted.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types;

macro_rules! shapes {
    ($($shape:ident),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Shape {
            $($shape,)*
        }

        impl Shape {
            pub const ALL: &'static [Shape] = &[$(Shape::$shape,)*];

            /// Schema name of the shape, e.g. `"ArticleResult"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Shape::$shape => stringify!($shape),)*
                }
            }

            /// Check a JSON document against this shape and return its canonical form.
            pub fn check(&self, json: &str) -> Result<Value> {
                tracing::debug!(shape = self.name(), bytes = json.len(), "checking document");
                match self {
                    $(Shape::$shape => {
                        let record: types::$shape = serde_json::from_str(json)
                            .map_err(|source| Error::Decode { shape: self.name(), source })?;
                        canonical(self.name(), &record)
                    })*
                }
            }

            /// Same as [`Shape::check`] for an already parsed value.
            pub fn check_value(&self, value: Value) -> Result<Value> {
                tracing::debug!(shape = self.name(), "checking value");
                match self {
                    $(Shape::$shape => decode_value::<types::$shape>(self.name(), value)
                        .and_then(|record| canonical(self.name(), &record)),)*
                }
            }
        }
    };
}

shapes! {
    Title,
    ArticleIntroduction,
    MetaDescription,
    ImageAltText,
    MetaImage,
    LearningPathIntroduction,
    ArticleResult,
    AudioResult,
    ImageResult,
    LearningpathResult,
    ArticleResults,
    AudioResults,
    ImageResults,
    LearningpathResults,
    MultiSearchSummary,
    MultiSearchResult,
    GroupSearchResult,
    HighlightedField,
    Status,
    ApiTaxonomyContext,
    TaxonomyContextFilter,
    TaxonomyResourceType,
    MultiSearchTermsAggregation,
    TermValue,
    MultiSearchSuggestion,
    SearchSuggestion,
    SuggestOption,
    SearchError,
    ValidationError,
    ValidationMessage,
}

fn decode_value<T: DeserializeOwned>(shape: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::Decode { shape, source })
}

fn canonical<T: Serialize>(shape: &'static str, record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|source| Error::Encode { shape, source })
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    /// Case-insensitive; also accepts the schema's `I`-prefixed interface
    /// names such as `IArticleResult`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let lookup = |name: &str| {
            Shape::ALL
                .iter()
                .copied()
                .find(|shape| shape.name().eq_ignore_ascii_case(name))
        };
        lookup(s)
            .or_else(|| s.strip_prefix(|c: char| c == 'I' || c == 'i').and_then(lookup))
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}
