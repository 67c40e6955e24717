//! Wire records of the search API.
//!
//! Field names follow the backend's camelCase keys through
//! `#[serde(rename_all = "camelCase")]`. Optional fields decode to `None`
//! when absent and are omitted on encode; every other field is required.

pub mod aggregation;
pub mod api_error;
pub mod envelope;
pub mod localized;
pub mod multi;
pub mod results;
pub mod suggest;
pub mod taxonomy;

pub use aggregation::{MultiSearchTermsAggregation, TermValue};
pub use api_error::{SearchError, ValidationError, ValidationMessage};
pub use envelope::{ArticleResults, AudioResults, ImageResults, LearningpathResults, SearchResults};
pub use localized::{
    ArticleIntroduction, ImageAltText, LearningPathIntroduction, MetaDescription, MetaImage, Title,
};
pub use multi::{GroupSearchResult, HighlightedField, MultiSearchResult, MultiSearchSummary, Status};
pub use results::{ArticleResult, AudioResult, ImageResult, LearningpathResult};
pub use suggest::{MultiSearchSuggestion, SearchSuggestion, SuggestOption};
pub use taxonomy::{ApiTaxonomyContext, TaxonomyContextFilter, TaxonomyResourceType};

/// Locale code such as `"nb"` or `"en"`.
pub type Language = String;
