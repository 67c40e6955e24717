use serde_json::{json, Value};

use searchapi_core::traits::{Localized, LocalizedText, Paged};
use searchapi_core::types::*;

fn roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let encoded = serde_json::to_string(value).expect("encode");
    serde_json::from_str(&encoded).expect("decode")
}

fn title(text: &str, language: &str) -> Title {
    Title { title: text.to_string(), language: language.to_string() }
}

fn summary_json() -> Value {
    json!({
        "id": 7,
        "title": { "title": "Brøk", "language": "nb" },
        "metaDescription": { "metaDescription": "Om brøk", "language": "nb" },
        "url": "https://example.org/article/7",
        "contexts": [{
            "id": "urn:resource:7",
            "subject": "Matematikk",
            "subjectId": "urn:subject:1",
            "relevance": "Kjernestoff",
            "path": "/subject:1/topic:2/resource:7",
            "breadcrumbs": ["Matematikk", "Tall", "Brøk"],
            "filters": [{ "id": "urn:filter:1", "name": "VG1", "relevance": "Kjernestoff" }],
            "learningResourceType": "standard",
            "resourceTypes": [{ "id": "urn:resourcetype:article", "name": "Fagartikkel", "language": "nb" }],
            "language": "nb"
        }],
        "supportedLanguages": ["nb", "nn"],
        "learningResourceType": "standard",
        "traits": ["VIDEO"],
        "score": 12.5,
        "highlights": [{ "field": "content", "matches": ["<em>brøk</em> er"] }],
        "paths": ["/subject:1/topic:2/resource:7"],
        "lastUpdated": "2023-04-01T10:00:00Z"
    })
}

#[test]
fn article_result_without_introduction_roundtrips() {
    let article = ArticleResult {
        id: 42,
        title: title("Cats", "en"),
        introduction: None,
        article_type: "standard".to_string(),
        supported_languages: vec!["en".to_string(), "nb".to_string()],
    };

    let encoded = serde_json::to_value(&article).expect("encode");
    assert_eq!(
        encoded,
        json!({
            "id": 42,
            "title": { "title": "Cats", "language": "en" },
            "articleType": "standard",
            "supportedLanguages": ["en", "nb"]
        }),
        "absent introduction is omitted from the wire form"
    );
    assert_eq!(roundtrip(&article), article);
}

#[test]
fn article_result_with_introduction_roundtrips() {
    let article = ArticleResult {
        id: 42,
        title: title("Cats", "en"),
        introduction: Some(ArticleIntroduction { introduction: "All about cats".to_string(), language: "en".to_string() }),
        article_type: "standard".to_string(),
        supported_languages: vec!["en".to_string(), "nb".to_string()],
    };

    let encoded = serde_json::to_value(&article).expect("encode");
    assert_eq!(encoded["introduction"], json!({ "introduction": "All about cats", "language": "en" }));
    assert_eq!(roundtrip(&article), article);
}

#[test]
fn missing_required_field_fails() {
    let payload = json!({
        "id": 42,
        "title": { "title": "Cats", "language": "en" },
        "supportedLanguages": ["en"]
    });
    let err = serde_json::from_value::<ArticleResult>(payload).unwrap_err();
    assert!(err.to_string().contains("articleType"), "unexpected error: {err}");

    let no_language = json!({ "title": "Cats" });
    assert!(serde_json::from_value::<Title>(no_language).is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let payload = json!({ "title": "Cats", "language": "en", "extra": true });
    let decoded: Title = serde_json::from_value(payload).expect("decode");
    assert_eq!(decoded, title("Cats", "en"));
}

#[test]
fn summary_optionals_absent_decode_as_none() {
    let summary: MultiSearchSummary = serde_json::from_value(summary_json()).expect("decode");
    assert!(summary.meta_image.is_none());
    assert!(summary.status.is_none());
    assert!(summary.license.is_none());
    assert_eq!(summary.contexts[0].breadcrumbs, vec!["Matematikk", "Tall", "Brøk"]);
    assert_eq!(serde_json::to_value(&summary).expect("encode"), summary_json());
}

#[test]
fn summary_optionals_present_roundtrip() {
    let mut payload = summary_json();
    payload["metaImage"] = json!({ "url": "https://example.org/img/1", "alt": "En kake", "language": "nb" });
    payload["status"] = json!({ "current": "PUBLISHED", "other": ["QUALITY_ASSURED"] });
    payload["license"] = json!("CC-BY-SA-4.0");

    let summary: MultiSearchSummary = serde_json::from_value(payload.clone()).expect("decode");
    assert_eq!(summary.meta_image.as_ref().map(|i| i.alt.as_str()), Some("En kake"));
    assert_eq!(summary.status.as_ref().map(|s| s.current.as_str()), Some("PUBLISHED"));
    assert_eq!(summary.license.as_deref(), Some("CC-BY-SA-4.0"));
    assert_eq!(serde_json::to_value(&summary).expect("encode"), payload);
    assert_eq!(roundtrip(&summary), summary);
}

#[test]
fn multi_search_result_page_is_optional() {
    let payload = json!({
        "totalCount": 1,
        "pageSize": 10,
        "language": "nb",
        "results": [summary_json()],
        "suggestions": [],
        "aggregations": []
    });
    let result: MultiSearchResult = serde_json::from_value(payload.clone()).expect("decode");
    assert_eq!(result.page, None);
    assert_eq!(Paged::page(&result), None);
    assert_eq!(result.results().len(), 1);
    assert_eq!(serde_json::to_value(&result).expect("encode"), payload);

    let mut with_page = payload;
    with_page["page"] = json!(2);
    let result: MultiSearchResult = serde_json::from_value(with_page).expect("decode");
    assert_eq!(result.page, Some(2));
}

#[test]
fn group_search_result_requires_resource_type() {
    let mut payload = json!({
        "totalCount": 0,
        "page": 1,
        "pageSize": 10,
        "language": "nb",
        "results": [],
        "suggestions": [],
        "aggregations": []
    });
    assert!(serde_json::from_value::<GroupSearchResult>(payload.clone()).is_err());

    payload["resourceType"] = json!("urn:resourcetype:learningpath");
    let group: GroupSearchResult = serde_json::from_value(payload).expect("decode");
    assert_eq!(group.resource_type, "urn:resourcetype:learningpath");
    assert_eq!(group.total_count(), 0);
    assert_eq!(roundtrip(&group), group);
}

#[test]
fn aggregation_values_keep_order() {
    let aggregation = MultiSearchTermsAggregation {
        field: "subject".to_string(),
        sum_other_doc_count: 3,
        doc_count_error_upper_bound: 0,
        values: vec![
            TermValue { value: "math".to_string(), count: 10 },
            TermValue { value: "science".to_string(), count: 4 },
        ],
    };

    let encoded = serde_json::to_value(&aggregation).expect("encode");
    assert_eq!(encoded["values"], json!([{ "value": "math", "count": 10 }, { "value": "science", "count": 4 }]));
    assert_eq!(encoded["sumOtherDocCount"], json!(3));
    assert_eq!(encoded["docCountErrorUpperBound"], json!(0));

    let decoded = roundtrip(&aggregation);
    let order: Vec<&str> = decoded.values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(order, vec!["math", "science"]);
}

#[test]
fn validation_error_with_no_messages_keeps_empty_list() {
    let error = ValidationError {
        code: "VALIDATION".to_string(),
        description: "Validation Error".to_string(),
        messages: vec![],
        occured_at: "2023-04-01T10:00:00Z".to_string(),
    };

    let encoded = serde_json::to_value(&error).expect("encode");
    assert_eq!(encoded["messages"], json!([]), "empty list is sent, not omitted");
    assert_eq!(encoded["occuredAt"], json!("2023-04-01T10:00:00Z"));

    let decoded = roundtrip(&error);
    assert!(decoded.messages.is_empty());
    assert_eq!(decoded, error);

    let missing = json!({ "code": "VALIDATION", "description": "x", "occuredAt": "2023-04-01T10:00:00Z" });
    assert!(serde_json::from_value::<ValidationError>(missing).is_err(), "missing list is not an empty list");
}

#[test]
fn search_error_uses_type_key() {
    let payload = json!({ "type": "GENERIC", "errorMsg": "Something went wrong" });
    let error: SearchError = serde_json::from_value(payload.clone()).expect("decode");
    assert_eq!(error.error_type, "GENERIC");
    assert_eq!(error.error_msg, "Something went wrong");
    assert_eq!(serde_json::to_value(&error).expect("encode"), payload);
}

#[test]
fn paged_envelopes_share_shape() {
    let images = ImageResults {
        result_type: "images".to_string(),
        language: "nb".to_string(),
        total_count: 31,
        page: 2,
        page_size: 10,
        results: vec![ImageResult {
            id: 3,
            title: title("Kake", "nb"),
            alt_text: ImageAltText { alt_text: "En kake".to_string(), language: "nb".to_string() },
            preview_url: "https://example.org/image-api/raw/kake.jpg".to_string(),
            meta_url: "https://example.org/image-api/v2/images/3".to_string(),
            supported_languages: vec!["nb".to_string()],
        }],
    };

    let encoded = serde_json::to_value(&images).expect("encode");
    assert_eq!(encoded["type"], json!("images"));
    assert_eq!(encoded["pageSize"], json!(10));
    assert_eq!(encoded["results"][0]["altText"]["altText"], json!("En kake"));
    assert_eq!(encoded["results"][0]["previewUrl"], json!("https://example.org/image-api/raw/kake.jpg"));

    let decoded = roundtrip(&images);
    assert_eq!(decoded, images);
    assert_eq!(decoded.page(), Some(2));
    assert_eq!(decoded.results()[0].id, 3);
}

#[test]
fn learningpath_and_audio_results_decode() {
    let learningpaths: LearningpathResults = serde_json::from_value(json!({
        "type": "learningpaths",
        "language": "en",
        "totalCount": 1,
        "page": 1,
        "pageSize": 10,
        "results": [{
            "id": 9,
            "title": { "title": "Path", "language": "en" },
            "introduction": { "introduction": "Start here", "language": "en" },
            "supportedLanguages": ["en"]
        }]
    }))
    .expect("decode learningpaths");
    assert_eq!(learningpaths.results[0].introduction.text(), "Start here");

    let audios: AudioResults = serde_json::from_value(json!({
        "type": "audios",
        "language": "en",
        "totalCount": 0,
        "page": 1,
        "pageSize": 10,
        "results": []
    }))
    .expect("decode audios");
    assert!(audios.results.is_empty());
}

#[test]
fn suggestions_keep_span_and_option_order() {
    let suggestion = MultiSearchSuggestion {
        name: "content".to_string(),
        suggestions: vec![SearchSuggestion {
            text: "kattt".to_string(),
            offset: 4,
            length: 5,
            options: vec![
                SuggestOption { text: "katt".to_string(), score: 0.8 },
                SuggestOption { text: "kart".to_string(), score: 0.6 },
            ],
        }],
    };

    let decoded = roundtrip(&suggestion);
    assert_eq!(decoded, suggestion);
    let span = &decoded.suggestions[0];
    assert_eq!((span.offset, span.length), (4, 5));
    assert_eq!(span.options[0].text, "katt");
}

#[test]
fn localized_units_expose_language_and_text() {
    let description = MetaDescription { meta_description: "Om katter".to_string(), language: "nb".to_string() };
    assert_eq!(description.language(), "nb");
    assert_eq!(description.text(), "Om katter");
    assert_eq!(serde_json::to_value(&description).expect("encode"), json!({ "metaDescription": "Om katter", "language": "nb" }));

    let image = MetaImage { url: "u".to_string(), alt: "a".to_string(), language: "en".to_string() };
    assert_eq!(image.language(), "en");
}
