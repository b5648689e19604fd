/*!
 * Tests for translation provider implementations
 */

use serde_json::json;
use tarjimon::errors::ProviderError;
use tarjimon::providers::google::GoogleTranslate;
use tarjimon::providers::mock::MockProvider;
use tarjimon::providers::mymemory::{MyMemory, MyMemoryResponse};
use tarjimon::providers::{TranslationProvider, TranslationRequest};

#[test]
fn test_googleExtractTranslation_shouldConcatenateSegments() {
    // Shape returned by the gtx endpoint for a two-sentence input.
    let body = json!([
        [
            ["Привет. ", "Salom. ", null, null],
            ["Как дела?", "Qalaysiz?", null, null]
        ],
        null,
        "uz"
    ]);

    let translated = GoogleTranslate::extract_translation(&body).unwrap();
    assert_eq!(translated, "Привет. Как дела?");
}

#[test]
fn test_googleExtractTranslation_withEmptySegments_shouldReturnEmpty() {
    let body = json!([[], null, "uz"]);
    let translated = GoogleTranslate::extract_translation(&body).unwrap();
    assert_eq!(translated, "");
}

#[test]
fn test_googleExtractTranslation_withUnexpectedShape_shouldBeParseError() {
    let body = json!({"error": "unexpected"});
    let result = GoogleTranslate::extract_translation(&body);
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

#[test]
fn test_myMemoryResponse_shouldDeserializeAndExtract() {
    let response: MyMemoryResponse = serde_json::from_value(json!({
        "responseData": { "translatedText": "Привет" },
        "responseStatus": 200
    }))
    .unwrap();

    let translated = MyMemory::extract_translation(response).unwrap();
    assert_eq!(translated, "Привет");
}

#[test]
fn test_myMemoryResponse_withStringStatus_shouldDeserialize() {
    // MyMemory reports errors with a string status in the body.
    let response: MyMemoryResponse = serde_json::from_value(json!({
        "responseData": { "translatedText": "INVALID LANGUAGE PAIR" },
        "responseStatus": "403",
        "responseDetails": "INVALID LANGUAGE PAIR SPECIFIED"
    }))
    .unwrap();

    let result = MyMemory::extract_translation(response);
    match result {
        Err(ProviderError::ApiError {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 403);
            assert!(message.contains("INVALID LANGUAGE PAIR"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[test]
fn test_translationRequest_shouldCarryFieldsVerbatim() {
    let request = TranslationRequest::new("uz", "ru", "salom dunyo");
    assert_eq!(request.source_language, "uz");
    assert_eq!(request.target_language, "ru");
    assert_eq!(request.text, "salom dunyo");
}

#[tokio::test]
async fn test_mockProvider_name_shouldIdentifyBackend() {
    let provider = MockProvider::working();
    assert_eq!(provider.name(), "mock");

    let request = TranslationRequest::new("uz", "ru", "salom");
    let text = provider.translate(&request).await.unwrap();
    assert!(text.contains("salom"));
}
