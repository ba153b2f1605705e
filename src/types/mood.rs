//! API types for mood analysis operations.
//!
//! This module contains request/response types for analyzing free text and
//! listing the moods the engine can classify.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mood::{Analysis, AnalysisResult, CatalogQuery, MoodInfo};

/// Request to analyze the mood of some text.
///
/// `text` is kept untyped so that a non-string value can be reported as a
/// bad request instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Response from mood analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
    /// True when the engine returned its default result
    pub fallback: bool,
    /// Why the default result was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Parameters for the music catalog lookup
    pub query: CatalogQuery,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        let fallback = analysis.is_fallback();
        let reason = analysis.fallback_reason().map(ToString::to_string);
        let result = analysis.into_result();
        let query = result.catalog_query();

        Self {
            result,
            fallback,
            reason,
            query,
        }
    }
}

/// Response listing available moods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMoodsResponse {
    pub moods: Vec<MoodInfo>,
    pub count: usize,
}

impl From<Vec<MoodInfo>> for ListMoodsResponse {
    fn from(moods: Vec<MoodInfo>) -> Self {
        Self {
            count: moods.len(),
            moods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{AnalysisError, Mood, MoodEngine};

    #[test]
    fn test_analyze_request_text_is_optional() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_none());

        let req: AnalyzeRequest = serde_json::from_str(r#"{"text": 42}"#).unwrap();
        assert_eq!(req.text, Some(Value::from(42)));

        let req: AnalyzeRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(req.text.as_ref().and_then(Value::as_str), Some("hi"));
    }

    #[test]
    fn test_analyze_request_from_msgpack() {
        let bytes = rmp_serde::to_vec_named(&serde_json::json!({ "text": "so happy" })).unwrap();
        let req: AnalyzeRequest = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(req.text.as_ref().and_then(Value::as_str), Some("so happy"));
    }

    #[test]
    fn test_response_from_classified_analysis() {
        let engine = MoodEngine::new().unwrap();
        let response = AnalyzeResponse::from(engine.analyze("I feel so sad"));

        assert!(!response.fallback);
        assert!(response.reason.is_none());
        assert_eq!(response.result.mood, Mood::Sad);
        assert_eq!(response.query.mood, Mood::Sad);
        assert_eq!(response.query.genre, response.result.genres[0]);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("reason").is_none());
        assert!(json["result"]["detectedKeywords"].is_array());
        assert!(json["query"]["targetEnergy"].is_number());
    }

    #[test]
    fn test_response_from_fallback_analysis() {
        let engine = MoodEngine::new().unwrap();
        let response = AnalyzeResponse::from(engine.analyze("   "));

        assert!(response.fallback);
        assert_eq!(
            response.reason.as_deref(),
            Some(AnalysisError::EmptyInput.to_string().as_str())
        );
        assert_eq!(response.result.mood, Mood::Chill);
    }

    #[test]
    fn test_list_moods_response_counts() {
        let engine = MoodEngine::new().unwrap();
        let resp = ListMoodsResponse::from(engine.mood_catalog());
        assert_eq!(resp.count, 11);
        assert_eq!(resp.moods.len(), 11);

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"happy\""));
        assert!(json.contains("sampleKeywords"));
    }
}
