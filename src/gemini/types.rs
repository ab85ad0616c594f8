//! Wire types for the `models/{model}:generateContent` endpoint, plus
//! the generation trait the router dispatches through.

use serde::{Deserialize, Serialize};

use super::GeminiError;

/// Trait for reply generation so routing is testable without HTTP.
///
/// `fragments` is the ordered list of text parts for one request:
/// few-shot turn contents first (when a preamble applies), then the
/// live user text.
pub trait GenerateReply {
    fn generate(&self, fragments: &[String]) -> Result<String, GeminiError>;
}

/// Request body for `generateContent`: a single content element whose
/// parts carry the ordered text fragments.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Flatten ordered text fragments into the one-content shape the
    /// endpoint expects.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contents: vec![Content {
                parts: fragments
                    .into_iter()
                    .map(|text| Part { text: text.into() })
                    .collect(),
            }],
        }
    }
}

/// Response body from `generateContent`. Only the first candidate's
/// first text part is ever used.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extract the first candidate's first text part.
    ///
    /// An absent or empty `candidates` array is a malformed response,
    /// not an index fault; present-but-empty text is its own error.
    pub fn into_reply_text(self) -> Result<String, GeminiError> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(GeminiError::MalformedResponse)?;

        if text.is_empty() {
            return Err(GeminiError::EmptyReply);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Request shape ──

    #[test]
    fn request_flattens_fragments_in_order() {
        let request =
            GenerateContentRequest::from_fragments(["first turn", "second turn", "live input"]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["text"], "first turn");
        assert_eq!(parts[2]["text"], "live input");
    }

    // ── Response extraction ──

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Drink plenty of fluids."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_reply_text().unwrap(),
            "Drink plenty of fluids."
        );
    }

    #[test]
    fn missing_candidates_field_is_malformed() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_reply_text(),
            Err(GeminiError::MalformedResponse)
        ));
    }

    #[test]
    fn empty_candidates_array_is_malformed_not_a_panic() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            response.into_reply_text(),
            Err(GeminiError::MalformedResponse)
        ));
    }

    #[test]
    fn candidate_without_parts_is_malformed() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            response.into_reply_text(),
            Err(GeminiError::MalformedResponse)
        ));
    }

    #[test]
    fn empty_text_is_empty_reply() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#)
                .unwrap();
        assert!(matches!(
            response.into_reply_text(),
            Err(GeminiError::EmptyReply)
        ));
    }

    #[test]
    fn only_first_candidate_is_used() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"first"}]}},
                {"content":{"parts":[{"text":"second"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.into_reply_text().unwrap(), "first");
    }
}
