//! Wire types for the Gemini `streamGenerateContent` endpoint.

use serde::{Deserialize, Serialize};
use folio_types::{FolioError, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub system_instruction: Content<'a>,
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(system_instruction: &'a str, user_text: &'a str, temperature: f32) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart { text: system_instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: user_text }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

// ─── Streamed response chunks ────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    /// Reasoning summaries are not part of the reply
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Finish reasons that mean the reply was withheld rather than finished
const REFUSAL_REASONS: &[&str] = &["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// Decode one SSE `data` payload into the text it contributes.
///
/// `Ok(None)` for chunks that carry no text (usage-only, final markers).
pub fn decode_chunk(data: &str) -> Result<Option<String>> {
    let data = data.trim();
    if data.is_empty() || data == "[DONE]" {
        return Ok(None);
    }

    let chunk: GenerateContentResponse = serde_json::from_str(data)
        .map_err(|e| FolioError::Decode(format!("malformed response chunk: {}", e)))?;

    if let Some(err) = chunk.error {
        return Err(FolioError::Api(format!("{} {}: {}", err.code, err.status, err.message)));
    }

    if chunk.candidates.is_empty() {
        if let Some(reason) = chunk.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(FolioError::Api(format!("prompt blocked: {}", reason)));
        }
        return Ok(None);
    }

    let mut text = String::new();
    for candidate in chunk.candidates.iter().take(1) {
        if let Some(content) = &candidate.content {
            for part in content.parts.iter().filter(|p| !p.thought) {
                if let Some(t) = &part.text {
                    text.push_str(t);
                }
            }
        }
        if let Some(reason) = candidate.finish_reason.as_deref() {
            if REFUSAL_REASONS.contains(&reason) {
                return Err(FolioError::Api(format!("response withheld: {}", reason)));
            }
        }
    }

    Ok((!text.is_empty()).then_some(text))
}
