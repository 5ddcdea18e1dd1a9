//! Gemini adapter for [`GenerativePort`].
//!
//! Uses browser `fetch()` via gloo-net and reads the SSE body incrementally,
//! yielding one fragment per decoded chunk.

pub mod proto;

use std::collections::VecDeque;
use futures::stream;
use gloo_net::http::Request;

use folio_core::ports::{FragmentStream, GenerativePort};
use folio_types::{config::AssistantConfig, FolioError, Result};

use crate::body::BodyReader;
use crate::sse::SseDecoder;
use proto::{decode_chunk, GenerateContentRequest};

pub struct GeminiProvider {
    config: AssistantConfig,
}

impl GeminiProvider {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.config.base_url(),
            self.config.model
        )
    }

    pub fn request_body(&self, system_instruction: &str, user_text: &str) -> Result<String> {
        let req = GenerateContentRequest::new(system_instruction, user_text, self.config.temperature);
        Ok(serde_json::to_string(&req)?)
    }
}

impl GenerativePort for GeminiProvider {
    fn open(&self, system_instruction: &str, user_text: &str) -> FragmentStream {
        let start = if self.config.has_api_key() {
            self.request_body(system_instruction, user_text).map(|body| PendingRequest {
                url: self.endpoint(),
                api_key: self.config.api_key.clone(),
                body,
            })
        } else {
            Err(FolioError::Config("no API key configured".to_string()))
        };

        let state = match start {
            Ok(req) => StreamState::Pending(req),
            Err(e) => StreamState::Failed(e),
        };
        Box::pin(stream::unfold(state, next_fragment))
    }

    fn backend_name(&self) -> &str {
        "gemini"
    }
}

// ─── Stream state machine ────────────────────────────────────

struct PendingRequest {
    url: String,
    api_key: String,
    body: String,
}

struct Reading {
    reader: BodyReader,
    decoder: SseDecoder,
    queued: VecDeque<String>,
    eof: bool,
}

enum StreamState {
    Pending(PendingRequest),
    Reading(Reading),
    Failed(FolioError),
    Finished,
}

async fn next_fragment(state: StreamState) -> Option<(Result<String>, StreamState)> {
    let mut state = state;
    loop {
        state = match state {
            StreamState::Finished => return None,
            StreamState::Failed(e) => return Some((Err(e), StreamState::Finished)),
            StreamState::Pending(req) => match send(req).await {
                Ok(reader) => StreamState::Reading(Reading {
                    reader,
                    decoder: SseDecoder::new(),
                    queued: VecDeque::new(),
                    eof: false,
                }),
                Err(e) => StreamState::Failed(e),
            },
            StreamState::Reading(mut r) => {
                if let Some(data) = r.queued.pop_front() {
                    match decode_chunk(&data) {
                        Ok(Some(text)) => return Some((Ok(text), StreamState::Reading(r))),
                        Ok(None) => StreamState::Reading(r),
                        Err(e) => StreamState::Failed(e),
                    }
                } else if r.eof {
                    StreamState::Finished
                } else {
                    match r.reader.next_chunk().await {
                        Ok(Some(bytes)) => match r.decoder.push(&bytes) {
                            Ok(events) => {
                                r.queued.extend(events);
                                StreamState::Reading(r)
                            }
                            Err(e) => StreamState::Failed(e),
                        },
                        Ok(None) => match r.decoder.finish() {
                            Ok(events) => {
                                r.queued.extend(events);
                                r.eof = true;
                                StreamState::Reading(r)
                            }
                            Err(e) => StreamState::Failed(e),
                        },
                        Err(e) => StreamState::Failed(e),
                    }
                }
            }
        };
    }
}

async fn send(req: PendingRequest) -> Result<BodyReader> {
    let response = Request::post(&req.url)
        .header("Content-Type", "application/json")
        .header("x-goog-api-key", &req.api_key)
        .body(req.body)
        .map_err(|e| FolioError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FolioError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(FolioError::Http { status, body });
    }

    let body = response
        .body()
        .ok_or_else(|| FolioError::Decode("response has no body".to_string()))?;
    BodyReader::new(body)
}
