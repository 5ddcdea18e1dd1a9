//! WASM-target tests for folio-platform (Node.js runtime).
//!
//! Covers SSE framing, chunk decoding and the no-key failure path under
//! wasm32-unknown-unknown via `wasm-pack test --node`. Live requests against
//! the Gemini endpoint are not exercised here.

use wasm_bindgen_test::*;

use folio_core::ports::GenerativePort;
use folio_platform::gemini::proto::decode_chunk;
use folio_platform::sse::SseDecoder;
use folio_platform::GeminiProvider;
use folio_types::config::AssistantConfig;
use folio_types::FolioError;
use futures::StreamExt;

#[wasm_bindgen_test]
fn sse_events_across_chunks() {
    let mut sse = SseDecoder::new();
    assert!(sse.push(b"data: {\"a\"").unwrap().is_empty());
    assert_eq!(sse.push(b":1}\n\ndata: x\n\n").unwrap(), vec!["{\"a\":1}", "x"]);
}

#[wasm_bindgen_test]
fn decode_stream_of_chunks() {
    let body = concat!(
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"ABAP\"}]}}]}\n\n",
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\", CDS Views\"}]}}]}\n\n",
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\", OData\"}]},\"finishReason\":\"STOP\"}]}\n\n",
    );
    let mut sse = SseDecoder::new();
    let text: String = sse
        .push(body.as_bytes())
        .unwrap()
        .iter()
        .filter_map(|data| decode_chunk(data).unwrap())
        .collect();
    assert_eq!(text, "ABAP, CDS Views, OData");
}

#[wasm_bindgen_test]
fn decode_error_payload() {
    let err = decode_chunk(r#"{"error":{"code":403,"message":"denied","status":"PERMISSION_DENIED"}}"#)
        .unwrap_err();
    assert!(matches!(err, FolioError::Api(_)));
}

#[wasm_bindgen_test]
async fn provider_without_key_yields_config_error() {
    let provider = GeminiProvider::new(AssistantConfig::default());
    assert_eq!(provider.backend_name(), "gemini");

    let mut stream = provider.open("sys", "hello");
    let first = stream.next().await.unwrap();
    assert!(matches!(first, Err(FolioError::Config(_))));
    assert!(stream.next().await.is_none());
}
