//! Chunked reads from a `fetch` response body.
//!
//! `ReadableStreamDefaultReader::read()` resolves to `{ done, value }` where
//! `value` is a `Uint8Array`; this wraps it as a plain async chunk source.

use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ReadableStream, ReadableStreamDefaultReader};

use folio_types::{FolioError, Result};

pub struct BodyReader {
    reader: ReadableStreamDefaultReader,
}

impl BodyReader {
    pub fn new(body: ReadableStream) -> Result<Self> {
        let reader = body
            .get_reader()
            .dyn_into::<ReadableStreamDefaultReader>()
            .map_err(|e| FolioError::JsInterop(format!("{:?}", e)))?;
        Ok(Self { reader })
    }

    /// Next chunk of bytes, or `None` once the body is exhausted
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let result = JsFuture::from(self.reader.read())
            .await
            .map_err(|e| FolioError::Network(js_error_text(&e)))?;

        let done = Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(|e| FolioError::JsInterop(format!("{:?}", e)))?
            .as_bool()
            .unwrap_or(false);
        if done {
            return Ok(None);
        }

        let value = Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|e| FolioError::JsInterop(format!("{:?}", e)))?;
        if value.is_undefined() {
            return Ok(Some(Vec::new()));
        }
        Ok(Some(Uint8Array::new(&value).to_vec()))
    }
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
