//! Folio App, the WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It builds the Gemini adapter and the assistant session and hands them to
//! the egui views.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the canvas element in index.html
const CANVAS_ID: &str = "folio_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Folio WASM starting...");

    let canvas = gloo_utils::document()
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::FolioApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
