//! Portfolio core: everything that can be reasoned about without a browser.
//!
//! The assistant session and its turn driver only see the generative service
//! through [`ports::GenerativePort`]; adapters live in `folio-platform`.

pub mod event_bus;
pub mod ports;
pub mod prompt;
pub mod router;
pub mod runtime;
pub mod scene;
pub mod session;
