//! Browser adapters for the portfolio core.

pub mod body;
pub mod gemini;
pub mod sse;


pub use gemini::GeminiProvider;
