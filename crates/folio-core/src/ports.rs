//! Port traits: the boundary between the core and the browser.
//!
//! Implementations live in `folio-platform`; tests supply scripted ones.

use std::pin::Pin;
use futures::Stream;
use folio_types::Result;

/// Lazy, finite, non-restartable sequence of reply fragments.
/// The first `Err` ends the reply.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>>>>;

/// A hosted text-generation service
pub trait GenerativePort {
    /// Open a streaming generation for one user message under a system
    /// instruction. No network work happens until the stream is polled.
    fn open(&self, system_instruction: &str, user_text: &str) -> FragmentStream;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
