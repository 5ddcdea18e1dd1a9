//! Turn driver: runs one request/response cycle against the session.
//!
//! Spawned via `wasm_bindgen_futures::spawn_local` so the UI keeps rendering
//! while the reply streams in.

use std::cell::RefCell;
use futures::StreamExt;
use crate::ports::GenerativePort;
use crate::session::{AssistantSession, PendingTurn};

/// Open the stream for `turn` and fold it into the session.
///
/// The session is only borrowed between awaits, never across one, so the UI
/// can read and edit it on every frame while the reply is arriving.
pub async fn drive_turn(
    session: &RefCell<AssistantSession>,
    generative: &dyn GenerativePort,
    turn: PendingTurn,
) {
    log::debug!("turn {} opening via {}", turn.turn_id, generative.backend_name());
    let mut stream = generative.open(&turn.system_instruction, &turn.user_text);

    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                let applied = session.borrow_mut().apply_fragment(turn.turn_id, &fragment);
                if !applied {
                    return;
                }
            }
            Err(e) => {
                session.borrow_mut().fail(turn.turn_id, &e.to_string());
                return;
            }
        }
    }

    session.borrow_mut().complete(turn.turn_id);
}
