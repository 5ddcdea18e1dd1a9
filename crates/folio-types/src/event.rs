use serde::{Deserialize, Serialize};

/// Events emitted by the assistant session.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A submission was accepted and a request is being opened
    TurnStart { turn_id: u64 },

    /// A fragment was appended to the trailing assistant message
    Fragment { turn_id: u64, text: String },

    /// The stream finished normally
    TurnComplete { turn_id: u64, text: String },

    /// The request or stream failed; the reply was replaced by the apology
    TurnFailed { turn_id: u64, reason: String },
}

impl SessionEvent {
    pub fn turn_id(&self) -> u64 {
        match self {
            SessionEvent::TurnStart { turn_id }
            | SessionEvent::Fragment { turn_id, .. }
            | SessionEvent::TurnComplete { turn_id, .. }
            | SessionEvent::TurnFailed { turn_id, .. } => *turn_id,
        }
    }
}
