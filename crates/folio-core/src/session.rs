//! Assistant session: transcript plus the single-request state machine.
//!
//! ```text
//! Idle --submit--> Sending --fragment--> Streaming --complete--> Idle
//!                     |                      |
//!                     +-------fail-----------+-------------------> Idle
//! ```
//!
//! Only `submit` starts a turn and it is accepted in `Idle` alone. The
//! streaming transitions carry the turn id they were issued for, so a late
//! fragment from an abandoned turn can never land on a newer reply.

use folio_types::{
    config::SiteConfig,
    event::SessionEvent,
    message::Message,
    profile::Profile,
};
use crate::event_bus::EventBus;
use crate::prompt::build_system_instruction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Request dispatched, nothing received yet
    Sending,
    /// At least one fragment applied
    Streaming,
}

/// Everything the turn driver needs to open the stream
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub system_instruction: String,
    pub user_text: String,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    turn_id: u64,
    /// Transcript index of the assistant placeholder
    index: usize,
}

pub struct AssistantSession {
    transcript: Vec<Message>,
    /// Contents of the chat input box
    pub pending_input: String,
    phase: SessionPhase,
    in_flight: Option<InFlight>,
    profile: Profile,
    apology: String,
    event_bus: EventBus,
    turn_counter: u64,
}

impl AssistantSession {
    pub fn new(config: &SiteConfig, event_bus: EventBus) -> Self {
        Self {
            transcript: vec![Message::assistant(config.greeting.clone())],
            pending_input: String::new(),
            phase: SessionPhase::Idle,
            in_flight: None,
            profile: config.profile.clone(),
            apology: config.apology.clone(),
            event_bus,
            turn_counter: 0,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.phase != SessionPhase::Idle
    }

    pub fn in_flight_turn(&self) -> Option<u64> {
        self.in_flight.map(|f| f.turn_id)
    }

    /// Transcript index of the reply still being streamed
    pub fn in_flight_index(&self) -> Option<usize> {
        self.in_flight.map(|f| f.index)
    }

    pub fn apology(&self) -> &str {
        &self.apology
    }

    /// Whether `submit(text)` would be accepted right now
    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.is_awaiting_response()
    }

    /// Start a turn for `text`.
    ///
    /// Returns `None`, leaving everything untouched, when the trimmed text is
    /// empty or a reply is still pending.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if self.is_awaiting_response() {
            log::debug!("submit ignored: turn {:?} still in flight", self.in_flight_turn());
            return None;
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        self.transcript.push(Message::user(text));
        self.pending_input.clear();
        self.phase = SessionPhase::Sending;

        let system_instruction = build_system_instruction(&self.profile);

        self.transcript.push(Message::assistant(""));
        self.in_flight = Some(InFlight {
            turn_id,
            index: self.transcript.len() - 1,
        });

        log::info!("turn {} started ({} chars)", turn_id, text.len());
        self.event_bus.emit(SessionEvent::TurnStart { turn_id });

        Some(PendingTurn {
            turn_id,
            system_instruction,
            user_text: text.to_string(),
        })
    }

    /// Submit whatever is in the input box
    pub fn submit_pending(&mut self) -> Option<PendingTurn> {
        let text = self.pending_input.clone();
        self.submit(&text)
    }

    /// Append a fragment to the reply of `turn_id`.
    /// Returns false when that turn is no longer in flight.
    pub fn apply_fragment(&mut self, turn_id: u64, fragment: &str) -> bool {
        let Some(flight) = self.current(turn_id) else {
            return false;
        };

        self.phase = SessionPhase::Streaming;
        if fragment.is_empty() {
            return true;
        }
        self.transcript[flight.index].text.push_str(fragment);
        self.event_bus.emit(SessionEvent::Fragment {
            turn_id,
            text: fragment.to_string(),
        });
        true
    }

    /// Finish `turn_id` normally; the streamed reply stays as it is.
    pub fn complete(&mut self, turn_id: u64) -> bool {
        let Some(flight) = self.current(turn_id) else {
            return false;
        };

        self.in_flight = None;
        self.phase = SessionPhase::Idle;

        let text = self.transcript[flight.index].text.clone();
        log::info!("turn {} complete ({} chars)", turn_id, text.len());
        self.event_bus.emit(SessionEvent::TurnComplete { turn_id, text });
        true
    }

    /// Abort `turn_id`: any partial reply is discarded in favour of the apology.
    pub fn fail(&mut self, turn_id: u64, reason: &str) -> bool {
        let Some(flight) = self.current(turn_id) else {
            return false;
        };

        self.in_flight = None;
        self.phase = SessionPhase::Idle;
        self.transcript[flight.index].text = self.apology.clone();

        log::warn!("turn {} failed: {}", turn_id, reason);
        self.event_bus.emit(SessionEvent::TurnFailed {
            turn_id,
            reason: reason.to_string(),
        });
        true
    }

    fn current(&self, turn_id: u64) -> Option<InFlight> {
        match self.in_flight {
            Some(flight) if flight.turn_id == turn_id => Some(flight),
            _ => {
                log::debug!("ignoring transition for stale turn {}", turn_id);
                None
            }
        }
    }
}
