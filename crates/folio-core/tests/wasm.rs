//! WASM-target tests for folio-core.
//!
//! Runs the assistant session and turn driver under wasm32-unknown-unknown
//! via `wasm-pack test --node`, where `drive_turn` is awaited the same way
//! `spawn_local` would run it in the browser.

use wasm_bindgen_test::*;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::event_bus::EventBus;
use folio_core::ports::{FragmentStream, GenerativePort};
use folio_core::runtime::drive_turn;
use folio_core::session::{AssistantSession, SessionPhase};
use folio_types::config::SiteConfig;
use folio_types::event::SessionEvent;
use folio_types::FolioError;

struct Script(Vec<Result<String, FolioError>>);

impl GenerativePort for Script {
    fn open(&self, _system_instruction: &str, _user_text: &str) -> FragmentStream {
        Box::pin(futures::stream::iter(self.0.clone()))
    }

    fn backend_name(&self) -> &str {
        "script"
    }
}

fn shared_session() -> (Rc<RefCell<AssistantSession>>, EventBus) {
    let bus = EventBus::new();
    let session = AssistantSession::new(&SiteConfig::default(), bus.clone());
    (Rc::new(RefCell::new(session)), bus)
}

#[wasm_bindgen_test]
fn session_seeded_with_greeting() {
    let (session, _) = shared_session();
    assert_eq!(session.borrow().transcript().len(), 1);
    assert_eq!(session.borrow().phase(), SessionPhase::Idle);
}

#[wasm_bindgen_test]
async fn streamed_reply_is_concatenated() {
    let (session, bus) = shared_session();
    let llm = Script(vec![
        Ok("ABAP".to_string()),
        Ok(", CDS Views".to_string()),
        Ok(", OData".to_string()),
    ]);

    let turn = session.borrow_mut().submit("What are his top skills?").unwrap();
    drive_turn(&session, &llm, turn).await;

    let session = session.borrow();
    assert_eq!(session.transcript().last().unwrap().text, "ABAP, CDS Views, OData");
    assert!(!session.is_awaiting_response());

    let events = bus.drain();
    assert_eq!(events.first(), Some(&SessionEvent::TurnStart { turn_id: 1 }));
    assert!(matches!(events.last(), Some(SessionEvent::TurnComplete { turn_id: 1, .. })));
}

#[wasm_bindgen_test]
async fn failed_stream_shows_apology() {
    let (session, _) = shared_session();
    let llm = Script(vec![
        Ok("Hi".to_string()),
        Err(FolioError::Network("reset".to_string())),
    ]);

    let turn = session.borrow_mut().submit("hello").unwrap();
    drive_turn(&session, &llm, turn).await;

    let session = session.borrow();
    assert_eq!(session.transcript().last().unwrap().text, session.apology());
    assert!(session.can_submit("again"));
}
