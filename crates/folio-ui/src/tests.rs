#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::views::chat::{is_typing, HEADER_TITLE, SUGGESTIONS};
    use folio_core::event_bus::EventBus;
    use folio_core::session::AssistantSession;
    use folio_types::config::SiteConfig;
    use folio_types::event::SessionEvent;
    use folio_types::page::Page;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert_eq!(state.router.current(), Page::Home);
        assert!(!state.chat_open);
        assert_eq!(state.assistant_status, AssistantStatus::Online);
        assert_eq!(state.unread, 0);
        assert_eq!(state.contact_form, ContactForm::default());
    }

    #[test]
    fn test_ui_state_turn_lifecycle_status() {
        let mut state = UiState::new();
        state.chat_open = true;

        state.process_events(vec![SessionEvent::TurnStart { turn_id: 1 }]);
        assert_eq!(state.assistant_status, AssistantStatus::Thinking);

        state.process_events(vec![SessionEvent::Fragment {
            turn_id: 1,
            text: "Hel".to_string(),
        }]);
        assert_eq!(state.assistant_status, AssistantStatus::Typing);

        state.process_events(vec![SessionEvent::TurnComplete {
            turn_id: 1,
            text: "Hello".to_string(),
        }]);
        assert_eq!(state.assistant_status, AssistantStatus::Online);
        assert_eq!(state.unread, 0);
    }

    #[test]
    fn test_ui_state_failure_returns_online() {
        let mut state = UiState::new();
        state.chat_open = true;
        state.process_events(vec![
            SessionEvent::TurnStart { turn_id: 3 },
            SessionEvent::TurnFailed {
                turn_id: 3,
                reason: "Network error: offline".to_string(),
            },
        ]);
        assert_eq!(state.assistant_status, AssistantStatus::Online);
    }

    #[test]
    fn test_ui_state_unread_while_closed() {
        let mut state = UiState::new();
        state.process_events(vec![
            SessionEvent::TurnComplete { turn_id: 1, text: "a".to_string() },
            SessionEvent::TurnFailed { turn_id: 2, reason: "x".to_string() },
        ]);
        assert_eq!(state.unread, 2);

        state.toggle_chat();
        assert!(state.chat_open);
        assert_eq!(state.unread, 0);

        state.toggle_chat();
        assert!(!state.chat_open);
    }

    #[test]
    fn test_assistant_status_labels() {
        assert_eq!(AssistantStatus::Online.label(), "Online");
        assert_eq!(AssistantStatus::Thinking.label(), "Thinking...");
        assert_eq!(AssistantStatus::Typing.label(), "Typing...");
    }

    // ─── ContactForm Tests ───────────────────────────────────

    #[test]
    fn test_contact_form_blank_message_not_ready() {
        let form = ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "   ".to_string(),
        };
        assert!(!form.is_ready());
        assert!(form.mailto("me@example.com").is_none());
    }

    #[test]
    fn test_contact_form_mailto_encodes() {
        let form = ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Hi there & bye".to_string(),
        };
        let url = form.mailto("me@example.com").unwrap();
        assert_eq!(
            url,
            "mailto:me@example.com?subject=Portfolio%20enquiry%20from%20Asha%20%3Casha%40example.com%3E\
             &body=Hi%20there%20%26%20bye"
        );
    }

    #[test]
    fn test_contact_form_anonymous_subject() {
        let form = ContactForm {
            message: "hello".to_string(),
            ..Default::default()
        };
        let url = form.mailto("me@example.com").unwrap();
        assert!(url.contains("subject=Portfolio%20enquiry&"));
        assert!(url.ends_with("body=hello"));
    }

    #[test]
    fn test_contact_form_clear() {
        let mut form = ContactForm {
            name: "n".to_string(),
            email: "e".to_string(),
            message: "m".to_string(),
        };
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    // ─── Chat widget ─────────────────────────────────────────

    #[test]
    fn test_suggestions() {
        assert_eq!(SUGGESTIONS.len(), 4);
        assert!(SUGGESTIONS.contains(&"Tell me about @CodeAbap"));
        assert!(SUGGESTIONS.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn test_typing_indicator_only_while_in_flight() {
        let mut session = AssistantSession::new(&SiteConfig::default(), EventBus::new());
        let turn = session.submit("hi").unwrap();
        let reply = session.transcript().len() - 1;
        assert!(is_typing(&session, reply));
        assert!(!is_typing(&session, 0));

        // Stream ended without any text
        assert!(session.complete(turn.turn_id));
        assert!(session.transcript()[reply].is_placeholder());
        assert!(!is_typing(&session, reply));
    }

    #[test]
    fn test_typing_indicator_stops_on_first_fragment() {
        let mut session = AssistantSession::new(&SiteConfig::default(), EventBus::new());
        let turn = session.submit("hi").unwrap();
        let reply = session.transcript().len() - 1;
        session.apply_fragment(turn.turn_id, "Hello");
        assert!(!is_typing(&session, reply));
    }

    #[test]
    fn test_header_title() {
        assert_eq!(HEADER_TITLE, "Profile Assistant");
    }

    // ─── Navigation ──────────────────────────────────────────

    #[test]
    fn test_ui_state_navigation_closes_menu() {
        let mut state = UiState::new();
        state.router.toggle_menu();
        assert!(state.router.menu_open());
        assert!(state.router.navigate(Page::Skills, 2.0));
        assert!(!state.router.menu_open());
        assert_eq!(state.router.current(), Page::Skills);
    }
}
