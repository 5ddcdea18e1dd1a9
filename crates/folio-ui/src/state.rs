//! UI-level state that drives rendering.
//!
//! The transcript itself is read straight from the assistant session; this
//! holds what only the chrome cares about, updated each frame by draining
//! the EventBus.

use folio_core::router::ViewRouter;
use folio_types::event::SessionEvent;

/// What the assistant header shows next to its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantStatus {
    Online,
    Thinking,
    Typing,
}

impl AssistantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssistantStatus::Online => "Online",
            AssistantStatus::Thinking => "Thinking...",
            AssistantStatus::Typing => "Typing...",
        }
    }
}

pub struct UiState {
    pub router: ViewRouter,
    /// Whether the chat widget is expanded
    pub chat_open: bool,
    pub assistant_status: AssistantStatus,
    /// Replies that finished while the widget was closed
    pub unread: usize,
    pub contact_form: ContactForm,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            router: ViewRouter::new(),
            chat_open: false,
            assistant_status: AssistantStatus::Online,
            unread: 0,
            contact_form: ContactForm::default(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::TurnStart { .. } => {
                    self.assistant_status = AssistantStatus::Thinking;
                }
                SessionEvent::Fragment { .. } => {
                    self.assistant_status = AssistantStatus::Typing;
                }
                SessionEvent::TurnComplete { .. } | SessionEvent::TurnFailed { .. } => {
                    self.assistant_status = AssistantStatus::Online;
                    if !self.chat_open {
                        self.unread += 1;
                    }
                }
            }
        }
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        if self.chat_open {
            self.unread = 0;
        }
        log::debug!("assistant widget {}", if self.chat_open { "opened" } else { "closed" });
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draft held by the contact page form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_ready(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// `mailto:` link carrying the draft, or None while the message is blank
    pub fn mailto(&self, to: &str) -> Option<String> {
        if !self.is_ready() {
            return None;
        }
        let sender = match (self.name.trim(), self.email.trim()) {
            ("", "") => String::new(),
            (name, "") => name.to_string(),
            ("", email) => email.to_string(),
            (name, email) => format!("{} <{}>", name, email),
        };
        let subject = if sender.is_empty() {
            "Portfolio enquiry".to_string()
        } else {
            format!("Portfolio enquiry from {}", sender)
        };
        Some(format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(self.message.trim())
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
