//! Floating assistant widget: toggle button, transcript, suggestions and input.

use egui::{self, Align, Align2, Button, Layout, RichText, ScrollArea, TextEdit, Vec2};
use folio_core::session::{AssistantSession, PendingTurn};
use folio_types::message::Role;
use crate::state::UiState;
use crate::theme::*;

/// Prompts offered under the transcript; clicking one fills the input
pub const SUGGESTIONS: &[&str] = &[
    "Summarize SAP experience",
    "Tell me about @CodeAbap",
    "What are his top skills?",
    "How to contact him?",
];

pub const HEADER_TITLE: &str = "Profile Assistant";

const PANEL_WIDTH: f32 = 380.0;
const TRANSCRIPT_HEIGHT: f32 = 360.0;

/// Render the chat widget.
///
/// Returns the turn to dispatch when the user submitted this frame.
pub fn chat_widget(
    ctx: &egui::Context,
    state: &mut UiState,
    session: &mut AssistantSession,
) -> Option<PendingTurn> {
    toggle_button(ctx, state);
    if !state.chat_open {
        return None;
    }

    let mut submitted = None;
    let time = ctx.input(|i| i.time);
    let width = PANEL_WIDTH.min(ctx.screen_rect().width() - 48.0);

    egui::Area::new(egui::Id::new("assistant_panel"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -104.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(BG_SECONDARY)
                .stroke(card_stroke())
                .corner_radius(CARD_ROUNDING)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(width);
                    header(ui, state);
                    ui.separator();
                    transcript(ui, session, time);
                    ui.separator();
                    suggestions(ui, session);
                    submitted = input_row(ui, session);
                });
        });

    submitted
}

fn toggle_button(ctx: &egui::Context, state: &mut UiState) {
    egui::Area::new(egui::Id::new("assistant_toggle"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -24.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let (label, fill) = if state.chat_open { ("✕", DANGER) } else { ("AI", ACCENT) };
            let button = Button::new(RichText::new(label).size(22.0).strong().color(TEXT_PRIMARY))
                .fill(fill)
                .corner_radius(PILL_ROUNDING)
                .min_size(Vec2::splat(64.0));
            let response = ui.add(button).on_hover_text("Ask the assistant");

            if state.unread > 0 && !state.chat_open {
                let center = response.rect.right_top() + Vec2::new(-8.0, 8.0);
                ui.painter().circle_filled(center, 10.0, DANGER);
                ui.painter().text(
                    center,
                    Align2::CENTER_CENTER,
                    state.unread.min(9).to_string(),
                    egui::FontId::proportional(11.0),
                    TEXT_PRIMARY,
                );
            }
            if response.clicked() {
                state.toggle_chat();
            }
        });
}

fn header(ui: &mut egui::Ui, state: &UiState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(HEADER_TITLE).strong().size(16.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(state.assistant_status.label()).small().color(TEXT_MUTED));
            ui.painter().circle_filled(
                ui.cursor().right_center() + Vec2::new(-6.0, 0.0),
                4.0,
                SUCCESS,
            );
            ui.add_space(12.0);
        });
    });
}

fn transcript(ui: &mut egui::Ui, session: &AssistantSession, time: f64) {
    ScrollArea::vertical()
        .max_height(TRANSCRIPT_HEIGHT)
        .auto_shrink([false, true])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let bubble_width = ui.available_width() * 0.85;
            for (index, message) in session.transcript().iter().enumerate() {
                match message.role {
                    Role::User => {
                        ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                            bubble(ui, &message.text, ACCENT, bubble_width);
                        });
                    }
                    Role::Assistant if is_typing(session, index) => {
                        ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
                            let dots = (time * 3.0) as usize % 3 + 1;
                            bubble(ui, &"• ".repeat(dots), BG_SURFACE, bubble_width);
                        });
                    }
                    // A reply that finished without any text
                    Role::Assistant if message.is_placeholder() => {}
                    Role::Assistant => {
                        ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
                            bubble(ui, &message.text, BG_SURFACE, bubble_width);
                        });
                    }
                }
            }
        });
}

/// Whether the entry at `index` is the reply still waiting for its first fragment
pub fn is_typing(session: &AssistantSession, index: usize) -> bool {
    session.in_flight_index() == Some(index)
        && session.transcript().get(index).is_some_and(|m| m.is_placeholder())
}

fn bubble(ui: &mut egui::Ui, text: &str, fill: egui::Color32, max_width: f32) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(CHIP_ROUNDING)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.add(egui::Label::new(RichText::new(text).color(TEXT_PRIMARY)).wrap());
        });
}

fn suggestions(ui: &mut egui::Ui, session: &mut AssistantSession) {
    ui.horizontal_wrapped(|ui| {
        for suggestion in SUGGESTIONS {
            let chip = Button::new(RichText::new(*suggestion).small().color(ACCENT_LIGHT))
                .fill(ACCENT.gamma_multiply(0.12))
                .corner_radius(PILL_ROUNDING);
            if ui.add(chip).clicked() {
                log::debug!("suggestion picked: {}", suggestion);
                session.pending_input = suggestion.to_string();
            }
        }
    });
}

fn input_row(ui: &mut egui::Ui, session: &mut AssistantSession) -> Option<PendingTurn> {
    let mut submit = false;
    ui.horizontal(|ui| {
        let ready = session.can_submit(&session.pending_input);
        let send = Button::new(RichText::new("Send").strong().color(TEXT_PRIMARY))
            .fill(ACCENT)
            .corner_radius(PILL_ROUNDING);
        let send_clicked = ui
            .with_layout(Layout::right_to_left(Align::Center), |ui| {
                let clicked = ui.add_enabled(ready, send).clicked();
                let edit = ui.add_enabled(
                    !session.is_awaiting_response(),
                    TextEdit::singleline(&mut session.pending_input)
                        .hint_text("Ask about SAP skills...")
                        .desired_width(f32::INFINITY),
                );
                let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if entered {
                    edit.request_focus();
                }
                clicked || entered
            })
            .inner;
        submit = send_clicked;
    });

    if submit {
        session.submit_pending()
    } else {
        None
    }
}
