//! Navigation chrome: top bar, side page indicator and the narrow-screen menu.

use egui::{self, Align, Align2, Button, Color32, Layout, RichText, Sense, Vec2};
use folio_types::{page::Page, profile::Profile};
use crate::state::UiState;
use crate::theme::*;

/// Render the top bar. Navigation happens in place on `state.router`.
pub fn top_bar(ui: &mut egui::Ui, state: &mut UiState, profile: &Profile, now: f64) {
    let narrow = ui.available_width() < NARROW_WIDTH;

    ui.horizontal(|ui| {
        // Logo doubles as the home link
        let logo = ui
            .horizontal(|ui| {
                egui::Frame::default()
                    .fill(ACCENT)
                    .corner_radius(CHIP_ROUNDING)
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .show(ui, |ui| {
                        let initial = profile.name.chars().next().unwrap_or('?');
                        ui.label(RichText::new(initial.to_string()).strong().size(18.0).color(TEXT_PRIMARY));
                    });
                ui.vertical(|ui| {
                    ui.label(RichText::new(short_name(profile)).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("SAP DEVELOPER").monospace().small().color(ACCENT_LIGHT));
                });
            })
            .response
            .interact(Sense::click());
        if logo.clicked() {
            state.router.navigate(Page::Home, now);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if narrow {
                let icon = if state.router.menu_open() { "✕" } else { "☰" };
                if ui.add(Button::new(RichText::new(icon).size(20.0)).frame(false)).clicked() {
                    state.router.toggle_menu();
                }
            } else {
                ui.hyperlink_to(RichText::new("LinkedIn").color(TEXT_SECONDARY), &profile.contact.linkedin);
                ui.add_space(16.0);
                // right_to_left lays out last item first
                for page in Page::all().iter().rev() {
                    let selected = state.router.current() == *page;
                    let text = RichText::new(page.label())
                        .color(if selected { TEXT_PRIMARY } else { TEXT_SECONDARY });
                    let button = Button::new(text)
                        .fill(if selected { ACCENT } else { Color32::TRANSPARENT })
                        .corner_radius(PILL_ROUNDING);
                    if ui.add(button).clicked() {
                        state.router.navigate(*page, now);
                    }
                }
            }
        });
    });
}

/// Dots on the right edge, one per page, with the label on hover
pub fn page_indicator(ctx: &egui::Context, state: &mut UiState, now: f64) {
    egui::Area::new(egui::Id::new("page_indicator"))
        .anchor(Align2::RIGHT_CENTER, Vec2::new(-32.0, 0.0))
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 24.0;
            for page in Page::all() {
                let selected = state.router.current() == *page;
                let (rect, response) = ui.allocate_exact_size(Vec2::splat(16.0), Sense::click());
                let radius = if selected { 6.0 } else { 4.0 };
                let color = if selected { ACCENT_LIGHT } else { BG_SURFACE };
                ui.painter().circle_filled(rect.center(), radius, color);

                if selected || response.hovered() {
                    ui.painter().text(
                        rect.left_center() - Vec2::new(12.0, 0.0),
                        Align2::RIGHT_CENTER,
                        page.label().to_uppercase(),
                        egui::FontId::monospace(10.0),
                        if selected { ACCENT_LIGHT } else { TEXT_MUTED },
                    );
                }
                if response.clicked() {
                    state.router.navigate(*page, now);
                }
            }
        });
}

/// Full-screen page list shown when the narrow-screen menu is open
pub fn mobile_menu(ctx: &egui::Context, state: &mut UiState, now: f64) {
    if !state.router.menu_open() {
        return;
    }

    egui::Area::new(egui::Id::new("mobile_menu"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(BG_PRIMARY.gamma_multiply(0.95))
                .corner_radius(CARD_ROUNDING)
                .inner_margin(32.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        for page in Page::all() {
                            let selected = state.router.current() == *page;
                            let text = RichText::new(page.label())
                                .size(36.0)
                                .strong()
                                .color(if selected { ACCENT } else { TEXT_MUTED });
                            if ui.add(Button::new(text).frame(false)).clicked() {
                                state.router.navigate(*page, now);
                            }
                        }
                    });
                });
        });
}

/// "R. Tripathi" style short form
fn short_name(profile: &Profile) -> String {
    let mut words = profile.name.split_whitespace();
    match (words.next(), words.last()) {
        (Some(first), Some(last)) => format!("{}. {}", first.chars().next().unwrap_or_default(), last),
        (Some(only), None) => only.to_string(),
        _ => String::new(),
    }
}
