//! Page bodies rendered over the background, one function per page.

use chrono::Datelike;
use egui::{self, Align, Button, Layout, RichText, Vec2};
use folio_types::{page::Page, profile::Profile};
use crate::state::{ContactForm, UiState};
use crate::theme::*;

/// Render the current page with its entry transition.
pub fn page_view(ui: &mut egui::Ui, state: &mut UiState, profile: &Profile, now: f64) {
    let progress = state.router.transition_progress(now);
    let narrow = ui.available_width() < NARROW_WIDTH;
    let mut goto = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CONTENT_WIDTH);
                ui.multiply_opacity(progress);
                // Slide up into place while fading in
                ui.add_space(48.0 + (1.0 - progress) * 20.0);

                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    match state.router.current() {
                        Page::Home => goto = home(ui, profile),
                        Page::About => about(ui, profile),
                        Page::Skills => skills(ui, profile, narrow),
                        Page::Experience => experience(ui, state, profile, now),
                        Page::Contact => contact(ui, &mut state.contact_form, profile),
                    }
                    ui.add_space(64.0);
                    footer(ui, profile);
                });
            });
        });

    if let Some(page) = goto {
        state.router.navigate(page, now);
    }
}

fn home(ui: &mut egui::Ui, profile: &Profile) -> Option<Page> {
    let mut goto = None;
    ui.add_space(80.0);
    ui.label(RichText::new("AVAILABLE FOR NEW PROJECTS").monospace().small().color(ACCENT_LIGHT));
    ui.add_space(12.0);
    ui.label(RichText::new(&profile.name).size(56.0).strong().color(TEXT_PRIMARY));
    ui.label(RichText::new(&profile.title).size(28.0).color(ACCENT_LIGHT));
    ui.add_space(12.0);
    ui.label(RichText::new(&profile.subtitle).size(18.0).color(TEXT_SECONDARY));
    ui.add_space(32.0);

    ui.horizontal(|ui| {
        let work = Button::new(RichText::new("View My Work").strong().color(TEXT_PRIMARY))
            .fill(ACCENT)
            .corner_radius(PILL_ROUNDING)
            .min_size(Vec2::new(160.0, 48.0));
        if ui.add(work).clicked() {
            goto = Some(Page::Experience);
        }
        let talk = Button::new(RichText::new("Let's Talk").strong().color(TEXT_PRIMARY))
            .fill(BG_SURFACE)
            .stroke(card_stroke())
            .corner_radius(PILL_ROUNDING)
            .min_size(Vec2::new(160.0, 48.0));
        if ui.add(talk).clicked() {
            goto = Some(Page::Contact);
        }
    });
    goto
}

fn about(ui: &mut egui::Ui, profile: &Profile) {
    heading(ui, "About Me");
    card(ui, |ui| {
        ui.label(RichText::new(&profile.summary).size(18.0).color(TEXT_SECONDARY));
        ui.add_space(16.0);
        fact(ui, "Location", &profile.location);
        fact(ui, "Education", &profile.education);
        fact(ui, "YouTube", &profile.contact.youtube_handle);
    });
    ui.add_space(16.0);
    card(ui, |ui| {
        ui.label(RichText::new("PHILOSOPHY").monospace().small().color(ACCENT_LIGHT));
        ui.add_space(8.0);
        ui.label(RichText::new(format!("\u{201c}{}\u{201d}", profile.philosophy)).italics().size(18.0));
    });
}

fn skills(ui: &mut egui::Ui, profile: &Profile, narrow: bool) {
    heading(ui, "Technical Arsenal");
    let columns = if narrow { 1 } else { profile.skill_groups.len().clamp(1, 3) };
    ui.columns(columns, |cols| {
        for (i, group) in profile.skill_groups.iter().enumerate() {
            let col = &mut cols[i % columns];
            card(col, |ui| {
                ui.label(RichText::new(&group.category).size(20.0).strong());
                ui.add_space(12.0);
                ui.horizontal_wrapped(|ui| {
                    for skill in &group.skills {
                        chip(ui, skill);
                    }
                });
            });
            col.add_space(16.0);
        }
    });

    ui.add_space(24.0);
    ui.label(RichText::new("Certifications").size(24.0).strong());
    ui.add_space(8.0);
    for cert in &profile.certifications {
        ui.horizontal(|ui| {
            ui.label(RichText::new("✔").color(SUCCESS));
            ui.label(RichText::new(&cert.name).color(TEXT_SECONDARY));
        });
    }
}

fn experience(ui: &mut egui::Ui, state: &UiState, profile: &Profile, now: f64) {
    heading(ui, "Professional Journey");
    for (i, entry) in profile.experiences.iter().enumerate() {
        // Each entry starts its fade a little after the previous one
        let stagger = state.router.transition_progress(now - 0.1 * i as f64);
        ui.scope(|ui| {
            ui.multiply_opacity(stagger);
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&entry.period).monospace().small().color(ACCENT_LIGHT));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&entry.location).small().color(TEXT_MUTED));
                    });
                });
                ui.label(RichText::new(&entry.role).size(22.0).strong());
                ui.label(RichText::new(&entry.company).color(INDIGO));
                ui.add_space(8.0);
                for line in &entry.description {
                    ui.label(RichText::new(format!("• {}", line)).color(TEXT_SECONDARY));
                }
            });
        });
        ui.add_space(16.0);
    }
}

fn contact(ui: &mut egui::Ui, form: &mut ContactForm, profile: &Profile) {
    heading(ui, "Get In Touch");
    ui.label(
        RichText::new("Have a project in mind or want to talk SAP? Reach out through any of these channels.")
            .size(18.0)
            .color(TEXT_SECONDARY),
    );
    ui.add_space(16.0);

    let channels = [
        ("Email", profile.contact.email.clone(), profile.mailto()),
        ("LinkedIn", linkedin_slug(&profile.contact.linkedin), profile.contact.linkedin.clone()),
        ("YouTube", profile.contact.youtube_handle.clone(), profile.contact.youtube_url.clone()),
    ];
    for (label, shown, url) in channels {
        let response = card(ui, |ui| {
            ui.label(RichText::new(label).monospace().small().color(ACCENT_LIGHT));
            ui.label(RichText::new(shown).size(18.0).strong());
        })
        .interact(egui::Sense::click());
        if response.clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
        ui.add_space(8.0);
    }

    ui.add_space(16.0);
    card(ui, |ui| {
        ui.label(RichText::new("Send a message").size(20.0).strong());
        ui.add_space(8.0);
        ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Your name").desired_width(f32::INFINITY));
        ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("Your email").desired_width(f32::INFINITY));
        ui.add(
            egui::TextEdit::multiline(&mut form.message)
                .hint_text("Your message")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        let send = Button::new(RichText::new("Send Message").strong().color(TEXT_PRIMARY))
            .fill(ACCENT)
            .corner_radius(PILL_ROUNDING);
        if ui.add_enabled(form.is_ready(), send).clicked() {
            if let Some(url) = form.mailto(&profile.contact.email) {
                log::info!("Opening mail client for contact form");
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                form.clear();
            }
        }
    });
}

fn footer(ui: &mut egui::Ui, profile: &Profile) {
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        let year = chrono::Utc::now().year();
        ui.label(RichText::new(format!("© {} {}", year, profile.name)).small().color(TEXT_MUTED));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.hyperlink_to(RichText::new("YouTube").small(), &profile.contact.youtube_url);
            ui.hyperlink_to(RichText::new("LinkedIn").small(), &profile.contact.linkedin);
            ui.hyperlink_to(RichText::new("Email").small(), profile.mailto());
        });
    });
}

/// Last path segment of a profile URL
fn linkedin_slug(url: &str) -> String {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url).to_string()
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(40.0).strong().color(TEXT_PRIMARY));
    ui.add_space(24.0);
}

fn fact(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).monospace().small().color(TEXT_MUTED));
        ui.label(value);
    });
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::default()
        .fill(ACCENT.gamma_multiply(0.15))
        .corner_radius(CHIP_ROUNDING)
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(ACCENT_LIGHT));
        });
}

fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) -> egui::Response {
    egui::Frame::default()
        .fill(BG_CARD)
        .stroke(card_stroke())
        .corner_radius(CARD_ROUNDING)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        })
        .response
}
