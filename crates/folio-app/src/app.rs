//! Main egui application: composes the views and runs assistant turns.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, TopBottomPanel};

use folio_core::event_bus::EventBus;
use folio_core::ports::GenerativePort;
use folio_core::runtime::drive_turn;
use folio_core::session::{AssistantSession, PendingTurn};
use folio_platform::GeminiProvider;
use folio_types::config::SiteConfig;
use folio_ui::background::BackgroundScene;
use folio_ui::state::UiState;
use folio_ui::theme;
use folio_ui::views::{chat, nav, pages};

/// The main application state
pub struct FolioApp {
    ui_state: UiState,
    config: SiteConfig,
    event_bus: EventBus,
    session: Rc<RefCell<AssistantSession>>,
    generative: Rc<dyn GenerativePort>,
    background: BackgroundScene,
    first_frame: bool,
}

impl FolioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = SiteConfig::from_build_env();
        let event_bus = EventBus::new();
        let session = AssistantSession::new(&config, event_bus.clone());

        if !config.assistant.has_api_key() {
            log::warn!("No Gemini API key configured at build time; assistant replies will fail");
        }
        let generative: Rc<dyn GenerativePort> =
            Rc::new(GeminiProvider::new(config.assistant.clone()));
        log::info!(
            "Assistant backend: {} ({})",
            generative.backend_name(),
            config.assistant.model
        );

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            session: Rc::new(RefCell::new(session)),
            generative,
            background: BackgroundScene::new(),
            first_frame: true,
        }
    }

    /// Run one assistant turn in the background (async)
    fn dispatch_turn(&self, turn: PendingTurn, ctx: &egui::Context) {
        let session = self.session.clone();
        let generative = self.generative.clone();
        let ctx = ctx.clone();

        log::debug!("Dispatching turn {}", turn.turn_id);
        wasm_bindgen_futures::spawn_local(async move {
            drive_turn(&session, generative.as_ref(), turn).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let now = ctx.input(|i| i.time);

        // Drain events from the assistant session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            log::debug!("Processing {} session events", events.len());
            self.ui_state.process_events(events);
        }

        // ── Background ───────────────────────────────────────
        let screen = ctx.screen_rect();
        let pointer = ctx.input(|i| i.pointer.latest_pos());
        let painter = ctx.layer_painter(egui::LayerId::background());
        self.background
            .paint(&painter, screen, self.ui_state.router.current(), now, pointer);

        // ── Navigation ───────────────────────────────────────
        TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_PRIMARY.gamma_multiply(0.8))
                    .inner_margin(theme::PANEL_PADDING),
            )
            .show(ctx, |ui| {
                nav::top_bar(ui, &mut self.ui_state, &self.config.profile, now);
            });

        if screen.width() >= theme::NARROW_WIDTH {
            nav::page_indicator(ctx, &mut self.ui_state, now);
        }
        nav::mobile_menu(ctx, &mut self.ui_state, now);

        // ── Page content ─────────────────────────────────────
        CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(theme::PANEL_PADDING))
            .show(ctx, |ui| {
                pages::page_view(ui, &mut self.ui_state, &self.config.profile, now);
            });

        // ── Assistant ────────────────────────────────────────
        let submitted = {
            let mut session = self.session.borrow_mut();
            chat::chat_widget(ctx, &mut self.ui_state, &mut session)
        };
        if let Some(turn) = submitted {
            self.dispatch_turn(turn, ctx);
        }

        // Particles and transitions animate every frame
        ctx.request_repaint();
    }
}
