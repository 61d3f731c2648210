//! Main egui application — composes the panels and owns the chat controller.

use std::rc::Rc;

use egui::{self, CentralPanel, TopBottomPanel};

use chat_core::controller::ChatController;
use chat_core::event_bus::EventBus;
use chat_core::ports::ReplyPort;
use chat_platform::reply::HttpReplyClient;
use chat_types::config::ChatConfig;
use chat_ui::panels::{chat, header, loading};
use chat_ui::state::{ChatAction, UiState};
use chat_ui::theme;

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: ChatController,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ChatConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{}. Falling back to defaults.", e);
                ChatConfig::from_env_value(None)
            }
        };

        let event_bus = EventBus::new();
        let repaint_ctx = cc.egui_ctx.clone();
        event_bus.set_waker(move || repaint_ctx.request_repaint());
        let client: Rc<dyn ReplyPort> = Rc::new(HttpReplyClient::new(&config));
        let controller = ChatController::new(client, event_bus.clone(), config.history_limit);

        Self::load_history(controller.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller,
            first_frame: true,
        }
    }

    /// Fetch start-up history (async). The input stays disabled until it settles;
    /// the bus waker repaints once it does.
    fn load_history(controller: ChatController) {
        wasm_bindgen_futures::spawn_local(async move {
            controller.load_history().await;
        });
    }

    /// Send a user message through the controller (async)
    fn dispatch_message(&self, text: String) {
        let controller = self.controller.clone();

        wasm_bindgen_futures::spawn_local(async move {
            controller.submit(&text).await;
        });
    }

    fn handle_action(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::None => {}
            ChatAction::Submit(text) => {
                self.dispatch_message(text);
                // Shows the optimistic message
                ctx.request_repaint();
            }
            ChatAction::ConfirmTour(_) | ChatAction::DeclineTour => {
                if let Some(notice) = self.ui_state.answer_tour(&action) {
                    alert(&notice);
                }
            }
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
        }

        // ── Header ───────────────────────────────────────────
        TopBottomPanel::top("chat_header").show(ctx, |ui| {
            header::header_panel(ui, &self.ui_state);
        });

        // ── Conversation ─────────────────────────────────────
        let conversation = self.controller.conversation();
        let action = CentralPanel::default()
            .show(ctx, |ui| {
                let conversation = conversation.borrow();
                if conversation.is_loading_history() {
                    loading::loading_panel(ui);
                    ChatAction::None
                } else {
                    chat::chat_panel(ui, &mut self.ui_state, &conversation)
                }
            })
            .inner;

        self.handle_action(action, ctx);
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}
