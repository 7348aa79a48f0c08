use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::components::{MigrateButton, StatusBar};
use crate::models::ROLE_TARGET;
use crate::state::{AppState, PhaseSpecs, RequestPhase};
use crate::theme::{sizing, spacing};
use crate::views::ExtractionPanel;

// =============================================================================
// App Component
// =============================================================================

pub struct AppRoot {
    state: Entity<AppState>,
    extraction: Entity<ExtractionPanel>,
    migrate: Entity<MigrateButton>,
    _subscriptions: Vec<Subscription>,
}

impl AppRoot {
    pub fn new(
        state: Entity<AppState>,
        specs: PhaseSpecs,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let spec = specs
            .bind(RequestPhase::Migrate, state.clone(), ROLE_TARGET)
            .disabled(!target_resolved(&state, cx));
        let migrate = cx.new(|cx| MigrateButton::new("migrate-target", spec, state.clone(), cx));
        let extraction = cx.new(|cx| ExtractionPanel::new(state.clone(), specs, cx));

        // Migrating needs a resolved target tenant.
        let subscription = cx.observe(&state, |this: &mut Self, state, cx| {
            let disabled = !target_resolved(&state, cx);
            this.migrate.update(cx, |button, cx| button.set_disabled(disabled, cx));
            cx.notify();
        });

        Self { state, extraction, migrate, _subscriptions: vec![subscription] }
    }
}

fn target_resolved(state: &Entity<AppState>, cx: &App) -> bool {
    state.read(cx).tenants().require(ROLE_TARGET).is_ok()
}

impl Render for AppRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (request_count, status_message) = {
            let state = self.state.read(cx);
            (state.requests.len(), state.status_message().cloned())
        };

        let header = div()
            .flex()
            .items_center()
            .h(sizing::header_height())
            .px(spacing::md())
            .border_b_1()
            .border_color(cx.theme().border)
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(cx.theme().foreground)
            .child("Tenant Migration");

        let migrate_row = div()
            .flex()
            .items_center()
            .gap(spacing::md())
            .child(self.migrate.clone())
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child("Applies the extracted configuration to the target tenant."),
            );

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(cx.theme().background)
            .child(header)
            .child(
                div()
                    .id("console-body")
                    .flex_1()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .gap(spacing::lg())
                    .p(spacing::lg())
                    .child(self.extraction.clone())
                    .child(migrate_row),
            )
            .child(StatusBar::new(request_count, status_message))
    }
}
