//! Header showing which tenant configuration flows from and to.

use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::components::Button;
use crate::components::button::ButtonVariant;
use crate::models::{ROLE_MAIN, ROLE_TARGET};
use crate::state::{AppCommands, AppState};
use crate::theme::{borders, spacing};

#[derive(IntoElement)]
pub struct TenantMigrationSelector {
    state: Entity<AppState>,
}

impl TenantMigrationSelector {
    pub fn new(state: Entity<AppState>) -> Self {
        Self { state }
    }
}

impl RenderOnce for TenantMigrationSelector {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = self.state.read(cx);
        let shown = |role: &str| state.settings.migration_grid.keys.iter().any(|k| k == role);
        let column_toggles = [ROLE_MAIN, ROLE_TARGET].map(|role| (role, shown(role)));
        let tenants = state.tenants();
        let main_label = tenants.label(ROLE_MAIN);
        let target_label = tenants.label(ROLE_TARGET);

        let tenant_box = |label: String, cx: &App| {
            div()
                .flex_1()
                .px(spacing::sm())
                .py(px(6.0))
                .bg(cx.theme().sidebar)
                .border_1()
                .border_color(cx.theme().sidebar_border)
                .rounded(borders::radius_sm())
                .text_sm()
                .text_color(cx.theme().foreground)
                .child(label)
        };

        let column_toggle = |role: &'static str, shown: bool| {
            let state = self.state.clone();
            let variant = if shown { ButtonVariant::Primary } else { ButtonVariant::Secondary };
            Button::new(SharedString::from(format!("toggle-column-{role}")))
                .label(role)
                .variant(variant)
                .on_click(move |_: &ClickEvent, _window: &mut Window, cx: &mut App| {
                    AppCommands::toggle_grid_key(&state, role, cx);
                })
        };

        let state = self.state.clone();
        div()
            .flex()
            .items_center()
            .gap(spacing::md())
            .child(tenant_box(main_label, cx))
            .child(div().text_color(cx.theme().muted_foreground).child("\u{2192}"))
            .child(tenant_box(target_label, cx))
            .child(Button::new("swap-tenants").label("Swap").on_click(
                move |_: &ClickEvent, _window: &mut Window, cx: &mut App| {
                    AppCommands::swap_roles(&state, cx);
                },
            ))
            .child(
                div()
                    .flex()
                    .gap(spacing::xs())
                    .children(column_toggles.map(|(role, shown)| column_toggle(role, shown))),
            )
    }
}
