use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::state::{StatusLevel, StatusMessage};
use crate::theme::{colors, sizing, spacing};

#[derive(IntoElement)]
pub struct StatusBar {
    request_count: usize,
    status_message: Option<StatusMessage>,
}

impl StatusBar {
    pub fn new(request_count: usize, status_message: Option<StatusMessage>) -> Self {
        Self { request_count, status_message }
    }
}

impl RenderOnce for StatusBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let left = div()
            .text_xs()
            .text_color(cx.theme().muted_foreground)
            .child(format!("{} requests issued", self.request_count));

        let right = match self.status_message {
            Some(message) => match message.level {
                StatusLevel::Info => {
                    div().text_xs().text_color(cx.theme().secondary_foreground).child(message.text)
                }
                StatusLevel::Error => div()
                    .px(spacing::xs())
                    .bg(colors::bg_error(cx))
                    .text_xs()
                    .text_color(cx.theme().danger)
                    .child(message.text),
            },
            None => div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child(build_label()),
        };

        div()
            .flex()
            .items_center()
            .justify_between()
            .w_full()
            .h(sizing::status_bar_height())
            .px(spacing::md())
            .bg(cx.theme().tab_bar)
            .border_t_1()
            .border_color(cx.theme().border)
            .child(left)
            .child(right)
    }
}

fn build_label() -> String {
    let sha = env!("TENANT_MIGRATE_GIT_SHA");
    if sha.is_empty() {
        format!("v{}", env!("CARGO_PKG_VERSION"))
    } else {
        format!("v{} ({sha})", env!("CARGO_PKG_VERSION"))
    }
}
