//! UI helper functions for extraction panel components.

use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::theme::{borders, spacing};

/// Panel wrapper with title and content.
pub(super) fn panel(title: impl Into<SharedString>, content: impl IntoElement, cx: &App) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(spacing::sm())
        .p(spacing::md())
        .bg(cx.theme().tab_bar)
        .border_1()
        .border_color(cx.theme().sidebar_border)
        .rounded(borders::radius_sm())
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(cx.theme().secondary_foreground)
                .child(title.into()),
        )
        .child(content)
}

/// Muted single-line note.
pub(super) fn note(text: impl Into<SharedString>, cx: &App) -> Div {
    div().text_xs().text_color(cx.theme().muted_foreground).child(text.into())
}
