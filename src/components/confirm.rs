use std::rc::Rc;

use gpui::*;
use gpui_component::dialog::Dialog;
use gpui_component::{ActiveTheme as _, WindowExt as _};

use crate::components::Button;
use crate::components::button::ButtonVariant;
use crate::dispatch::ConfirmExit;
use crate::theme::spacing;

type ExitHandler = Rc<dyn Fn(ConfirmExit, &mut Window, &mut App) + 'static>;

/// Text shown by a confirmation dialog.
#[derive(Clone)]
pub struct ConfirmContent {
    pub label: SharedString,
    pub description: SharedString,
    /// Display label of the tenant the action will modify
    pub tenant_label: SharedString,
}

/// Open a confirmation dialog for an action.
///
/// `on_exit` runs for every way the dialog goes away: the two footer buttons, and
/// `ConfirmExit::Close` from the dialog's own close handling. A close that follows a button
/// is reported too, so `on_exit` must treat repeats as no-ops.
pub fn open_confirm_action(
    window: &mut Window,
    cx: &mut App,
    content: ConfirmContent,
    on_exit: impl Fn(ConfirmExit, &mut Window, &mut App) + 'static,
) {
    let on_exit: ExitHandler = Rc::new(on_exit);

    window.open_dialog(cx, move |dialog: Dialog, _window: &mut Window, cx: &mut App| {
        dialog
            .title(content.label.clone())
            .min_w(px(420.0))
            .overlay_closable(false)
            .keyboard(false)
            .close_button(false)
            .on_close({
                let on_exit = on_exit.clone();
                move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                    on_exit(ConfirmExit::Close, window, cx);
                }
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(spacing::sm())
                    .p(spacing::md())
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(content.description.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(cx.theme().foreground)
                            .child(content.tenant_label.clone()),
                    ),
            )
            .footer({
                let label = content.label.clone();
                let on_exit = on_exit.clone();
                move |_ok_fn, _cancel_fn, _window, _cx| {
                    vec![
                        exit_button("cancel-confirm", "Cancel", ConfirmExit::Cancel, &on_exit)
                            .into_any_element(),
                        exit_button("confirm-action", label.clone(), ConfirmExit::Confirm, &on_exit)
                            .variant(ButtonVariant::Success)
                            .into_any_element(),
                    ]
                }
            })
    });
}

fn exit_button(
    id: &'static str,
    label: impl Into<SharedString>,
    exit: ConfirmExit,
    on_exit: &ExitHandler,
) -> Button {
    let on_exit = on_exit.clone();
    Button::new(id).label(label).on_click(move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
        on_exit(exit, window, cx);
        window.close_dialog(cx);
    })
}
