use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::dispatch::TriggerTone;
use crate::theme::{borders, colors, sizing, spacing, typography};

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Primary,
    Success,
}

impl From<TriggerTone> for ButtonVariant {
    fn from(tone: TriggerTone) -> Self {
        match tone {
            TriggerTone::Primary => ButtonVariant::Primary,
            TriggerTone::Success => ButtonVariant::Success,
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<AnyElement>,
    variant: ButtonVariant,
    on_click: Option<ClickHandler>,
    disabled: bool,
    large: bool,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            icon: None,
            variant: ButtonVariant::Secondary,
            on_click: None,
            disabled: false,
            large: false,
        }
    }

    pub fn variant(mut self, variant: impl Into<ButtonVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Taller button with a larger icon, used for action triggers.
    pub fn large(mut self) -> Self {
        self.large = true;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl IntoElement) -> Self {
        self.icon = Some(icon.into_any_element());
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (bg, hover_bg, text_color, border_color) = match self.variant {
            ButtonVariant::Primary => {
                let (bg, hover, fg) = colors::tone(TriggerTone::Primary, cx);
                (bg, hover, fg, bg)
            }
            ButtonVariant::Success => {
                let (bg, hover, fg) = colors::tone(TriggerTone::Success, cx);
                (bg, hover, fg, bg)
            }
            ButtonVariant::Secondary => (
                cx.theme().secondary,
                cx.theme().secondary_hover,
                cx.theme().secondary_foreground,
                cx.theme().border,
            ),
        };

        let height = if self.large { sizing::trigger_height() } else { sizing::button_height() };
        let text_size = typography::text_sm();

        let mut el = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .h(height)
            .px(spacing::md())
            .rounded(borders::radius_sm())
            .border_1()
            .border_color(border_color)
            .bg(bg)
            .text_size(text_size)
            .font_weight(FontWeight::NORMAL)
            .text_color(text_color);

        if self.disabled {
            el = el.opacity(0.5).cursor_not_allowed();
        } else {
            el = el.cursor_pointer().hover(move |s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                el = el.on_click(handler);
            }
        }

        let has_label = self.label.is_some();
        if let Some(icon) = self.icon {
            let icon_size = if self.large { typography::text_lg() } else { text_size };
            el = el.child(div().text_size(icon_size).child(icon));
            if has_label {
                el = el.gap(spacing::sm());
            }
        }
        if let Some(label) = self.label {
            el = el.child(label);
        }

        el
    }
}
