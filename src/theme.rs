// Design tokens for the migration console
// Theme colors come from gpui-component's active theme.
// Access them with `cx.theme().background`, `cx.theme().primary`, etc.
// This file only holds layout tokens plus the trigger tone mapping.

// =============================================================================
// Colors (theme-aware)
// =============================================================================

pub mod colors {
    use gpui::{App, Hsla};
    use gpui_component::ActiveTheme as _;

    use crate::dispatch::TriggerTone;

    /// Background, hover background and text color for a trigger tone.
    pub fn tone(tone: TriggerTone, cx: &App) -> (Hsla, Hsla, Hsla) {
        let theme = cx.theme();
        match tone {
            TriggerTone::Success => (theme.success, theme.success_hover, theme.success_foreground),
            TriggerTone::Primary => (theme.primary, theme.primary_hover, theme.primary_foreground),
        }
    }

    // Error background with alpha
    pub fn bg_error(cx: &App) -> Hsla {
        let mut c = cx.theme().danger;
        c.a = 0.1;
        c
    }
}

// =============================================================================
// Spacing
// =============================================================================

pub mod spacing {
    use gpui::{Pixels, px};

    pub fn xs() -> Pixels {
        px(4.0)
    }
    pub fn sm() -> Pixels {
        px(8.0)
    }
    pub fn md() -> Pixels {
        px(12.0)
    }
    pub fn lg() -> Pixels {
        px(16.0)
    }
}

// =============================================================================
// Sizing
// =============================================================================

pub mod sizing {
    use gpui::{Pixels, px};

    pub fn status_bar_height() -> Pixels {
        px(22.0)
    }
    pub fn header_height() -> Pixels {
        px(36.0)
    }

    pub fn button_height() -> Pixels {
        px(28.0)
    }
    pub fn trigger_height() -> Pixels {
        px(36.0)
    }
}

// =============================================================================
// Typography
// =============================================================================

pub mod typography {
    use gpui::{Pixels, px};

    pub fn text_sm() -> Pixels {
        px(12.0)
    }
    pub fn text_lg() -> Pixels {
        px(18.0)
    }
}

// =============================================================================
// Borders
// =============================================================================

pub mod borders {
    use gpui::{Pixels, px};

    pub fn radius_sm() -> Pixels {
        px(3.0)
    }
}
