use crate::error::{Error, Result};

/// Message shown by every confirmation step.
pub const CONFIRM_DESCRIPTION: &str =
    "This will send API Requests, updating your tenant's configuration.";

/// How a click is turned into a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Run the action on click.
    #[default]
    Immediate,
    /// Open a confirmation step; run the action only when it is confirmed.
    Confirmed,
}

impl DispatchMode {
    pub fn from_requires_confirmation(requires_confirmation: bool) -> Self {
        if requires_confirmation { DispatchMode::Confirmed } else { DispatchMode::Immediate }
    }

    pub fn presentation(self) -> Presentation {
        match self {
            DispatchMode::Confirmed => {
                Presentation { icon: TriggerIcon::Commit, tone: TriggerTone::Success }
            }
            DispatchMode::Immediate => {
                Presentation { icon: TriggerIcon::Run, tone: TriggerTone::Primary }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerIcon {
    /// Backup/commit glyph for actions that write to a tenant after confirmation
    Commit,
    /// Play glyph for actions that run straight away
    Run,
}

impl TriggerIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            TriggerIcon::Commit => "\u{21EA}",
            TriggerIcon::Run => "\u{25B6}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTone {
    Success,
    Primary,
}

/// Icon and color pairing of a trigger. Fully determined by its [`DispatchMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub icon: TriggerIcon,
    pub tone: TriggerTone,
}

/// Caller-owned description of one triggerable action.
#[derive(Clone)]
pub struct ActionSpec<A> {
    label: String,
    action: A,
    mode: DispatchMode,
    disabled: bool,
}

impl<A> ActionSpec<A> {
    /// Create an immediate, enabled action. Blank labels are rejected.
    pub fn new(label: impl Into<String>, action: A) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(Error::InvalidAction("action label must not be empty".to_string()));
        }
        Ok(Self { label, action, mode: DispatchMode::Immediate, disabled: false })
    }

    pub fn requires_confirmation(mut self, requires_confirmation: bool) -> Self {
        self.mode = DispatchMode::from_requires_confirmation(requires_confirmation);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Swap the action, keeping the already validated label and flags.
    pub fn map_action<B>(self, f: impl FnOnce(A) -> B) -> ActionSpec<B> {
        ActionSpec {
            label: self.label,
            action: f(self.action),
            mode: self.mode,
            disabled: self.disabled,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    pub fn is_confirmed(&self) -> bool {
        self.mode == DispatchMode::Confirmed
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn presentation(&self) -> Presentation {
        self.mode.presentation()
    }
}

impl<A> std::fmt::Debug for ActionSpec<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSpec")
            .field("label", &self.label)
            .field("mode", &self.mode)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_label_is_rejected() {
        assert!(matches!(ActionSpec::new("  ", ()), Err(Error::InvalidAction(_))));
        assert!(ActionSpec::new("Migrate", ()).is_ok());
    }

    #[test]
    fn defaults_are_immediate_and_enabled() {
        let spec = ActionSpec::new("Extract", ()).expect("valid spec");
        assert_eq!(spec.mode(), DispatchMode::Immediate);
        assert!(!spec.is_disabled());
        assert_eq!(spec.label(), "Extract");
    }

    #[test]
    fn presentation_follows_mode() {
        let spec = ActionSpec::new("Migrate", ()).expect("valid spec");
        assert_eq!(
            spec.presentation(),
            Presentation { icon: TriggerIcon::Run, tone: TriggerTone::Primary }
        );

        let spec = spec.requires_confirmation(true).disabled(true);
        assert_eq!(
            spec.presentation(),
            Presentation { icon: TriggerIcon::Commit, tone: TriggerTone::Success }
        );
    }

    #[test]
    fn map_action_keeps_label_and_flags() {
        let spec = ActionSpec::new("Migrate", 2)
            .expect("valid spec")
            .requires_confirmation(true)
            .disabled(true);

        let mapped = spec.map_action(|n| n.to_string());

        assert_eq!(mapped.label(), "Migrate");
        assert_eq!(mapped.action(), "2");
        assert!(mapped.is_confirmed());
        assert!(mapped.is_disabled());
    }
}
