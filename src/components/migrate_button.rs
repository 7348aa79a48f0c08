//! Action trigger view: runs an action on click, or after a confirmation dialog.

use gpui::*;

use crate::components::Button;
use crate::components::confirm::{ConfirmContent, open_confirm_action};
use crate::dispatch::{
    ActionSpec, ActionTrigger, CONFIRM_DESCRIPTION, ConfirmExit, TriggerEffect,
};
use crate::state::{AppState, TargetIdentity, TriggerAction};
use crate::theme::spacing;

pub struct MigrateButton {
    id: SharedString,
    spec: ActionSpec<TriggerAction>,
    trigger: ActionTrigger,
    state: Entity<AppState>,
    identity: TargetIdentity,
    _subscriptions: Vec<Subscription>,
}

impl MigrateButton {
    pub fn new(
        id: impl Into<SharedString>,
        spec: ActionSpec<TriggerAction>,
        state: Entity<AppState>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Tenant changes alter the target label shown in the dialog.
        let subscription = cx.observe(&state, |_, _, cx| cx.notify());
        Self {
            id: id.into(),
            spec,
            trigger: ActionTrigger::new(),
            state,
            identity: TargetIdentity::new(),
            _subscriptions: vec![subscription],
        }
    }

    /// Replace the caller-owned spec, e.g. to disable the trigger while work is pending.
    pub fn set_spec(&mut self, spec: ActionSpec<TriggerAction>, cx: &mut Context<Self>) {
        self.spec = spec;
        self.trigger.sync(&self.spec);
        cx.notify();
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        if self.spec.is_disabled() != disabled {
            let spec = self.spec.clone().disabled(disabled);
            self.set_spec(spec, cx);
        }
    }

    fn on_click(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let effect = self.trigger.click(&self.spec, |action| action(window, &mut **cx));
        if effect == TriggerEffect::ConfirmOpened {
            self.open_confirmation(window, cx);
        }
        cx.notify();
    }

    fn open_confirmation(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let tenant_label = self.identity.label(self.state.read(cx).tenants()).to_string();
        let content = ConfirmContent {
            label: self.spec.label().to_string().into(),
            description: CONFIRM_DESCRIPTION.into(),
            tenant_label: tenant_label.into(),
        };

        let this = cx.entity().downgrade();
        let label = self.spec.label().to_string();
        open_confirm_action(window, cx, content, move |exit, window, cx| {
            if this.update(cx, |button, cx| button.resolve(exit, window, cx)).is_err() {
                log::debug!("trigger '{label}' released before its dialog closed");
            }
        });
    }

    fn resolve(&mut self, exit: ConfirmExit, window: &mut Window, cx: &mut Context<Self>) {
        let effect = self.trigger.resolve(exit, &self.spec, |action| action(window, &mut **cx));
        if effect == TriggerEffect::Dismissed {
            log::debug!("confirmation for '{}' closed without running", self.spec.label());
        }
        cx.notify();
    }
}

impl Render for MigrateButton {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let presentation = self.spec.presentation();

        div().my(spacing::xs()).child(
            Button::new(self.id.clone())
                .large()
                .variant(presentation.tone)
                .icon(presentation.icon.glyph())
                .label(self.spec.label().to_string())
                .disabled(self.spec.is_disabled())
                .on_click(cx.listener(Self::on_click)),
        )
    }
}
