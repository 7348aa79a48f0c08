use super::spec::{ActionSpec, DispatchMode};

/// Confirmation state of one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    ConfirmPending,
}

/// What an event did to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEffect {
    /// Nothing changed and nothing ran.
    Ignored,
    /// The action was invoked.
    Dispatched,
    /// A confirmation step was opened; the action has not run.
    ConfirmOpened,
    /// The confirmation step was closed without running the action.
    Dismissed,
}

/// How a confirmation step was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmExit {
    /// The confirm button.
    Confirm,
    /// The cancel button.
    Cancel,
    /// Any other close the dialog host offers (close button, escape, overlay).
    Close,
}

/// Two-state machine deciding when an [`ActionSpec`]'s action runs.
///
/// The `ActionSpec` is passed into every event so the trigger never holds a copy of the
/// caller's action. `invoke` receives the action and calls it with whatever context the
/// host has; it runs synchronously and anything it raises is left to the caller.
#[derive(Debug, Default)]
pub struct ActionTrigger {
    state: TriggerState,
}

impl ActionTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Whether the confirmation step is showing.
    pub fn is_open(&self) -> bool {
        self.state == TriggerState::ConfirmPending
    }

    pub fn click<A>(&mut self, spec: &ActionSpec<A>, invoke: impl FnOnce(&A)) -> TriggerEffect {
        if spec.is_disabled() {
            log::debug!("click on disabled trigger '{}' ignored", spec.label());
            return TriggerEffect::Ignored;
        }

        match (self.state, spec.mode()) {
            (TriggerState::ConfirmPending, _) => TriggerEffect::Ignored,
            (TriggerState::Idle, DispatchMode::Confirmed) => {
                log::debug!("trigger '{}' awaiting confirmation", spec.label());
                self.state = TriggerState::ConfirmPending;
                TriggerEffect::ConfirmOpened
            }
            (TriggerState::Idle, DispatchMode::Immediate) => {
                log::info!("dispatching '{}'", spec.label());
                invoke(spec.action());
                TriggerEffect::Dispatched
            }
        }
    }

    /// Confirm signal from the confirmation step: run the action, then close.
    pub fn confirm<A>(&mut self, spec: &ActionSpec<A>, invoke: impl FnOnce(&A)) -> TriggerEffect {
        if self.state != TriggerState::ConfirmPending {
            return TriggerEffect::Ignored;
        }

        // The action may have been reconfigured since the step opened.
        if spec.is_disabled() || !spec.is_confirmed() {
            log::debug!("trigger '{}' no longer dispatchable, closing", spec.label());
            self.state = TriggerState::Idle;
            return TriggerEffect::Dismissed;
        }

        log::info!("dispatching '{}' after confirmation", spec.label());
        invoke(spec.action());
        self.state = TriggerState::Idle;
        TriggerEffect::Dispatched
    }

    /// Cancel/close signal from the confirmation step.
    pub fn cancel(&mut self) -> TriggerEffect {
        match self.state {
            TriggerState::Idle => TriggerEffect::Ignored,
            TriggerState::ConfirmPending => {
                self.state = TriggerState::Idle;
                TriggerEffect::Dismissed
            }
        }
    }

    /// Route a confirmation step's exit to `confirm` or `cancel`.
    ///
    /// Every way a dialog can close must end up here, otherwise the trigger stays pending
    /// and ignores further clicks.
    pub fn resolve<A>(
        &mut self,
        exit: ConfirmExit,
        spec: &ActionSpec<A>,
        invoke: impl FnOnce(&A),
    ) -> TriggerEffect {
        match exit {
            ConfirmExit::Confirm => self.confirm(spec, invoke),
            ConfirmExit::Cancel | ConfirmExit::Close => self.cancel(),
        }
    }

    /// Drop a pending confirmation if `spec` no longer asks for one.
    pub fn sync<A>(&mut self, spec: &ActionSpec<A>) {
        if self.is_open() && !spec.is_confirmed() {
            self.state = TriggerState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter_spec(confirm: bool) -> (ActionSpec<impl Fn()>, std::rc::Rc<Cell<u32>>) {
        let calls = std::rc::Rc::new(Cell::new(0));
        let action = {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        };
        let spec = ActionSpec::new("Migrate", action).expect("valid spec");
        (spec.requires_confirmation(confirm), calls)
    }

    #[test]
    fn immediate_click_dispatches_once() {
        let (spec, calls) = counter_spec(false);
        let mut trigger = ActionTrigger::new();

        assert_eq!(trigger.click(&spec, |action| action()), TriggerEffect::Dispatched);
        assert_eq!(calls.get(), 1);
        assert_eq!(trigger.state(), TriggerState::Idle);
    }

    #[test]
    fn repeated_clicks_while_pending_keep_one_step() {
        let (spec, calls) = counter_spec(true);
        let mut trigger = ActionTrigger::new();

        assert_eq!(trigger.click(&spec, |action| action()), TriggerEffect::ConfirmOpened);
        assert_eq!(trigger.click(&spec, |action| action()), TriggerEffect::Ignored);
        assert_eq!(trigger.click(&spec, |action| action()), TriggerEffect::Ignored);
        assert!(trigger.is_open());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn signals_while_idle_are_ignored() {
        let (spec, calls) = counter_spec(true);
        let mut trigger = ActionTrigger::new();

        assert_eq!(trigger.confirm(&spec, |action| action()), TriggerEffect::Ignored);
        assert_eq!(trigger.cancel(), TriggerEffect::Ignored);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn disabling_while_pending_blocks_confirm() {
        let (spec, calls) = counter_spec(true);
        let mut trigger = ActionTrigger::new();
        trigger.click(&spec, |action| action());

        let spec = spec.disabled(true);
        assert_eq!(trigger.confirm(&spec, |action| action()), TriggerEffect::Dismissed);
        assert_eq!(calls.get(), 0);
        assert!(!trigger.is_open());
    }

    #[test]
    fn sync_closes_step_when_confirmation_is_dropped() {
        let (spec, _calls) = counter_spec(true);
        let mut trigger = ActionTrigger::new();
        trigger.click(&spec, |action| action());

        trigger.sync(&spec);
        assert!(trigger.is_open());

        let spec = spec.requires_confirmation(false);
        trigger.sync(&spec);
        assert_eq!(trigger.state(), TriggerState::Idle);
    }

    #[test]
    fn every_dialog_exit_returns_to_idle() {
        for exit in [ConfirmExit::Cancel, ConfirmExit::Close] {
            let (spec, calls) = counter_spec(true);
            let mut trigger = ActionTrigger::new();
            trigger.click(&spec, |action| action());

            assert_eq!(trigger.resolve(exit, &spec, |action| action()), TriggerEffect::Dismissed);
            assert_eq!(trigger.state(), TriggerState::Idle);
            assert_eq!(calls.get(), 0);

            // The trigger stays usable after the dialog went away.
            assert_eq!(trigger.click(&spec, |action| action()), TriggerEffect::ConfirmOpened);
        }
    }

    #[test]
    fn close_after_confirm_is_ignored() {
        let (spec, calls) = counter_spec(true);
        let mut trigger = ActionTrigger::new();
        trigger.click(&spec, |action| action());

        let confirmed = trigger.resolve(ConfirmExit::Confirm, &spec, |action| action());
        let closed = trigger.resolve(ConfirmExit::Close, &spec, |action| action());

        assert_eq!(confirmed, TriggerEffect::Dispatched);
        assert_eq!(closed, TriggerEffect::Ignored);
        assert_eq!(calls.get(), 1);
    }
}
