//! Command helpers that mutate AppState and emit events.

use std::rc::Rc;

use gpui::{App, Entity, Window};

use crate::dispatch::ActionSpec;
use crate::error::Result;
use crate::state::{AppState, RequestPhase};

/// Action run by a console trigger.
pub type TriggerAction = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Trigger specs for every request phase, validated once before any view is built.
#[derive(Debug, Clone)]
pub struct PhaseSpecs {
    extract_configs: ActionSpec<RequestPhase>,
    extract_entities: ActionSpec<RequestPhase>,
    migrate: ActionSpec<RequestPhase>,
}

impl PhaseSpecs {
    pub fn new() -> Result<Self> {
        let spec = |phase: RequestPhase| ActionSpec::new(phase.label(), phase);
        Ok(Self {
            extract_configs: spec(RequestPhase::ExtractConfigs)?,
            extract_entities: spec(RequestPhase::ExtractEntities)?,
            // Migrating writes to the target tenant
            migrate: spec(RequestPhase::Migrate)?.requires_confirmation(true),
        })
    }

    pub fn get(&self, phase: RequestPhase) -> &ActionSpec<RequestPhase> {
        match phase {
            RequestPhase::ExtractConfigs => &self.extract_configs,
            RequestPhase::ExtractEntities => &self.extract_entities,
            RequestPhase::Migrate => &self.migrate,
        }
    }

    /// Spec for `phase` whose action issues the request for the tenant playing `role`.
    pub fn bind(
        &self,
        phase: RequestPhase,
        state: Entity<AppState>,
        role: impl Into<String>,
    ) -> ActionSpec<TriggerAction> {
        let role = role.into();
        self.get(phase)
            .clone()
            .map_action(|phase| AppCommands::request_action(state, phase, role))
    }
}

pub struct AppCommands;

impl AppCommands {
    /// Record a request of `phase` for the tenant playing `role`.
    pub fn issue_request(state: &Entity<AppState>, phase: RequestPhase, role: &str, cx: &mut App) {
        state.update(cx, |state, cx| {
            let event = state.record_request(phase, role);
            state.apply_event(&event);
            cx.emit(event);
            cx.notify();
        });
    }

    /// Build the trigger action that issues `phase` for `role`.
    pub fn request_action(
        state: Entity<AppState>,
        phase: RequestPhase,
        role: impl Into<String>,
    ) -> TriggerAction {
        let role = role.into();
        Rc::new(move |_window: &mut Window, cx: &mut App| {
            Self::issue_request(&state, phase, &role, cx);
        })
    }

    /// Show or hide the extraction column for `role`.
    pub fn toggle_grid_key(state: &Entity<AppState>, role: &str, cx: &mut App) {
        state.update(cx, |state, cx| {
            for event in state.toggle_grid_key(role) {
                state.apply_event(&event);
                cx.emit(event);
            }
            cx.notify();
        });
    }

    /// Swap which tenant is the migration source and which is the target.
    pub fn swap_roles(state: &Entity<AppState>, cx: &mut App) {
        state.update(cx, |state, cx| {
            for event in state.swap_roles() {
                state.apply_event(&event);
                cx.emit(event);
            }
            cx.notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_specs_use_phase_labels() {
        let specs = PhaseSpecs::new().expect("phase labels are valid");

        for phase in [RequestPhase::ExtractConfigs, RequestPhase::ExtractEntities] {
            let spec = specs.get(phase);
            assert_eq!(spec.label(), phase.label());
            assert_eq!(*spec.action(), phase);
            assert!(!spec.is_confirmed());
        }
        assert!(specs.get(RequestPhase::Migrate).is_confirmed());
    }
}
