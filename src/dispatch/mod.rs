//! Confirmation-gated action dispatch.
//!
//! An [`ActionSpec`] describes what a trigger does; an [`ActionTrigger`] tracks whether a
//! confirmation step is open for it. Neither depends on the UI toolkit, so hosts pass the
//! action invocation in as a closure.

pub mod spec;
pub mod trigger;

pub use spec::{
    ActionSpec, CONFIRM_DESCRIPTION, DispatchMode, Presentation, TriggerIcon, TriggerTone,
};
pub use trigger::{ActionTrigger, ConfirmExit, TriggerEffect, TriggerState};
