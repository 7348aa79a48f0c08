//! Application events for reactive UI updates

use crate::state::requests::RequestRecord;

/// Events emitted by AppState for UI reactivity
#[derive(Debug, Clone)]
pub enum AppEvent {
    RequestIssued(RequestRecord),
    RequestRejected { action: String, error: String },
    GridKeysChanged { count: usize },
    TenantsChanged,
    SaveFailed { what: &'static str, error: String },
}
