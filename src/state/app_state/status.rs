//! Status message updates derived from events.

use crate::state::StatusMessage;
use crate::state::events::AppEvent;

use super::AppState;

impl AppState {
    pub(crate) fn update_status_from_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::RequestIssued(record) => {
                self.set_status_message(Some(StatusMessage::info(format!(
                    "{} requested for {}",
                    record.phase.label(),
                    self.tenants().label(&record.role)
                ))));
            }
            AppEvent::RequestRejected { action, error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "{action} failed: {error}"
                ))));
            }
            AppEvent::GridKeysChanged { count } => {
                self.set_status_message(Some(StatusMessage::info(format!(
                    "Extraction grid shows {count} tenants"
                ))));
            }
            AppEvent::TenantsChanged => {
                self.set_status_message(Some(StatusMessage::info("Tenants updated")));
            }
            AppEvent::SaveFailed { what, error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to save {what}: {error}"
                ))));
            }
        }
    }
}
