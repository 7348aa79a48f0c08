//! Global application state.

mod status;

use gpui::EventEmitter;

use crate::layout::{KeyList, LogicalKey};
use crate::models::{ROLE_MAIN, ROLE_TARGET, TenantList};
use crate::state::ConfigManager;
use crate::state::StatusMessage;
use crate::state::events::AppEvent;
use crate::state::requests::{RequestLog, RequestPhase, RequestRecord};
use crate::state::settings::AppSettings;
use crate::state::tenants::TenantContext;

/// Global application state
pub struct AppState {
    // Persisted state
    tenants: TenantContext,
    pub settings: AppSettings,

    // Derived from settings; replaced (never mutated) so views can memoize on it
    grid_keys: KeyList,

    pub requests: RequestLog,
    status_message: Option<StatusMessage>,

    // Config manager for persistence; absent when running from in-memory data
    config: Option<ConfigManager>,
}

impl AppState {
    /// Create new AppState, loading persisted data from disk
    pub fn new() -> Self {
        let config = match ConfigManager::new() {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Config directory unavailable, settings will not persist: {e:#}");
                None
            }
        };

        let (tenants, settings) = match &config {
            Some(config) => {
                let tenants = config.load_tenants().unwrap_or_else(|e| {
                    log::warn!("Failed to load tenants: {e:#}");
                    TenantList::default()
                });
                let settings = config.load_settings().unwrap_or_else(|e| {
                    log::warn!("Failed to load settings: {e:#}");
                    AppSettings::default()
                });
                (tenants, settings)
            }
            None => (TenantList::default(), AppSettings::default()),
        };

        let mut state = Self::with_data(tenants, settings);
        state.config = config;
        state
    }

    /// Create AppState from in-memory data without touching disk
    pub fn with_data(tenants: TenantList, settings: AppSettings) -> Self {
        let grid_keys = key_list(&settings.migration_grid.keys);
        Self {
            tenants: TenantContext::new(tenants),
            settings,
            grid_keys,
            requests: RequestLog::new(),
            status_message: None,
            config: None,
        }
    }

    pub fn tenants(&self) -> &TenantContext {
        &self.tenants
    }

    /// Current extraction grid keys. The same `Rc` is returned until the keys change.
    pub fn grid_keys(&self) -> &KeyList {
        &self.grid_keys
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    pub fn set_status_message(&mut self, message: Option<StatusMessage>) {
        self.status_message = message;
    }

    /// Replace the grid keys and persist them. Returns the events to emit.
    pub fn set_grid_keys(&mut self, keys: Vec<String>) -> Vec<AppEvent> {
        if keys == self.settings.migration_grid.keys {
            return Vec::new();
        }
        self.grid_keys = key_list(&keys);
        self.settings.migration_grid.keys = keys;

        let mut events = vec![AppEvent::GridKeysChanged { count: self.grid_keys.len() }];
        events.extend(self.save_settings());
        events
    }

    /// Add `key` to the grid when absent, otherwise remove every occurrence of it.
    pub fn toggle_grid_key(&mut self, key: &str) -> Vec<AppEvent> {
        let mut keys = self.settings.migration_grid.keys.clone();
        if keys.iter().any(|k| k == key) {
            keys.retain(|k| k != key);
        } else {
            keys.push(key.to_string());
        }
        self.set_grid_keys(keys)
    }

    pub fn set_tenants(&mut self, tenants: TenantList) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if let Some(config) = &self.config
            && let Err(e) = config.save_tenants(&tenants)
        {
            log::error!("Failed to save tenants: {e:#}");
            events.push(AppEvent::SaveFailed { what: "tenants", error: format!("{e:#}") });
        }
        self.tenants = TenantContext::new(tenants);
        events.push(AppEvent::TenantsChanged);
        events
    }

    /// Swap the tenants assigned to the main and target roles.
    pub fn swap_roles(&mut self) -> Vec<AppEvent> {
        let mut tenants = self.tenants.list().clone();
        let main = tenants.tenant_key.remove(ROLE_MAIN);
        let target = tenants.tenant_key.remove(ROLE_TARGET);
        if let Some(key) = target {
            tenants.assign(ROLE_MAIN, key);
        }
        if let Some(key) = main {
            tenants.assign(ROLE_TARGET, key);
        }
        self.set_tenants(tenants)
    }

    pub fn save_settings(&self) -> Option<AppEvent> {
        let config = self.config.as_ref()?;
        config.save_settings(&self.settings).err().map(|e| {
            log::error!("Failed to save settings: {e:#}");
            AppEvent::SaveFailed { what: "settings", error: format!("{e:#}") }
        })
    }

    /// Record a request for the tenant playing `role`.
    ///
    /// Requests for a role with no resolved tenant are rejected rather than recorded.
    pub fn record_request(&mut self, phase: RequestPhase, role: &str) -> AppEvent {
        let tenant_key = match self.tenants.require(role) {
            Ok((key, _)) => key.to_string(),
            Err(e) => {
                log::warn!("{} not issued: {e}", phase.endpoint());
                return AppEvent::RequestRejected {
                    action: phase.label().to_string(),
                    error: e.to_string(),
                };
            }
        };
        let record = RequestRecord::new(phase, role, Some(tenant_key));
        log::info!("{}", record.summary());
        self.requests.push(record.clone());
        AppEvent::RequestIssued(record)
    }

    /// Apply an event's effect on the status line.
    pub fn apply_event(&mut self, event: &AppEvent) {
        self.update_status_from_event(event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter<AppEvent> for AppState {}

fn key_list(keys: &[String]) -> KeyList {
    keys.iter().cloned().map(LogicalKey::from).collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::TenantRecord;
    use crate::state::StatusLevel;

    fn state() -> AppState {
        let mut tenants = TenantList::default();
        tenants.insert("0", TenantRecord::new("SourceEnv", "https://source.example"));
        tenants.assign(ROLE_MAIN, "0");
        AppState::with_data(tenants, AppSettings::default())
    }

    #[test]
    fn grid_keys_are_stable_until_changed() {
        let mut state = state();
        let before = state.grid_keys().clone();

        assert!(state.set_grid_keys(vec!["Main".into(), "Target".into()]).is_empty());
        assert!(Rc::ptr_eq(&before, state.grid_keys()));

        let events = state.set_grid_keys(vec!["Target".into()]);
        assert!(matches!(events.as_slice(), [AppEvent::GridKeysChanged { count: 1 }]));
        assert!(!Rc::ptr_eq(&before, state.grid_keys()));
    }

    #[test]
    fn toggle_grid_key_hides_and_restores_a_column() {
        let mut state = state();
        let before = state.grid_keys().clone();

        let events = state.toggle_grid_key(ROLE_TARGET);
        assert!(matches!(events.as_slice(), [AppEvent::GridKeysChanged { count: 1 }]));
        assert_eq!(state.settings.migration_grid.keys, vec![ROLE_MAIN.to_string()]);
        assert!(!Rc::ptr_eq(&before, state.grid_keys()));

        state.toggle_grid_key(ROLE_TARGET);
        assert_eq!(&state.grid_keys()[..], &before[..]);
    }

    #[test]
    fn record_request_resolves_tenant_key() {
        let mut state = state();

        let AppEvent::RequestIssued(record) =
            state.record_request(RequestPhase::ExtractConfigs, ROLE_MAIN)
        else {
            panic!("expected RequestIssued");
        };
        assert_eq!(record.tenant_key.as_deref(), Some("0"));

        let event = state.record_request(RequestPhase::Migrate, ROLE_TARGET);
        assert!(matches!(event, AppEvent::RequestRejected { .. }));
        assert_eq!(state.requests.len(), 1);

        state.apply_event(&event);
        let status = state.status_message().expect("status set");
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.starts_with("Migrate failed"));
    }

    #[test]
    fn swap_roles_exchanges_assignments() {
        let mut state = state();
        let events = state.swap_roles();

        assert!(matches!(events.as_slice(), [AppEvent::TenantsChanged]));
        assert_eq!(state.tenants().tenant_key(ROLE_TARGET), Some("0"));
        assert_eq!(state.tenants().tenant_key(ROLE_MAIN), None);
    }
}
