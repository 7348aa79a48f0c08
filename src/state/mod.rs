// Application state management

pub mod app_state;
pub mod commands;
pub mod config;
pub mod events;
pub mod memo;
pub mod requests;
pub mod settings;
pub mod status;
pub mod tenants;

pub use app_state::AppState;
pub use commands::{AppCommands, PhaseSpecs, TriggerAction};
pub use config::ConfigManager;
pub use events::AppEvent;
pub use memo::Memo;
pub use requests::{RequestLog, RequestPhase, RequestRecord};
pub use settings::AppSettings;
pub use status::{StatusLevel, StatusMessage};
pub use tenants::{TargetIdentity, TenantContext};
