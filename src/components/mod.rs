// Reusable UI components

pub mod button;
pub mod confirm;
pub mod migrate_button;
mod status_bar;

pub use button::Button;
pub use confirm::open_confirm_action;
pub use migrate_button::MigrateButton;
pub use status_bar::StatusBar;
