pub mod app;
pub mod components;
pub mod dispatch;
pub mod error;
pub mod helpers;
pub mod layout;
pub mod models;
pub mod state;
pub mod theme;
pub mod views;

pub use error::{Error, Result};
