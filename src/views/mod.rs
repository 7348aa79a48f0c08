// Console views

pub mod extraction;
pub mod tenant_selector;

pub use extraction::ExtractionPanel;
pub use tenant_selector::TenantMigrationSelector;
