// Data structures and types

pub mod tenant;

pub use tenant::{ROLE_MAIN, ROLE_TARGET, TenantList, TenantRecord};
