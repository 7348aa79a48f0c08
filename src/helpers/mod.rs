pub mod label;

pub use label::tenant_label;
