// Tenant registry models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Role of the tenant that configuration is extracted from.
pub const ROLE_MAIN: &str = "Main";

/// Role of the tenant that receives migrated configuration.
pub const ROLE_TARGET: &str = "Target";

/// A tenant environment participating in a migration (persisted to disk)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRecord {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: u32,
    #[serde(default)]
    pub disable_system_proxies: bool,
    #[serde(default)]
    pub proxy_url: String,
}

impl TenantRecord {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            concurrent_requests: default_concurrent_requests(),
            ..Default::default()
        }
    }
}

fn default_concurrent_requests() -> u32 {
    10
}

/// Registered tenants plus the role → tenant key assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantList {
    /// Role name (e.g. `Main`, `Target`) → tenant key
    #[serde(default)]
    pub tenant_key: BTreeMap<String, String>,
    /// Tenant key → record
    #[serde(default)]
    pub tenants: BTreeMap<String, TenantRecord>,
}

impl TenantList {
    /// Register `record` under `key`, replacing any previous record.
    pub fn insert(&mut self, key: impl Into<String>, record: TenantRecord) {
        self.tenants.insert(key.into(), record);
    }

    /// Point `role` at the tenant stored under `key`.
    pub fn assign(&mut self, role: impl Into<String>, key: impl Into<String>) {
        self.tenant_key.insert(role.into(), key.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_with_missing_fields() {
        let record: TenantRecord =
            serde_json::from_str(r#"{ "label": "SourceEnv" }"#).expect("should deserialize");
        assert_eq!(record.label, "SourceEnv");
        assert!(record.url.is_empty());
        assert_eq!(record.concurrent_requests, 10);
        assert!(!record.disable_system_proxies);
    }
}
