//! Explicit tenant lookup passed to the views that need it.

use crate::error::{Error, Result};
use crate::helpers::tenant_label;
use crate::models::{ROLE_TARGET, TenantList, TenantRecord};
use crate::state::memo::Memo;

/// Read-only view over the tenant registry.
#[derive(Debug, Clone, Default)]
pub struct TenantContext {
    list: TenantList,
}

impl TenantContext {
    pub fn new(list: TenantList) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &TenantList {
        &self.list
    }

    pub fn tenant_key(&self, role: &str) -> Option<&str> {
        self.list.tenant_key.get(role).map(String::as_str)
    }

    pub fn tenant(&self, key: &str) -> Option<&TenantRecord> {
        self.list.tenants.get(key)
    }

    /// Resolve the tenant key assigned to `role` and the record stored under it.
    ///
    /// Either half may be absent while the registry is still being filled in.
    pub fn lookup(&self, role: &str) -> (Option<&str>, Option<&TenantRecord>) {
        let key = self.tenant_key(role);
        let record = key.and_then(|key| self.tenant(key));
        (key, record)
    }

    /// Like [`lookup`](Self::lookup) but requires a fully resolved tenant.
    pub fn require(&self, role: &str) -> Result<(&str, &TenantRecord)> {
        match self.lookup(role) {
            (Some(key), Some(record)) => Ok((key, record)),
            _ => Err(Error::UnknownRole(role.to_string())),
        }
    }

    pub fn label(&self, role: &str) -> String {
        let (key, record) = self.lookup(role);
        tenant_label(record, key, role)
    }
}

/// Display label of the tenant a confirmed action will modify.
///
/// Recomputed only when the target key or its record changes.
#[derive(Debug, Default)]
pub struct TargetIdentity {
    memo: Memo<(Option<String>, Option<TenantRecord>), String>,
}

impl TargetIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&mut self, tenants: &TenantContext) -> &str {
        let (key, record) = tenants.lookup(ROLE_TARGET);
        let inputs = (key.map(str::to_string), record.cloned());
        self.memo
            .get_or_insert_with(&inputs, |(key, record)| {
                tenant_label(record.as_ref(), key.as_deref(), ROLE_TARGET)
            })
            .as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ROLE_MAIN;

    fn context() -> TenantContext {
        let mut list = TenantList::default();
        list.insert("0", TenantRecord::new("SourceEnv", "https://source.example"));
        list.assign(ROLE_MAIN, "0");
        list.assign(ROLE_TARGET, "1");
        TenantContext::new(list)
    }

    #[test]
    fn lookup_reports_partial_resolution() {
        let tenants = context();

        let (key, record) = tenants.lookup(ROLE_MAIN);
        assert_eq!(key, Some("0"));
        assert_eq!(record.map(|r| r.label.as_str()), Some("SourceEnv"));

        let (key, record) = tenants.lookup(ROLE_TARGET);
        assert_eq!(key, Some("1"));
        assert!(record.is_none());

        assert!(matches!(tenants.require(ROLE_TARGET), Err(Error::UnknownRole(_))));
    }

    #[test]
    fn target_identity_degrades_then_updates() {
        let mut tenants = context();
        let mut identity = TargetIdentity::new();
        assert_eq!(identity.label(&tenants), "Target #1");

        let mut list = tenants.list().clone();
        list.insert("1", TenantRecord::new("Target", "https://target.example"));
        tenants = TenantContext::new(list);

        assert_eq!(identity.label(&tenants), "Target #1: Target (https://target.example)");
    }
}
