//! Log of requests issued by console actions.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Migration phase a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestPhase {
    ExtractConfigs,
    ExtractEntities,
    Migrate,
}

impl RequestPhase {
    /// Endpoint name of the phase on the migration backend.
    pub fn endpoint(self) -> &'static str {
        match self {
            RequestPhase::ExtractConfigs => "extract_configs",
            RequestPhase::ExtractEntities => "extract_entity_v2",
            RequestPhase::Migrate => "migrate_settings_2_0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestPhase::ExtractConfigs => "Extract Configs",
            RequestPhase::ExtractEntities => "Extract Entities",
            RequestPhase::Migrate => "Migrate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: Uuid,
    pub phase: RequestPhase,
    /// Tenant role the request was issued for
    pub role: String,
    pub tenant_key: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl RequestRecord {
    pub fn new(phase: RequestPhase, role: impl Into<String>, tenant_key: Option<String>) -> Self {
        Self { id: Uuid::new_v4(), phase, role: role.into(), tenant_key, issued_at: Utc::now() }
    }

    /// One-line summary, e.g. `POST extract_configs tenant_key=0`.
    pub fn summary(&self) -> String {
        match &self.tenant_key {
            Some(key) => format!("POST {} tenant_key={}", self.phase.endpoint(), key),
            None => format!("POST {} (no tenant)", self.phase.endpoint()),
        }
    }
}

/// Append-only, bounded request history. Oldest entries are dropped first.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    records: VecDeque<RequestRecord>,
}

impl RequestLog {
    pub const MAX_RECORDS: usize = 200;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RequestRecord) {
        if self.records.len() == Self::MAX_RECORDS {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequestRecord> {
        self.records.iter()
    }

    /// Records issued for `role`, oldest first.
    pub fn for_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a RequestRecord> + 'a {
        self.records.iter().filter(move |record| record.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_and_filtered() {
        let mut log = RequestLog::new();
        for i in 0..RequestLog::MAX_RECORDS + 5 {
            let role = if i % 2 == 0 { "Main" } else { "Target" };
            log.push(RequestRecord::new(RequestPhase::ExtractConfigs, role, Some(i.to_string())));
        }

        assert_eq!(log.len(), RequestLog::MAX_RECORDS);
        assert_eq!(log.iter().next().and_then(|r| r.tenant_key.as_deref()), Some("5"));
        assert!(log.for_role("Target").all(|r| r.role == "Target"));
        assert_eq!(log.for_role("Main").count(), RequestLog::MAX_RECORDS / 2);
    }

    #[test]
    fn summary_names_endpoint() {
        let record = RequestRecord::new(RequestPhase::ExtractEntities, "Main", Some("0".into()));
        assert_eq!(record.summary(), "POST extract_entity_v2 tenant_key=0");

        let record = RequestRecord::new(RequestPhase::Migrate, "Target", None);
        assert_eq!(record.summary(), "POST migrate_settings_2_0 (no tenant)");
    }
}
