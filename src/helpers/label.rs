//! Display labels for tenants.

use crate::models::TenantRecord;

/// Build the display label for the tenant playing `role`.
///
/// Produces `"{role} #{key}: {label} ({url})"`. Any part that is missing or blank is dropped,
/// so a tenant that has not resolved yet still yields a usable (partial) label.
pub fn tenant_label(record: Option<&TenantRecord>, key: Option<&str>, role: &str) -> String {
    let mut out = role.trim().to_string();

    if let Some(key) = non_blank(key) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push('#');
        out.push_str(key);
    }

    let Some(record) = record else {
        return out;
    };

    let name = non_blank(Some(record.label.as_str()));
    let url = non_blank(Some(record.url.as_str()));
    if name.is_none() && url.is_none() {
        return out;
    }

    if !out.is_empty() {
        out.push_str(": ");
    }
    match (name, url) {
        (Some(name), Some(url)) => {
            out.push_str(name);
            out.push_str(" (");
            out.push_str(url);
            out.push(')');
        }
        (Some(name), None) => out.push_str(name),
        (None, Some(url)) => out.push_str(url),
        (None, None) => {}
    }
    out
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_label() {
        let record = TenantRecord::new("Target", "https://abc.live.example");
        assert_eq!(
            tenant_label(Some(&record), Some("1"), "Target"),
            "Target #1: Target (https://abc.live.example)"
        );
    }

    #[test]
    fn unresolved_record_keeps_role_and_key() {
        assert_eq!(tenant_label(None, Some("1"), "Target"), "Target #1");
        assert_eq!(tenant_label(None, None, "Target"), "Target");
        assert_eq!(tenant_label(None, Some("  "), ""), "");
    }

    #[test]
    fn blank_fields_are_dropped() {
        let mut record = TenantRecord::new("", "https://abc.live.example");
        assert_eq!(
            tenant_label(Some(&record), None, "Target"),
            "Target: https://abc.live.example"
        );

        record.url = " ".to_string();
        assert_eq!(tenant_label(Some(&record), None, "Target"), "Target");
    }
}
