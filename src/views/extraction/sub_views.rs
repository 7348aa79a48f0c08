//! Per-key sub-views stacked inside each extraction column.

use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::components::MigrateButton;
use crate::layout::LogicalKey;
use crate::state::RequestRecord;
use crate::theme::spacing;

use super::helpers::{note, panel};

/// Most recent requests shown per key.
const REQUESTS_SHOWN: usize = 8;

#[derive(IntoElement)]
pub struct ExtractConfigs {
    key: LogicalKey,
    tenant_label: String,
    trigger: Entity<MigrateButton>,
}

impl ExtractConfigs {
    pub fn new(key: LogicalKey, tenant_label: String, trigger: Entity<MigrateButton>) -> Self {
        Self { key, tenant_label, trigger }
    }
}

impl RenderOnce for ExtractConfigs {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        panel(
            format!("{} configuration", self.key),
            div().flex().flex_col().child(note(self.tenant_label, cx)).child(self.trigger),
            cx,
        )
    }
}

#[derive(IntoElement)]
pub struct ExtractEntities {
    key: LogicalKey,
    trigger: Entity<MigrateButton>,
}

impl ExtractEntities {
    pub fn new(key: LogicalKey, trigger: Entity<MigrateButton>) -> Self {
        Self { key, trigger }
    }
}

impl RenderOnce for ExtractEntities {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        panel(format!("{} entities", self.key), div().child(self.trigger), cx)
    }
}

#[derive(IntoElement)]
pub struct RequestsInfo {
    key: LogicalKey,
    records: Vec<RequestRecord>,
    expanded: bool,
}

impl RequestsInfo {
    /// `records` are oldest first; only the latest few are listed.
    pub fn new(key: LogicalKey, records: Vec<RequestRecord>, expanded: bool) -> Self {
        Self { key, records, expanded }
    }
}

impl RenderOnce for RequestsInfo {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let title = format!("{} requests ({})", self.key, self.records.len());

        if self.records.is_empty() {
            return panel(title, note("No requests issued yet", cx), cx);
        }
        if !self.expanded {
            return panel(title, note("Request log hidden in settings", cx), cx);
        }

        let rows = self.records.iter().rev().take(REQUESTS_SHOWN).map(|record| {
            div()
                .flex()
                .gap(spacing::sm())
                .text_xs()
                .child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child(record.issued_at.format("%H:%M:%S").to_string()),
                )
                .child(div().text_color(cx.theme().foreground).child(record.summary()))
        });

        panel(title, div().flex().flex_col().gap(spacing::xs()).children(rows), cx)
    }
}
