//! Extraction panel: tenant header followed by one column per grid key.

mod helpers;
mod sub_views;

use std::rc::Rc;

use gpui::*;

use crate::components::MigrateButton;
use crate::layout::{GRID_COLUMNS, KeyGrid, LogicalKey, Segment, SubView};
use crate::state::{AppState, PhaseSpecs, RequestPhase};
use crate::theme::spacing;
use crate::views::TenantMigrationSelector;

pub use sub_views::{ExtractConfigs, ExtractEntities, RequestsInfo};

/// Triggers owned by one content segment.
struct ColumnTriggers {
    configs: Entity<MigrateButton>,
    entities: Entity<MigrateButton>,
}

/// A rendered grid segment; content cells own their triggers.
enum GridCell {
    Content { key: LogicalKey, span: u16, views: [SubView; 3], triggers: ColumnTriggers },
    Spacer { span: u16 },
}

pub struct ExtractionPanel {
    state: Entity<AppState>,
    specs: PhaseSpecs,
    grid: KeyGrid,
    segments: Rc<[Segment]>,
    // Built from `segments`, one cell per segment
    cells: Vec<GridCell>,
    _subscriptions: Vec<Subscription>,
}

impl ExtractionPanel {
    pub fn new(state: Entity<AppState>, specs: PhaseSpecs, cx: &mut Context<Self>) -> Self {
        let subscription = cx.observe(&state, |_, _, cx| cx.notify());
        Self {
            state,
            specs,
            grid: KeyGrid::new(),
            segments: Rc::from(Vec::new()),
            cells: Vec::new(),
            _subscriptions: vec![subscription],
        }
    }

    /// Pull the current segments, rebuilding cells only when the grid changed.
    fn sync_segments(&mut self, cx: &mut Context<Self>) {
        let keys = self.state.read(cx).grid_keys().clone();
        let segments = self.grid.segments(&keys);
        if Rc::ptr_eq(&segments, &self.segments) {
            return;
        }

        self.cells = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| match segment {
                Segment::Content { key, span, views } => GridCell::Content {
                    key: key.clone(),
                    span: *span,
                    views: *views,
                    triggers: self.column_triggers(index, key, cx),
                },
                Segment::Spacer { span } => GridCell::Spacer { span: *span },
            })
            .collect();
        self.segments = segments;
    }

    fn column_triggers(
        &self,
        index: usize,
        key: &LogicalKey,
        cx: &mut Context<Self>,
    ) -> ColumnTriggers {
        let make = |phase: RequestPhase, cx: &mut Context<Self>| {
            let spec = self.specs.bind(phase, self.state.clone(), key.as_str());
            let state = self.state.clone();
            let id = format!("{}-{}-{}", phase.endpoint(), key, index);
            cx.new(|cx| MigrateButton::new(id, spec, state, cx))
        };

        ColumnTriggers {
            configs: make(RequestPhase::ExtractConfigs, cx),
            entities: make(RequestPhase::ExtractEntities, cx),
        }
    }

    fn render_content(
        &self,
        key: &LogicalKey,
        span: u16,
        views: &[SubView; 3],
        triggers: &ColumnTriggers,
        cx: &App,
    ) -> AnyElement {
        let state = self.state.read(cx);
        let tenant_label = state.tenants().label(key.as_str());
        let show_requests = state.settings.appearance.show_request_log;

        let children = views.iter().map(|view| match view {
            SubView::Configs => ExtractConfigs::new(
                key.clone(),
                tenant_label.clone(),
                triggers.configs.clone(),
            )
            .into_any_element(),
            SubView::Entities => {
                ExtractEntities::new(key.clone(), triggers.entities.clone()).into_any_element()
            }
            SubView::RequestLog => RequestsInfo::new(
                key.clone(),
                state.requests.for_role(key.as_str()).cloned().collect(),
                show_requests,
            )
            .into_any_element(),
        });

        div()
            .w(column_width(span))
            .flex()
            .flex_col()
            .gap(spacing::sm())
            .children(children.collect::<Vec<_>>())
            .into_any_element()
    }
}

fn column_width(span: u16) -> DefiniteLength {
    relative(span as f32 / GRID_COLUMNS as f32)
}

impl Render for ExtractionPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_segments(cx);

        let cells: Vec<AnyElement> = self
            .cells
            .iter()
            .map(|cell| match cell {
                GridCell::Content { key, span, views, triggers } => {
                    self.render_content(key, *span, views, triggers, cx)
                }
                GridCell::Spacer { span } => div().w(column_width(*span)).into_any_element(),
            })
            .collect();

        div()
            .flex()
            .flex_col()
            .gap(spacing::md())
            .child(TenantMigrationSelector::new(self.state.clone()))
            .child(div().flex().flex_wrap().w_full().children(cells))
    }
}
