//! Per-key grid layout for the extraction panel.

pub mod key_grid;

pub use key_grid::{
    CONTENT_SPAN, GRID_COLUMNS, KeyGrid, KeyList, LogicalKey, SPACER_SPAN, Segment, SubView,
    build_segments,
};
