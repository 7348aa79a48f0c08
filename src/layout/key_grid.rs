use std::fmt;
use std::rc::Rc;

use crate::state::memo::Memo;

/// Columns in one grid row.
pub const GRID_COLUMNS: u16 = 12;
/// Columns taken by a key's content segment.
pub const CONTENT_SPAN: u16 = 5;
/// Columns taken by the spacer after each content segment.
pub const SPACER_SPAN: u16 = 1;

/// Opaque identifier of one migratable configuration domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalKey(String);

impl LogicalKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogicalKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LogicalKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Shared, ordered key list. Duplicates are kept.
pub type KeyList = Rc<[LogicalKey]>;

/// Sub-views stacked inside every content segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubView {
    Configs,
    Entities,
    RequestLog,
}

impl SubView {
    /// Top-to-bottom order inside a content segment.
    pub const ORDER: [SubView; 3] = [SubView::Configs, SubView::Entities, SubView::RequestLog];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Content { key: LogicalKey, span: u16, views: [SubView; 3] },
    Spacer { span: u16 },
}

impl Segment {
    pub fn content(key: LogicalKey) -> Self {
        Segment::Content { key, span: CONTENT_SPAN, views: SubView::ORDER }
    }

    pub fn spacer() -> Self {
        Segment::Spacer { span: SPACER_SPAN }
    }

    pub fn key(&self) -> Option<&LogicalKey> {
        match self {
            Segment::Content { key, .. } => Some(key),
            Segment::Spacer { .. } => None,
        }
    }

    pub fn span(&self) -> u16 {
        match self {
            Segment::Content { span, .. } | Segment::Spacer { span } => *span,
        }
    }
}

/// Fan `keys` out into one content segment plus one spacer per key, in input order.
pub fn build_segments(keys: &[LogicalKey]) -> Vec<Segment> {
    keys.iter().flat_map(|key| [Segment::content(key.clone()), Segment::spacer()]).collect()
}

/// Cache key comparing lists by pointer first, then by content.
#[derive(Clone)]
struct ListKey(KeyList);

impl PartialEq for ListKey {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

/// Memoized [`build_segments`].
///
/// Hands back the same `Rc` for as long as the key list is unchanged.
#[derive(Default)]
pub struct KeyGrid {
    memo: Memo<ListKey, Rc<[Segment]>>,
    generation: u64,
}

impl KeyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&mut self, keys: &KeyList) -> Rc<[Segment]> {
        let generation = &mut self.generation;
        self.memo
            .get_or_insert_with(&ListKey(keys.clone()), |ListKey(keys)| {
                *generation += 1;
                log::debug!("rebuilding key grid for {} keys", keys.len());
                build_segments(keys).into()
            })
            .clone()
    }

    /// Number of times the segment list has been rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> KeyList {
        raw.iter().map(|k| LogicalKey::from(*k)).collect()
    }

    #[test]
    fn spacers_follow_every_key() {
        let segments = build_segments(&keys(&["legacy", "target"]));

        assert_eq!(
            segments,
            vec![
                Segment::content("legacy".into()),
                Segment::spacer(),
                Segment::content("target".into()),
                Segment::spacer(),
            ]
        );
        assert_eq!(segments.iter().map(Segment::span).sum::<u16>(), GRID_COLUMNS);
    }

    #[test]
    fn equal_lists_reuse_segments() {
        let mut grid = KeyGrid::new();
        let first = grid.segments(&keys(&["Main", "Target"]));
        let second = grid.segments(&keys(&["Main", "Target"]));

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(grid.generation(), 1);

        let third = grid.segments(&keys(&["Target"]));
        assert_eq!(third.len(), 2);
        assert_eq!(grid.generation(), 2);
    }
}
