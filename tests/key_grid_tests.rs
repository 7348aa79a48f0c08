//! Integration tests for the per-key extraction grid layout.

use std::rc::Rc;

use tenant_migrate::layout::{
    CONTENT_SPAN, KeyGrid, KeyList, LogicalKey, SPACER_SPAN, Segment, SubView, build_segments,
};

fn keys(raw: &[&str]) -> KeyList {
    raw.iter().map(|k| LogicalKey::from(*k)).collect()
}

#[test]
fn test_two_segments_per_key_in_order() {
    for raw in [&[][..], &["Main"][..], &["Main", "Target", "Main", "Staging"][..]] {
        let list = keys(raw);
        let segments = build_segments(&list);

        assert_eq!(segments.len(), 2 * list.len());
        for (i, key) in list.iter().enumerate() {
            assert_eq!(segments[2 * i].key(), Some(key));
            assert_eq!(segments[2 * i + 1], Segment::Spacer { span: SPACER_SPAN });
        }
    }
}

#[test]
fn test_legacy_target_scenario() {
    let segments = build_segments(&keys(&["legacy", "target"]));

    assert_eq!(segments.len(), 4);
    assert_eq!(
        segments[0],
        Segment::Content {
            key: LogicalKey::new("legacy"),
            span: CONTENT_SPAN,
            views: [SubView::Configs, SubView::Entities, SubView::RequestLog],
        }
    );
    assert_eq!(segments[1], Segment::spacer());
    assert_eq!(segments[2].key().map(LogicalKey::as_str), Some("target"));
    assert_eq!(segments[3], Segment::spacer());
}

#[test]
fn test_duplicates_are_not_collapsed() {
    let segments = build_segments(&keys(&["Main", "Main"]));
    let contents: Vec<&str> =
        segments.iter().filter_map(Segment::key).map(LogicalKey::as_str).collect();
    assert_eq!(contents, vec!["Main", "Main"]);
}

#[test]
fn test_unchanged_list_reuses_segments() {
    let mut grid = KeyGrid::new();
    let list = keys(&["Main", "Target"]);

    let first = grid.segments(&list);
    let second = grid.segments(&list);
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(grid.generation(), 1);

    // A changed list rebuilds, and the result matches a fresh build.
    let changed = keys(&["Target"]);
    let rebuilt = grid.segments(&changed);
    assert!(!Rc::ptr_eq(&first, &rebuilt));
    assert_eq!(rebuilt.to_vec(), build_segments(&changed));
    assert_eq!(grid.generation(), 2);
}

#[test]
fn test_empty_list_yields_no_segments() {
    let mut grid = KeyGrid::new();
    assert!(grid.segments(&keys(&[])).is_empty());
}
