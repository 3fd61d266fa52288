//! Date range search

use super::{names, setup_library};
use crate::helpers::*;

#[test]
fn test_range_is_inclusive() {
    let (_dir, store, _clock) = setup_library();
    let found = store.search_by_date(Some(date(2)), Some(date(4))).unwrap();
    assert_eq!(names(&found), vec!["p2.jpg"]);

    let found = store.search_by_date(Some(date(1)), Some(date(5))).unwrap();
    assert_eq!(names(&found), vec!["p1.jpg", "p2.jpg", "p3.jpg"]);
}

#[test]
fn test_single_day_range() {
    let (_dir, store, _clock) = setup_library();
    let found = store.search_by_date(Some(date(5)), Some(date(5))).unwrap();
    assert_eq!(names(&found), vec!["p3.jpg"]);
}

#[test]
fn test_missing_bound_finds_nothing() {
    let (_dir, store, _clock) = setup_library();
    assert!(store.search_by_date(None, Some(date(5))).unwrap().is_empty());
    assert!(store.search_by_date(Some(date(1)), None).unwrap().is_empty());
}

#[test]
fn test_inverted_range_finds_nothing() {
    let (_dir, store, _clock) = setup_library();
    assert!(store.search_by_date(Some(date(5)), Some(date(1))).unwrap().is_empty());
}

#[test]
fn test_search_needs_a_session() {
    let (_dir, mut store, _clock) = setup_library();
    store.logout();
    let err = store.search_by_date(Some(date(1)), Some(date(5))).unwrap_err();
    assert!(err.is_permission_denied());
}
