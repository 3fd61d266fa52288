//! Tag query search

use super::{names, setup_library};

#[test]
fn test_single_clause_ignores_case() {
    let (_dir, store, _clock) = setup_library();
    let found = store.search_by_tags("color=RED").unwrap();
    assert_eq!(names(&found), vec!["p1.jpg", "p2.jpg"]);
}

#[test]
fn test_and_requires_both() {
    let (_dir, store, _clock) = setup_library();
    let found = store.search_by_tags("color=red AND size=large").unwrap();
    assert_eq!(names(&found), vec!["p2.jpg"]);
}

#[test]
fn test_or_accepts_either_once() {
    let (_dir, store, _clock) = setup_library();
    let found = store.search_by_tags(" color=red OR size=large ").unwrap();
    // p2 sits in two albums but is reported once
    assert_eq!(names(&found), vec!["p1.jpg", "p2.jpg", "p3.jpg"]);
}

#[test]
fn test_malformed_queries_find_nothing() {
    let (_dir, store, _clock) = setup_library();
    for query in [
        "",
        "   ",
        "color",
        "color=",
        "=red",
        "color=red AND",
        "OR size=large",
        "color=red AND size=large AND size=small",
    ] {
        assert!(
            store.search_by_tags(query).unwrap().is_empty(),
            "query {query:?} matched"
        );
    }
}

#[test]
fn test_search_is_scoped_to_session_user() {
    let (_dir, mut store, _clock) = setup_library();
    store.create("bob");
    store.login("bob");
    assert!(store.search_by_tags("color=red").unwrap().is_empty());
}
