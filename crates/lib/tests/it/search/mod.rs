//! Search integration tests
//!
//! Every test works on the same three photos owned by `alice`:
//!
//! | photo  | day | albums       | tags                     |
//! |--------|-----|--------------|--------------------------|
//! | p1.jpg | 1   | trip         | color=red                |
//! | p2.jpg | 3   | trip, best   | color=Red, size=large    |
//! | p3.jpg | 5   | best         | size=LARGE               |

mod date_tests;
mod tag_tests;

use std::sync::Arc;

use photoroll::{FixedClock, Photo, UserStore};
use tempfile::TempDir;

use crate::helpers::*;

pub(crate) fn setup_library() -> (TempDir, UserStore, Arc<FixedClock>) {
    let (dir, mut store, clock) = setup_session("alice");
    let p1 = add_photo_on(&mut store, &clock, &dir, "trip", "p1.jpg", 1);
    let p2 = add_photo_on(&mut store, &clock, &dir, "trip", "p2.jpg", 3);
    let p3 = add_photo_on(&mut store, &clock, &dir, "best", "p3.jpg", 5);
    store.copy_photo("trip", &p2, "best").unwrap();

    store.add_tag(&p1, "color", "red").unwrap();
    store.add_tag(&p2, "color", "Red").unwrap();
    store.add_tag(&p2, "size", "large").unwrap();
    store.add_tag(&p3, "size", "LARGE").unwrap();
    (dir, store, clock)
}

pub(crate) fn names(photos: &[Photo]) -> Vec<&str> {
    photos.iter().map(Photo::display_name).collect()
}
