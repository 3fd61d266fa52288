//! Shared helpers for Photoroll integration tests
//!
//! Every store is rooted in its own temporary directory and driven by a
//! [`FixedClock`], so photo dates are known and tests never share state.

#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime};
use photoroll::{FixedClock, StoreConfig, UserStore};
use tempfile::TempDir;

// ===== TIME HELPERS =====

/// Noon on the given day of January 2024.
pub fn jan(day: u32) -> NaiveDateTime {
    date(day).and_hms_opt(12, 0, 0).expect("valid time")
}

/// The given day of January 2024.
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

// ===== STORE SETUP HELPERS =====

/// A store in a fresh temporary directory with no stock files.
///
/// Returns the directory guard alongside the store; dropping it removes
/// the snapshot.
pub fn setup_store() -> (TempDir, UserStore, Arc<FixedClock>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let clock = Arc::new(FixedClock::new(jan(1)));
    let store = UserStore::open_with_clock(config_for(&dir), clock.clone());
    (dir, store, clock)
}

/// Configuration rooted at `dir` with an empty stock photo list.
pub fn config_for(dir: &TempDir) -> StoreConfig {
    StoreConfig::new(dir.path()).with_stock_photos(Vec::<PathBuf>::new())
}

/// Reopen a store over an existing directory, as after a restart.
pub fn reopen(dir: &TempDir, clock: Arc<FixedClock>) -> UserStore {
    UserStore::open_with_clock(config_for(dir), clock)
}

/// A store with `username` created and logged in.
pub fn setup_session(username: &str) -> (TempDir, UserStore, Arc<FixedClock>) {
    let (dir, mut store, clock) = setup_store();
    assert!(store.create(username), "Failed to create user");
    assert!(store.login(username), "Failed to login user");
    (dir, store, clock)
}

// ===== PHOTO HELPERS =====

/// Path of a (not necessarily existing) file inside the test directory.
pub fn photo_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Add a photo dated `day` to `album`, creating the album if needed.
///
/// The photo takes the clock's time, set to `day` just before adding.
pub fn add_photo_on(
    store: &mut UserStore,
    clock: &FixedClock,
    dir: &TempDir,
    album: &str,
    name: &str,
    day: u32,
) -> String {
    let has_album = store
        .current_user()
        .map(|u| u.album(album).is_some())
        .unwrap_or(false);
    if !has_album {
        store.create_album(album).expect("Failed to create album");
    }
    clock.set(jan(day));
    store
        .add_photo(album, photo_path(dir, name))
        .expect("Failed to add photo")
        .path()
        .to_string()
}
