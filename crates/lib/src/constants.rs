//! Constants used throughout the Photoroll library.
//!
//! This module provides central definitions for on-disk names, the reserved
//! account names, and the stock photo set provisioned on first run.

/// Default directory holding the snapshot file, relative to the working directory.
pub const DATA_DIR: &str = "data";

/// Default snapshot file name inside the data directory.
pub const SNAPSHOT_FILE: &str = "users.json";

/// Reserved username of the administrative account.
pub const ADMIN_USERNAME: &str = "admin";

/// Reserved username of the preseeded stock account.
pub const STOCK_USERNAME: &str = "stock";

/// Name of the album created for the stock account on first run.
pub const STOCK_ALBUM: &str = "stock";

/// Files offered to the stock album on first run, relative to the working directory.
pub const STOCK_PHOTOS: &[&str] = &[
    "stock/stock1.jpg",
    "stock/stock2.jpg",
    "stock/stock3.jpg",
    "stock/stock4.png",
    "stock/stock5.png",
];
