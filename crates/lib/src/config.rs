//! Store configuration
//!
//! Where the snapshot lives and what the stock account is seeded with.

use std::path::{Path, PathBuf};

use crate::constants::{DATA_DIR, SNAPSHOT_FILE, STOCK_ALBUM, STOCK_PHOTOS};

/// Configuration for [`crate::UserStore`].
///
/// # Example
///
/// ```
/// use photoroll::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/photoroll").with_stock_photos(Vec::<&str>::new());
/// assert_eq!(config.snapshot_path(), std::path::Path::new("/tmp/photoroll/users.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the snapshot; created on open if missing.
    pub data_dir: PathBuf,
    /// Snapshot file name inside `data_dir`.
    pub snapshot_file: String,
    /// Album created for the stock account on first run.
    pub stock_album: String,
    /// Files offered to the stock album. Missing files are skipped.
    pub stock_photos: Vec<PathBuf>,
}

impl StoreConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_snapshot_file(mut self, name: impl Into<String>) -> Self {
        self.snapshot_file = name.into();
        self
    }

    pub fn with_stock_album(mut self, name: impl Into<String>) -> Self {
        self.stock_album = name.into();
        self
    }

    pub fn with_stock_photos<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.stock_photos = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Full path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            snapshot_file: SNAPSHOT_FILE.to_string(),
            stock_album: STOCK_ALBUM.to_string(),
            stock_photos: STOCK_PHOTOS.iter().map(PathBuf::from).collect(),
        }
    }
}
