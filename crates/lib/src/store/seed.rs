//! First-run provisioning of the stock album.

use super::index::photo_key;
use crate::{Album, Clock, Photo, StoreConfig};

/// Build the stock album from the configured files that exist on disk.
///
/// Paths are resolved against the working directory and stored absolute.
/// Files that are missing are skipped; the rest are dated by `clock`.
pub(crate) fn stock_album(config: &StoreConfig, clock: &dyn Clock) -> Album {
    let mut album = Album::new(config.stock_album.clone());
    for path in &config.stock_photos {
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "Stock photo not found, skipping");
            continue;
        }
        album.add_photo(Photo::added_now(photo_key(path), clock));
    }
    tracing::info!(
        album = album.name(),
        photos = album.photo_count(),
        "Seeded stock album"
    );
    album
}
