//! Photos: the leaf of the data graph
//!
//! A [`Photo`] is a reference to an image file plus the user-editable
//! metadata attached to it. Its file path is its identity: two photos with
//! the same path are the same logical photo wherever they appear.

use std::{
    collections::BTreeMap,
    hash::{Hash, Hasher},
    path::Path,
};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::Clock;

pub mod errors;

pub use errors::PhotoError;

/// A photo file with its caption, timestamp, and tags.
///
/// Equality and hashing consider only the file path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    path: String,
    #[serde(default)]
    caption: String,
    taken_at: NaiveDateTime,
    /// Tag type -> tag value; at most one value per type.
    #[serde(default)]
    tags: BTreeMap<String, String>,
}

impl Photo {
    /// Create a photo with an empty caption and no tags.
    pub fn new(path: impl Into<String>, taken_at: NaiveDateTime) -> Self {
        Self {
            path: path.into(),
            caption: String::new(),
            taken_at,
            tags: BTreeMap::new(),
        }
    }

    /// Create a photo stamped with the clock's current time.
    pub fn added_now(path: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::new(path, clock.now())
    }

    /// The file path identifying this photo.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// When the photo was taken.
    pub fn taken_at(&self) -> NaiveDateTime {
        self.taken_at
    }

    /// The calendar day the photo was taken, used for date searches.
    pub fn taken_on(&self) -> NaiveDate {
        self.taken_at.date()
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Set a tag, replacing any existing value of the same type.
    ///
    /// Returns the replaced value, if any.
    pub fn add_tag(&mut self, tag_type: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.tags.insert(tag_type.into(), value.into())
    }

    /// Remove the tag of the given type. Returns true if one was present.
    pub fn remove_tag(&mut self, tag_type: &str) -> bool {
        self.tags.remove(tag_type).is_some()
    }

    pub fn has_tag(&self, tag_type: &str) -> bool {
        self.tags.contains_key(tag_type)
    }

    pub fn tag_value(&self, tag_type: &str) -> Option<&str> {
        self.tags.get(tag_type).map(String::as_str)
    }

    /// Whether any tag matches `tag_type` and `value`, ignoring case on both.
    pub fn matches_tag(&self, tag_type: &str, value: &str) -> bool {
        self.tags
            .iter()
            .any(|(t, v)| eq_ignore_case(t, tag_type) && eq_ignore_case(v, value))
    }

    /// Caption if set, otherwise the file name.
    pub fn display_name(&self) -> &str {
        if !self.caption.is_empty() {
            return &self.caption;
        }
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path)
    }

    /// Field-by-field comparison, unlike `==` which compares paths only.
    pub fn same_contents(&self, other: &Photo) -> bool {
        self.path == other.path
            && self.caption == other.caption
            && self.taken_at == other.taken_at
            && self.tags == other.tags
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
