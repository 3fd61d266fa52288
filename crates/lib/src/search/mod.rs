//! Searching a user's photos
//!
//! Both query modes walk every album of one user and return each matching
//! photo once, in the order it is first seen.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{Photo, User};

pub mod query;

pub use query::{TagClause, TagQuery};

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range only when both bounds are given.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        Some(Self::new(start?, end?))
    }

    /// Whether the photo's day falls within the range, ends included.
    pub fn contains(&self, photo: &Photo) -> bool {
        let day = photo.taken_on();
        self.start <= day && day <= self.end
    }
}

/// Photos taken within `range`.
pub fn by_date<'a>(user: &'a User, range: &DateRange) -> Vec<&'a Photo> {
    matching(user, |photo| range.contains(photo))
}

/// Photos satisfying a parsed tag query.
pub fn by_tags<'a>(user: &'a User, query: &TagQuery) -> Vec<&'a Photo> {
    matching(user, |photo| query.matches(photo))
}

/// Photos satisfying a raw tag query string. Malformed queries match nothing.
pub fn by_tag_query<'a>(user: &'a User, query: &str) -> Vec<&'a Photo> {
    match TagQuery::parse(query) {
        Some(parsed) => by_tags(user, &parsed),
        None => {
            tracing::debug!(query, "Ignoring malformed tag query");
            Vec::new()
        }
    }
}

fn matching<'a>(user: &'a User, mut pred: impl FnMut(&Photo) -> bool) -> Vec<&'a Photo> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for photo in user.photos() {
        if pred(photo) && seen.insert(photo.path()) {
            found.push(photo);
        }
    }
    found
}
