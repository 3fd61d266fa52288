//! Tag query mini-language
//!
//! A query is either a single `type=value` clause or exactly two clauses
//! joined by the literal operator ` AND ` or ` OR `. `AND` binds first: a
//! query containing ` AND ` is never read as an `OR` query.

use crate::Photo;

const AND: &str = " AND ";
const OR: &str = " OR ";

/// One `type=value` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagClause {
    pub tag_type: String,
    pub value: String,
}

impl TagClause {
    pub fn new(tag_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_type: tag_type.into(),
            value: value.into(),
        }
    }

    /// Case-insensitive match on both type and value.
    pub fn matches(&self, photo: &Photo) -> bool {
        photo.matches_tag(&self.tag_type, &self.value)
    }

    fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split('=');
        let tag_type = parts.next()?.trim();
        let value = parts.next()?.trim();
        if parts.next().is_some() || tag_type.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self::new(tag_type, value))
    }
}

/// A parsed tag query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagQuery {
    Single(TagClause),
    And(TagClause, TagClause),
    Or(TagClause, TagClause),
}

impl TagQuery {
    /// Parse a query, returning `None` for anything malformed.
    ///
    /// Malformed means blank input, a dangling operator, anything other
    /// than two operands around the operator, or a clause that is not
    /// exactly one `=` between a non-empty type and value.
    pub fn parse(input: &str) -> Option<Self> {
        let query = input.trim();
        if query.is_empty() || has_dangling_operator(query) {
            return None;
        }

        if query.contains(AND) {
            let (left, right) = split_pair(query, AND)?;
            Some(TagQuery::And(left, right))
        } else if query.contains(OR) {
            let (left, right) = split_pair(query, OR)?;
            Some(TagQuery::Or(left, right))
        } else {
            TagClause::parse(query).map(TagQuery::Single)
        }
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            TagQuery::Single(clause) => clause.matches(photo),
            TagQuery::And(a, b) => a.matches(photo) && b.matches(photo),
            TagQuery::Or(a, b) => a.matches(photo) || b.matches(photo),
        }
    }
}

fn split_pair(query: &str, op: &str) -> Option<(TagClause, TagClause)> {
    let parts: Vec<&str> = query.split(op).collect();
    let [left, right] = parts.as_slice() else {
        return None;
    };
    Some((TagClause::parse(left)?, TagClause::parse(right)?))
}

fn has_dangling_operator(query: &str) -> bool {
    ["AND", "OR"].iter().any(|op| {
        query == *op
            || query.ends_with(&format!(" {op}"))
            || query.starts_with(&format!("{op} "))
    })
}
