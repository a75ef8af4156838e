//! Request parameter types for the schedule API.

use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Page size used when no explicit offset is supplied.
const DEFAULT_LIMIT: i64 = 100;

/// Lookup selector for group and teacher queries.
///
/// Replaces runtime type dispatch with an exhaustive union: a query is
/// always exactly one of a numeric ID lookup, a free-text name search, or
/// a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Fetch a single record (and its companion routes) by numeric ID.
    ById(i64),
    /// Free-text name search against the collection.
    ByName(String),
    /// Paginated listing of the collection.
    Listing {
        /// Pagination offset.
        offset: i64,
    },
}

impl Default for Selector {
    fn default() -> Self {
        Self::Listing { offset: 0 }
    }
}

/// Pagination and lesson filter, sent as the single `filter` query
/// parameter with a JSON-encoded value.
///
/// `offset` and `limit` are always present; the lesson fields are omitted
/// when unset. Struct field order is the emitted JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Pagination offset.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
    /// Day of week (documented range 1-7, not validated here).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<i64>,
    /// Lesson slot (documented range 1-5, not validated here).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_number: Option<i64>,
    /// Study week (documented values 1 and 2, not validated here).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_week: Option<i64>,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterParams {
    /// Creates the default filter: offset 0, limit 100.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            day_number: None,
            lesson_number: None,
            lesson_week: None,
        }
    }

    /// Creates a filter for a listing page.
    ///
    /// With an explicit offset the service bindings send `limit` equal to
    /// that offset, not the fixed default of 100.
    #[must_use]
    pub const fn with_offset(offset: i64) -> Self {
        Self {
            offset,
            limit: offset,
            day_number: None,
            lesson_number: None,
            lesson_week: None,
        }
    }

    /// Creates a filter from lesson lookup options.
    ///
    /// A field equal to zero counts as not provided and is omitted.
    #[must_use]
    pub fn for_lessons(filter: &LessonFilter) -> Self {
        Self {
            day_number: nonzero(filter.day_number),
            lesson_number: nonzero(filter.lesson_number),
            lesson_week: nonzero(filter.lesson_week),
            ..Self::new()
        }
    }

    /// Builds the single `filter` query pair.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Json`] if JSON encoding fails.
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, ScheduleError> {
        Ok(vec![("filter", serde_json::to_string(self)?)])
    }
}

/// Optional lesson lookup fields for `group_lessons`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessonFilter {
    /// Day of week (documented range 1-7).
    pub day_number: Option<i64>,
    /// Lesson slot (documented range 1-5).
    pub lesson_number: Option<i64>,
    /// Study week (documented values 1 and 2).
    pub lesson_week: Option<i64>,
}

/// Free-text search, sent as the single `search` query parameter with a
/// JSON-encoded value. A request carries either a search query or filter
/// parameters, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Search text, matched by the service against record names.
    pub query: String,
}

impl SearchQuery {
    /// Creates a new search query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Builds the single `search` query pair.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Json`] if JSON encoding fails.
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, ScheduleError> {
        Ok(vec![("search", serde_json::to_string(self)?)])
    }
}

/// Treats zero as "not provided".
fn nonzero(value: Option<i64>) -> Option<i64> {
    value.filter(|&v| v != 0)
}
