//! Search query and result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which entity a search hit belongs to; drives result grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Branch,
    Coach,
    Course,
    Student,
    Payment,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Branch => "Branches",
            EntityKind::Coach => "Coaches",
            EntityKind::Course => "Courses",
            EntityKind::Student => "Students",
            EntityKind::Payment => "Payments",
        }
    }
}

/// One text query, stamped so superseded queries can be reasoned about
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub issued_at: DateTime<Utc>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            issued_at: Utc::now(),
        }
    }
}

/// One hit in the aggregate search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

/// The aggregate search response for one query.
///
/// `total_results` counts all matches on the backend and may exceed the
/// number of items actually returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultSet {
    pub items: Vec<SearchResult>,
    pub total_results: usize,
    pub query: String,
}

impl SearchResultSet {
    /// Build a result set, repairing a total smaller than the item count
    /// (the invariant is `items.len() <= total_results`).
    pub fn new(query: impl Into<String>, items: Vec<SearchResult>, total_results: usize) -> Self {
        let total_results = total_results.max(items.len());
        Self {
            items,
            total_results,
            query: query.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items capped to the panel's display limit; the total stays
    /// the backend's full count.
    pub fn display_items(&self, limit: usize) -> &[SearchResult] {
        &self.items[..self.items.len().min(limit)]
    }

    /// Results grouped by entity kind, in kind order
    pub fn grouped(&self) -> BTreeMap<EntityKind, Vec<&SearchResult>> {
        let mut groups: BTreeMap<EntityKind, Vec<&SearchResult>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.kind).or_default().push(item);
        }
        groups
    }
}
