//! Recent-activity feed.
//!
//! In-memory only: entries live for the duration of the session and back
//! the dashboard's "Recent Activity" panel.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feature::Feature;

/// One completed submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActivityEntry {
    pub id: String,
    pub feature: Feature,
    /// One-line result summary
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(feature: Feature, summary: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            feature,
            summary: summary.into(),
            created_at: Utc::now(),
        }
    }
}

/// Capped, newest-first list of activity entries.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a completed submission, evicting the oldest entry when full.
    pub fn record(&mut self, feature: Feature, summary: impl Into<String>) -> &ActivityEntry {
        self.entries.insert(0, ActivityEntry::new(feature, summary));
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    /// Entries, newest first.
    pub fn recent(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(20)
    }
}
