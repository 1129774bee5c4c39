//! Shared data models for the Utility Assistant front-end.
//!
//! This crate provides Serde-serializable types for:
//! - The feature catalog (news verification, text reader, wound
//!   classification, object identification)
//! - News credibility requests and verdicts
//! - Wound classification reports
//! - The in-memory recent-activity feed
//!
//! It also hosts the pure display transforms: label aggregation
//! ([`summary`]) and speech narration ([`narration`]).

pub mod activity;
pub mod feature;
pub mod narration;
pub mod news;
pub mod summary;
pub mod wound;

// Re-export common types
pub use activity::{ActivityEntry, ActivityLog};
pub use feature::{Feature, FeatureParseError};
pub use narration::{narrate_record, narrate_report};
pub use news::{CredibilityReport, NewsArticle};
pub use summary::{format_label_count, label_counts, summarize_labels, NO_OBJECTS_DETECTED};
pub use wound::{DetectionRecord, WoundReport};
