//! Keyword-based symptom checking: catalogs, matching, and report assembly.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod report;

pub use catalog::{Catalog, ConditionEntry, RedFlagEntry};
pub use config::Config;
pub use error::*;
pub use matcher::{detect_red_flags, match_conditions, MatchResult};
pub use report::{check, CheckReport, ConditionSummary, DISCLAIMERS, FALLBACK_NAME};
