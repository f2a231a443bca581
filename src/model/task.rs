use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single planner task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Zero-based creation index, unique within a store
    pub id: usize,
    /// Task title text
    pub title: String,
    /// Scheduled date, if any
    pub date: Option<NaiveDate>,
    /// Name of the owning project (a copy, not a live reference)
    pub project: String,
    /// Whether the task has been checked off
    pub completed: bool,
}

impl Task {
    /// The date bucket this task falls into when grouped
    pub fn date_key(&self) -> DateKey {
        match self.date {
            Some(date) => DateKey::Scheduled(date),
            None => DateKey::Unscheduled,
        }
    }
}

/// A date bucket: a concrete calendar date or the "No Date" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKey {
    Scheduled(NaiveDate),
    Unscheduled,
}

impl DateKey {
    /// Long-form heading for a date group, e.g. `Monday, January 15, 2024`.
    /// The sentinel renders as `No Date`.
    pub fn heading(&self) -> String {
        match self {
            DateKey::Scheduled(date) => date.format("%A, %B %-d, %Y").to_string(),
            DateKey::Unscheduled => "No Date".to_string(),
        }
    }
}

impl fmt::Display for DateKey {
    /// ISO form, e.g. `2024-03-05`; the sentinel renders as `No Date`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKey::Scheduled(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateKey::Unscheduled => write!(f, "No Date"),
        }
    }
}

/// Concrete dates ascend chronologically; the sentinel sorts after every
/// concrete date.
impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DateKey::Scheduled(a), DateKey::Scheduled(b)) => a.cmp(b),
            (DateKey::Scheduled(_), DateKey::Unscheduled) => Ordering::Less,
            (DateKey::Unscheduled, DateKey::Scheduled(_)) => Ordering::Greater,
            (DateKey::Unscheduled, DateKey::Unscheduled) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
