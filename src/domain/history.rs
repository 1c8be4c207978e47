/// Bounded, date-ordered log of archived daily records
///
/// The history log backs trend charts and achievement evaluation. It keeps at
/// most `cap` entries per category, evicting the earliest-dated entry once the
/// cap is exceeded. Re-recording an existing date replaces that entry in
/// place, so no two entries ever share a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::record::{schema_version_field, DailyRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    #[serde(default = "schema_version_field")]
    version: u32,
    #[serde(default)]
    entries: Vec<DailyRecord>,
    /// Retention cap; not persisted, supplied by category config on load.
    /// A cap of 0 means unbounded.
    #[serde(skip)]
    cap: usize,
}

impl HistoryLog {
    /// Create an empty log with the given retention cap
    pub fn new(cap: usize) -> Self {
        Self {
            version: schema_version_field(),
            entries: Vec::new(),
            cap,
        }
    }

    /// Set the retention cap, trimming immediately if already over it
    ///
    /// Called after deserialization, since the cap lives in configuration
    /// rather than in the persisted value.
    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap;
        self.enforce_cap();
    }

    /// Insert or replace the entry for `record.date`
    ///
    /// Same-date entries are updated in place; new dates are appended and the
    /// log re-sorted ascending by date. Oldest entries are evicted until the
    /// log is within its cap.
    pub fn upsert(&mut self, record: DailyRecord) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.date == record.date) {
            *existing = record;
        } else {
            self.entries.push(record);
            self.entries.sort_by_key(|e| e.date);
        }
        self.enforce_cap();
    }

    /// Entries ascending by date, ready for chart rendering
    pub fn list(&self) -> &[DailyRecord] {
        &self.entries
    }

    /// Whether an entry exists for the given date
    pub fn exists(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date == date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn enforce_cap(&mut self) {
        if self.cap == 0 {
            return;
        }
        while self.entries.len() > self.cap {
            self.entries.remove(0);
        }
    }
}
