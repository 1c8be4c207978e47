/// DailyMetricLedger: one metric stream's running day plus its archive
///
/// The ledger owns "today's" record for one category, accumulates samples
/// into it, and lazily rolls the record into the history log when the
/// caller-supplied wall clock crosses a date boundary. There is no background
/// timer; rollover is evaluated on every read and write so a stale total is
/// never returned.
///
/// Rollover archives only the single stored day. Days on which the app was
/// never opened leave gaps in the history rather than synthesized zero
/// entries, matching the product's observed behavior.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{Category, DailyRecord, DailySample, HistoryLog};
use crate::storage::{keys, KeyValueStore, StorageError};
use crate::CoreError;

pub struct DailyMetricLedger {
    category: Category,
    /// `None` until the first sample or access of process lifetime
    current: Option<DailyRecord>,
    history: HistoryLog,
}

impl DailyMetricLedger {
    /// Rehydrate the ledger from the key-value store
    ///
    /// Missing or malformed persisted values fall back to fresh empty state;
    /// corruption is logged, never fatal.
    pub fn load(category: Category, store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let current = match store.get(&keys::today(category))? {
            Some(raw) => match serde_json::from_str::<DailyRecord>(&raw) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(%category, %err, "malformed today-record, starting fresh");
                    None
                }
            },
            None => None,
        };

        let mut history = match store.get(&keys::history(category))? {
            Some(raw) => match serde_json::from_str::<HistoryLog>(&raw) {
                Ok(log) => log,
                Err(err) => {
                    tracing::warn!(%category, %err, "malformed history log, starting fresh");
                    HistoryLog::new(category.history_cap())
                }
            },
            None => HistoryLog::new(category.history_cap()),
        };
        // The cap lives in configuration, not in the persisted value.
        history.set_cap(category.history_cap());

        Ok(Self {
            category,
            current,
            history,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Record one measurement, returning a snapshot of today's record
    ///
    /// Validates the amount, performs any pending rollover, applies the
    /// sample, then persists today's record followed by the history log.
    pub fn record_sample(
        &mut self,
        amount: f64,
        label: Option<String>,
        now: NaiveDateTime,
        store: &mut dyn KeyValueStore,
    ) -> Result<DailyRecord, CoreError> {
        let sample = DailySample::new(self.category, amount, now, label)?;
        self.rollover_if_needed(now.date(), store)?;

        // rollover_if_needed guarantees an active record for now.date()
        let record = self
            .current
            .get_or_insert_with(|| DailyRecord::empty(now.date()));
        record.apply(self.category, sample);

        let snapshot = record.clone();
        self.history.upsert(snapshot.clone());
        self.persist(store)?;

        tracing::debug!(
            category = %self.category,
            amount,
            total = snapshot.total,
            "recorded sample"
        );
        Ok(snapshot)
    }

    /// Read-only snapshot of today's record
    ///
    /// Triggers the same lazy rollover check as recording, so the first
    /// access of a new day archives yesterday before anything is displayed.
    pub fn today(
        &mut self,
        now: NaiveDateTime,
        store: &mut dyn KeyValueStore,
    ) -> Result<DailyRecord, StorageError> {
        self.rollover_if_needed(now.date(), store)?;
        Ok(self
            .current
            .clone()
            .unwrap_or_else(|| DailyRecord::empty(now.date())))
    }

    /// Force-roll the current record into history and start a fresh day
    ///
    /// Used for manual "reset day" actions. An empty current record is
    /// discarded rather than archived.
    pub fn reset(
        &mut self,
        now: NaiveDateTime,
        store: &mut dyn KeyValueStore,
    ) -> Result<DailyRecord, StorageError> {
        if let Some(record) = self.current.take() {
            if !record.is_empty() {
                self.history.upsert(record);
            }
        }
        let fresh = DailyRecord::empty(now.date());
        self.current = Some(fresh.clone());
        self.persist(store)?;
        tracing::debug!(category = %self.category, "day reset");
        Ok(fresh)
    }

    /// Archived days, ascending by date
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Archive the stored day and open a fresh record when the date moved
    ///
    /// Idempotent for a given `today`: a second call with the same date is a
    /// no-op, and re-archiving updates the history entry in place rather
    /// than duplicating it. Skipped dates are not synthesized.
    fn rollover_if_needed(
        &mut self,
        today: NaiveDate,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), StorageError> {
        match &self.current {
            Some(record) if record.date == today => Ok(()),
            Some(record) => {
                tracing::debug!(
                    category = %self.category,
                    from = %record.date,
                    to = %today,
                    total = record.total,
                    "rolling day over"
                );
                if !record.is_empty() {
                    self.history.upsert(record.clone());
                }
                self.current = Some(DailyRecord::empty(today));
                self.persist(store)
            }
            None => {
                self.current = Some(DailyRecord::empty(today));
                self.persist(store)
            }
        }
    }

    /// Write today's record, then the history log
    ///
    /// The two writes are not transactional; a process kill between them
    /// leaves at most one day of drift, which the next rollover resolves.
    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        if let Some(record) = &self.current {
            store.set(&keys::today(self.category), &serde_json::to_string(record)?)?;
        }
        store.set(
            &keys::history(self.category),
            &serde_json::to_string(&self.history)?,
        )?;
        Ok(())
    }
}
