/// Public library interface for the daytrack core
///
/// This crate is the UI-free core of a daily fitness tracker: per-category
/// ledgers for water, calories and weight, a capped history log per ledger,
/// lifetime achievement progress, and derived profile metrics, all persisted
/// through a pluggable key-value store. A UI layer (or the bundled CLI)
/// calls `record_sample`/`today` and renders whatever comes back.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

// Internal modules
mod achievements;
mod domain;
mod events;
mod ledger;
mod storage;

// Re-export public modules and types
pub use achievements::{builtin_catalog, AchievementDefinition, AchievementEngine, UnlockedAchievement};
pub use domain::{
    compute_bmi, remaining, validate_amount, Aggregation, BmiClass, Category, DailyRecord,
    DailySample, DomainError, HistoryLog,
};
pub use events::TrackerEvent;
pub use ledger::DailyMetricLedger;
pub use storage::{keys, KeyValueStore, MemoryKvStore, SqliteKvStore, StorageError};

/// Errors that can occur during core operation
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("validation error: {0}")]
    Domain(#[from] domain::DomainError),
}

/// Daily goals and profile defaults
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub water_goal_ml: f64,
    pub calorie_goal_kcal: f64,
    /// Used until the user stores a profile
    pub default_weight_kg: f64,
    pub default_height_cm: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            water_goal_ml: 4000.0,
            calorie_goal_kcal: 2000.0,
            default_weight_kg: 70.0,
            default_height_cm: 175.0,
        }
    }
}

impl TrackerConfig {
    /// Daily goal for a category, if it has one (weight does not)
    pub fn goal(&self, category: Category) -> Option<f64> {
        match category {
            Category::Water => Some(self.water_goal_ml),
            Category::Calories => Some(self.calorie_goal_kcal),
            Category::Weight => None,
        }
    }
}

/// Today's record plus the goal arithmetic the UI renders next to it
#[derive(Debug, Clone, PartialEq)]
pub struct DailySnapshot {
    pub category: Category,
    pub record: DailyRecord,
    pub goal: Option<f64>,
    pub remaining: Option<f64>,
}

/// Stored profile values with the BMI derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct BmiReport {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub class: BmiClass,
}

/// Composition root owning the ledgers, achievements and the store
///
/// Explicitly constructed and dependency-injected; there are no global
/// singletons. All operations take the caller's "now" so the core never
/// reads the wall clock itself.
pub struct TrackerCore {
    config: TrackerConfig,
    store: Box<dyn KeyValueStore>,
    water: DailyMetricLedger,
    calories: DailyMetricLedger,
    weight: DailyMetricLedger,
    achievements: AchievementEngine,
    events: events::EventBus,
}

impl TrackerCore {
    /// Build the core on top of any key-value store
    pub fn new(store: Box<dyn KeyValueStore>, config: TrackerConfig) -> Result<Self, CoreError> {
        let water = DailyMetricLedger::load(Category::Water, store.as_ref())?;
        let calories = DailyMetricLedger::load(Category::Calories, store.as_ref())?;
        let weight = DailyMetricLedger::load(Category::Weight, store.as_ref())?;
        let achievements = AchievementEngine::load(builtin_catalog(), store.as_ref())?;

        tracing::info!("tracking core initialized");
        Ok(Self {
            config,
            store,
            water,
            calories,
            weight,
            achievements,
            events: events::EventBus::new(),
        })
    }

    /// Convenience constructor over the SQLite store at `db_path`
    pub fn open(db_path: PathBuf, config: TrackerConfig) -> Result<Self, CoreError> {
        let store = SqliteKvStore::open(db_path)?;
        Self::new(Box::new(store), config)
    }

    /// Register a subscriber for unlock and progress events
    pub fn subscribe(&mut self, subscriber: impl Fn(&TrackerEvent) + 'static) {
        self.events.subscribe(subscriber);
    }

    /// Record one measurement and run the full update pipeline
    ///
    /// Ledger update and persistence, history merge, achievement progress,
    /// then event notification. For weight samples the stored profile weight
    /// is refreshed as well.
    pub fn record_sample(
        &mut self,
        category: Category,
        amount: f64,
        label: Option<String>,
        now: NaiveDateTime,
    ) -> Result<DailySnapshot, CoreError> {
        let ledger = match category {
            Category::Water => &mut self.water,
            Category::Calories => &mut self.calories,
            Category::Weight => &mut self.weight,
        };
        let record = ledger.record_sample(amount, label, now, self.store.as_mut())?;

        if category == Category::Weight {
            self.store.set_f64(keys::PROFILE_WEIGHT, amount)?;
        }

        let unlocks =
            self.achievements
                .update_progress(category, amount, now, self.store.as_mut())?;

        self.events.emit(&TrackerEvent::ProgressChanged {
            category,
            day_total: record.total,
            lifetime_total: self.achievements.progress(category),
        });
        for unlock in unlocks {
            self.events.emit(&TrackerEvent::AchievementUnlocked {
                id: unlock.id,
                title: unlock.title,
                unlocked_at: unlock.unlocked_at,
            });
        }

        Ok(self.snapshot(category, record))
    }

    /// Snapshot of today's record, rolling the day over first if needed
    pub fn today(
        &mut self,
        category: Category,
        now: NaiveDateTime,
    ) -> Result<DailySnapshot, CoreError> {
        let ledger = match category {
            Category::Water => &mut self.water,
            Category::Calories => &mut self.calories,
            Category::Weight => &mut self.weight,
        };
        let record = ledger.today(now, self.store.as_mut())?;
        Ok(self.snapshot(category, record))
    }

    /// Archived days for a category, ascending by date
    pub fn history(&self, category: Category) -> &[DailyRecord] {
        match category {
            Category::Water => self.water.history().list(),
            Category::Calories => self.calories.history().list(),
            Category::Weight => self.weight.history().list(),
        }
    }

    /// Manual "reset day": archive the current record, start from zero
    pub fn reset_day(
        &mut self,
        category: Category,
        now: NaiveDateTime,
    ) -> Result<DailySnapshot, CoreError> {
        let ledger = match category {
            Category::Water => &mut self.water,
            Category::Calories => &mut self.calories,
            Category::Weight => &mut self.weight,
        };
        let record = ledger.reset(now, self.store.as_mut())?;
        Ok(self.snapshot(category, record))
    }

    /// Zero one category's lifetime achievement counter
    pub fn reset_progress(&mut self, category: Category) -> Result<(), CoreError> {
        self.achievements
            .reset_progress(category, self.store.as_mut())?;
        Ok(())
    }

    /// Achievement views (catalog order preserved)
    pub fn achievements(&self) -> &AchievementEngine {
        &self.achievements
    }

    /// Store profile weight and height
    pub fn set_profile(&mut self, weight_kg: f64, height_cm: f64) -> Result<(), CoreError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(DomainError::InvalidProfile(format!(
                "weight must be positive, got {}",
                weight_kg
            ))
            .into());
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(DomainError::InvalidProfile(format!(
                "height must be positive, got {}",
                height_cm
            ))
            .into());
        }
        self.store.set_f64(keys::PROFILE_WEIGHT, weight_kg)?;
        self.store.set_f64(keys::PROFILE_HEIGHT, height_cm)?;
        Ok(())
    }

    /// Profile values with derived BMI and classification
    ///
    /// Falls back to configured defaults when no profile was stored yet, so
    /// display code always has something to show.
    pub fn bmi_report(&self) -> Result<BmiReport, CoreError> {
        let weight_kg = self
            .store
            .get_f64(keys::PROFILE_WEIGHT, self.config.default_weight_kg)?;
        let height_cm = self
            .store
            .get_f64(keys::PROFILE_HEIGHT, self.config.default_height_cm)?;
        let bmi = compute_bmi(weight_kg, height_cm);
        Ok(BmiReport {
            weight_kg,
            height_cm,
            bmi,
            class: BmiClass::classify(bmi),
        })
    }

    /// Flush the underlying store (call on shutdown)
    pub fn flush(&mut self) -> Result<(), CoreError> {
        self.store.flush()?;
        Ok(())
    }

    /// Get a reference to the active configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn snapshot(&self, category: Category, record: DailyRecord) -> DailySnapshot {
        let goal = self.config.goal(category);
        let left = goal.map(|g| remaining(g, record.total));
        DailySnapshot {
            category,
            record,
            goal,
            remaining: left,
        }
    }
}
