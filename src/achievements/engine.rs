/// Achievement evaluation engine
///
/// Tracks one lifetime cumulative progress counter per category (independent
/// of the daily reset) and checks it against the catalog after every delta.
/// Unlocks are one-way: once stamped, neither progress resets nor further
/// updates ever re-lock an achievement.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::achievements::{AchievementDefinition, AchievementState};
use crate::domain::Category;
use crate::storage::{keys, KeyValueStore, StorageError};

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One newly unlocked achievement, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockedAchievement {
    pub id: String,
    pub title: String,
    pub unlocked_at: NaiveDateTime,
}

pub struct AchievementEngine {
    definitions: Vec<AchievementDefinition>,
    states: HashMap<String, AchievementState>,
    progress: HashMap<Category, f64>,
}

impl AchievementEngine {
    /// Rehydrate progress counters and unlock flags from the store
    ///
    /// Missing keys default to zero progress / locked; malformed unlock
    /// dates are logged and dropped, not fatal.
    pub fn load(
        definitions: Vec<AchievementDefinition>,
        store: &dyn KeyValueStore,
    ) -> Result<Self, StorageError> {
        let mut progress = HashMap::new();
        for category in Category::ALL {
            progress.insert(category, store.get_f64(&keys::progress(category), 0.0)?);
        }

        let mut states = HashMap::new();
        for def in &definitions {
            let unlocked = store
                .get(&keys::achievement_unlocked(&def.id))?
                .map(|v| v == "1")
                .unwrap_or(false);
            let unlock_date = if unlocked {
                match store.get(&keys::achievement_date(&def.id))? {
                    Some(raw) => match NaiveDateTime::parse_from_str(&raw, DATE_FORMAT) {
                        Ok(date) => Some(date),
                        Err(err) => {
                            tracing::warn!(id = %def.id, %err, "malformed unlock date, dropping");
                            None
                        }
                    },
                    None => None,
                }
            } else {
                None
            };
            states.insert(def.id.clone(), AchievementState { unlocked, unlock_date });
        }

        Ok(Self {
            definitions,
            states,
            progress,
        })
    }

    /// Add `delta` to a category's lifetime counter and evaluate unlocks
    ///
    /// Returns one entry per newly unlocked achievement, in catalog order.
    /// A category the engine does not track is a silent no-op so that newer
    /// persisted schemas never crash an older client.
    pub fn update_progress(
        &mut self,
        category: Category,
        delta: f64,
        now: NaiveDateTime,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<UnlockedAchievement>, StorageError> {
        let Some(counter) = self.progress.get_mut(&category) else {
            tracing::debug!(%category, "progress update for untracked category ignored");
            return Ok(Vec::new());
        };
        *counter += delta;
        let cumulative = *counter;
        store.set_f64(&keys::progress(category), cumulative)?;

        let mut newly_unlocked = Vec::new();
        for def in &self.definitions {
            if def.category != category || def.target_value > cumulative {
                continue;
            }
            let state = self.states.entry(def.id.clone()).or_default();
            if state.unlocked {
                continue;
            }
            state.unlocked = true;
            state.unlock_date = Some(now);
            store.set(&keys::achievement_unlocked(&def.id), "1")?;
            store.set(
                &keys::achievement_date(&def.id),
                &now.format(DATE_FORMAT).to_string(),
            )?;
            tracing::info!(id = %def.id, title = %def.title, "achievement unlocked");
            newly_unlocked.push(UnlockedAchievement {
                id: def.id.clone(),
                title: def.title.clone(),
                unlocked_at: now,
            });
        }
        Ok(newly_unlocked)
    }

    /// Lifetime cumulative progress for a category
    pub fn progress(&self, category: Category) -> f64 {
        self.progress.get(&category).copied().unwrap_or(0.0)
    }

    /// Unlocked achievements with their unlock dates, catalog order preserved
    pub fn unlocked(&self) -> Vec<(&AchievementDefinition, Option<NaiveDateTime>)> {
        self.definitions
            .iter()
            .filter_map(|def| {
                let state = self.states.get(&def.id)?;
                state.unlocked.then_some((def, state.unlock_date))
            })
            .collect()
    }

    /// Still-locked achievements, catalog order preserved
    pub fn locked(&self) -> Vec<&AchievementDefinition> {
        self.definitions
            .iter()
            .filter(|def| {
                !self
                    .states
                    .get(&def.id)
                    .map(|s| s.unlocked)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Zero one category's lifetime counter
    ///
    /// Already-unlocked achievements stay unlocked; the counter reset only
    /// restarts the display numbers for locked ones.
    pub fn reset_progress(
        &mut self,
        category: Category,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), StorageError> {
        if let Some(counter) = self.progress.get_mut(&category) {
            *counter = 0.0;
        }
        store.delete(&keys::progress(category))?;
        tracing::debug!(%category, "progress counter reset");
        Ok(())
    }
}
