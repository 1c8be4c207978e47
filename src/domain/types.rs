/// Core types and enums used throughout the domain layer
///
/// This module defines the metric categories the tracker knows about and the
/// per-category policy (unit, aggregation semantics, history cap) that the
/// ledger and history components consult.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The metric streams the tracker records, one ledger per category
///
/// Each category carries its own unit and aggregation semantics: water and
/// calorie intake accumulate over a day, while weight measurements overwrite
/// each other (the day's total is the last reading, not a sum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Water intake in millilitres
    Water,
    /// Calorie intake in kilocalories
    Calories,
    /// Body weight in kilograms
    Weight,
}

/// How samples recorded on the same day combine into the daily total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Each sample adds to the running total (water, calories)
    Accumulate,
    /// Each sample replaces the total; the latest reading wins (weight)
    Overwrite,
}

impl Category {
    /// All known categories, in stable definition order
    pub const ALL: [Category; 3] = [Category::Water, Category::Calories, Category::Weight];

    /// Stem used to build persistence keys (`water_today`, `water_history`, ...)
    pub fn key_stem(&self) -> &'static str {
        match self {
            Category::Water => "water",
            Category::Calories => "calories",
            Category::Weight => "weight",
        }
    }

    /// Unit suffix for display
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Water => "ml",
            Category::Calories => "kcal",
            Category::Weight => "kg",
        }
    }

    /// How same-day samples combine into the daily total
    pub fn aggregation(&self) -> Aggregation {
        match self {
            Category::Water | Category::Calories => Aggregation::Accumulate,
            Category::Weight => Aggregation::Overwrite,
        }
    }

    /// Maximum number of archived days the history log retains
    pub fn history_cap(&self) -> usize {
        match self {
            Category::Water => 30,
            Category::Calories => 30,
            Category::Weight => 5,
        }
    }

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Water => "Water",
            Category::Calories => "Calories",
            Category::Weight => "Weight",
        }
    }

    /// Parse a category from its key stem, tolerating unknown values
    ///
    /// Unknown stems map to `None` rather than an error so that persisted
    /// state written by a newer schema is skipped instead of crashing.
    pub fn from_key_stem(s: &str) -> Option<Category> {
        match s {
            "water" => Some(Category::Water),
            "calories" => Some(Category::Calories),
            "weight" => Some(Category::Weight),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key_stem(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown category '{}' (expected water, calories or weight)", s))
    }
}
