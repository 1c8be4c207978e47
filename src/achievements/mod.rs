/// Achievement subsystem: static catalog plus the evaluation engine

pub mod definitions;
pub mod engine;

pub use definitions::{builtin_catalog, AchievementDefinition, AchievementState};
pub use engine::{AchievementEngine, UnlockedAchievement};
