/// Achievement catalog
///
/// Definitions are static product data: a stable id, the category whose
/// lifetime cumulative progress they watch, and the target that unlocks
/// them. Evaluation order is the catalog order, which keeps unlock
/// notifications deterministic when several targets are crossed at once.

use chrono::NaiveDateTime;

use crate::domain::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementDefinition {
    /// Stable unique id, also used to build persistence keys
    pub id: String,
    pub category: Category,
    /// Lifetime cumulative progress needed to unlock
    pub target_value: f64,
    pub title: String,
    pub description: String,
}

impl AchievementDefinition {
    pub fn new(
        id: &str,
        category: Category,
        target_value: f64,
        title: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            target_value,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Mutable unlock state for one definition
///
/// Once `unlocked` flips to true it never flips back; resetting a progress
/// counter re-earns display numbers, it does not revoke past unlocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementState {
    pub unlocked: bool,
    pub unlock_date: Option<NaiveDateTime>,
}

/// Built-in achievement catalog
pub fn builtin_catalog() -> Vec<AchievementDefinition> {
    vec![
        AchievementDefinition::new(
            "water_200",
            Category::Water,
            200.0,
            "Hydration novice",
            "Drink your first 200 ml of water",
        ),
        AchievementDefinition::new(
            "water_2000",
            Category::Water,
            2000.0,
            "Two litres down",
            "Log a lifetime total of 2 litres of water",
        ),
        AchievementDefinition::new(
            "water_10000",
            Category::Water,
            10000.0,
            "Deep reservoir",
            "Log a lifetime total of 10 litres of water",
        ),
        AchievementDefinition::new(
            "calories_1000",
            Category::Calories,
            1000.0,
            "Counting begins",
            "Log your first 1000 kcal",
        ),
        AchievementDefinition::new(
            "calories_20000",
            Category::Calories,
            20000.0,
            "Honest eater",
            "Log a lifetime total of 20000 kcal",
        ),
        AchievementDefinition::new(
            "weight_500",
            Category::Weight,
            500.0,
            "Scale regular",
            "Step on the scale often enough to log 500 kg cumulative",
        ),
    ]
}
