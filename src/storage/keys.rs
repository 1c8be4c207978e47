/// Persistence key layout
///
/// Every persisted value lives under one of these key families:
///
/// | key                          | value                                  |
/// |------------------------------|----------------------------------------|
/// | `<category>_today`           | JSON `{version, date, total, samples}` |
/// | `<category>_history`         | JSON `{version, entries}`              |
/// | `<category>_progress`        | cumulative numeric progress            |
/// | `achievement_<id>_unlocked`  | `"1"` when unlocked                    |
/// | `achievement_<id>_date`      | `YYYY-MM-DDTHH:MM:SS`                  |
/// | `profile_weight`             | numeric                                |
/// | `profile_height`             | numeric                                |

use crate::domain::Category;

pub const PROFILE_WEIGHT: &str = "profile_weight";
pub const PROFILE_HEIGHT: &str = "profile_height";

pub fn today(category: Category) -> String {
    format!("{}_today", category.key_stem())
}

pub fn history(category: Category) -> String {
    format!("{}_history", category.key_stem())
}

pub fn progress(category: Category) -> String {
    format!("{}_progress", category.key_stem())
}

pub fn achievement_unlocked(id: &str) -> String {
    format!("achievement_{}_unlocked", id)
}

pub fn achievement_date(id: &str) -> String {
    format!("achievement_{}_date", id)
}
