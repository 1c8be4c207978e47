/// DailySample and DailyRecord entities
///
/// A sample is one measurement the user entered (a glass of water, a meal,
/// a weigh-in). A record collects all samples for one category on one
/// calendar date and maintains the daily total according to the category's
/// aggregation semantics.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Aggregation, Category, DomainError};

/// Version tag written into every persisted record shape
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) fn schema_version_field() -> u32 {
    SCHEMA_VERSION
}

/// A single measurement entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    /// Measured amount in the category's unit (ml, kcal or kg)
    pub amount: f64,
    /// Wall-clock time the sample was entered
    pub recorded_at: NaiveDateTime,
    /// Optional label, e.g. the food item a calorie entry came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DailySample {
    /// Create a new sample with validation
    ///
    /// Accumulating categories reject negative amounts; overwrite categories
    /// (weight) additionally reject zero, since a zero reading is always a
    /// data-entry mistake.
    pub fn new(
        category: Category,
        amount: f64,
        recorded_at: NaiveDateTime,
        label: Option<String>,
    ) -> Result<Self, DomainError> {
        validate_amount(category, amount)?;
        Ok(Self {
            amount,
            recorded_at,
            label,
        })
    }
}

/// Validate a sample amount against the category's rules
pub fn validate_amount(category: Category, amount: f64) -> Result<(), DomainError> {
    if !amount.is_finite() {
        return Err(DomainError::InvalidAmount {
            category,
            amount,
            reason: "amount must be a finite number".to_string(),
        });
    }
    match category.aggregation() {
        Aggregation::Accumulate if amount < 0.0 => Err(DomainError::InvalidAmount {
            category,
            amount,
            reason: "amount must not be negative".to_string(),
        }),
        Aggregation::Overwrite if amount <= 0.0 => Err(DomainError::InvalidAmount {
            category,
            amount,
            reason: "amount must be positive".to_string(),
        }),
        _ => Ok(()),
    }
}

/// All samples for one category on one calendar date, plus the daily total
///
/// For accumulating categories `total` equals the sum of sample amounts; for
/// weight it equals the most recent sample's amount. The record is created on
/// the first sample (or first access) of a date and archived into the history
/// log when the date rolls over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default = "schema_version_field")]
    pub version: u32,
    /// Calendar date this record covers (local, no time component)
    pub date: NaiveDate,
    /// Daily total per the category's aggregation semantics
    #[serde(default)]
    pub total: f64,
    /// Samples in insertion order, kept for audit/listing
    #[serde(default)]
    pub samples: Vec<DailySample>,
}

impl DailyRecord {
    /// Create a fresh zero record for the given date
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            version: SCHEMA_VERSION,
            date,
            total: 0.0,
            samples: Vec::new(),
        }
    }

    /// Apply a validated sample, updating the total per category semantics
    pub fn apply(&mut self, category: Category, sample: DailySample) {
        match category.aggregation() {
            Aggregation::Accumulate => self.total += sample.amount,
            Aggregation::Overwrite => self.total = sample.amount,
        }
        self.samples.push(sample);
    }

    /// Whether anything was recorded on this date
    ///
    /// Empty records are never archived; an untouched day leaves no history
    /// entry.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() && self.total == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn accumulating_total_is_sum_of_samples() {
        let now = noon(2024, 3, 1);
        let mut record = DailyRecord::empty(now.date());
        for amount in [200.0, 500.0, 300.0] {
            let sample = DailySample::new(Category::Water, amount, now, None).unwrap();
            record.apply(Category::Water, sample);
        }
        assert_eq!(record.total, 1000.0);
        assert_eq!(record.samples.len(), 3);
    }

    #[test]
    fn weight_overwrites_instead_of_summing() {
        let now = noon(2024, 3, 1);
        let mut record = DailyRecord::empty(now.date());
        let first = DailySample::new(Category::Weight, 80.5, now, None).unwrap();
        let second = DailySample::new(Category::Weight, 79.8, now, None).unwrap();
        record.apply(Category::Weight, first);
        record.apply(Category::Weight, second);
        assert_eq!(record.total, 79.8);
        assert_eq!(record.samples.len(), 2);
    }

    #[test]
    fn negative_amount_rejected_for_accumulating() {
        let err = DailySample::new(Category::Water, -1.0, noon(2024, 3, 1), None);
        assert!(matches!(err, Err(DomainError::InvalidAmount { .. })));
    }

    #[test]
    fn zero_weight_rejected() {
        let err = DailySample::new(Category::Weight, 0.0, noon(2024, 3, 1), None);
        assert!(matches!(err, Err(DomainError::InvalidAmount { .. })));
        // but zero is fine for accumulating categories
        assert!(DailySample::new(Category::Calories, 0.0, noon(2024, 3, 1), None).is_ok());
    }

    #[test]
    fn non_finite_amount_rejected() {
        assert!(DailySample::new(Category::Water, f64::NAN, noon(2024, 3, 1), None).is_err());
        assert!(DailySample::new(Category::Water, f64::INFINITY, noon(2024, 3, 1), None).is_err());
    }

    #[test]
    fn record_survives_serde_round_trip() {
        let now = noon(2024, 3, 1);
        let mut record = DailyRecord::empty(now.date());
        record.apply(
            Category::Calories,
            DailySample::new(Category::Calories, 450.0, now, Some("lunch".to_string())).unwrap(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn missing_fields_default_on_deserialize() {
        // Older persisted shape without version/samples still loads
        let back: DailyRecord =
            serde_json::from_str(r#"{"date":"2024-03-01","total":700.0}"#).unwrap();
        assert_eq!(back.version, SCHEMA_VERSION);
        assert_eq!(back.total, 700.0);
        assert!(back.samples.is_empty());
    }
}
