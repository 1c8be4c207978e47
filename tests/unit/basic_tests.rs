/// Basic unit tests exercising the public surface of the core
use chrono::{NaiveDate, NaiveDateTime};
use daytrack::*;

fn at(d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn core() -> TrackerCore {
    TrackerCore::new(Box::new(MemoryKvStore::new()), TrackerConfig::default())
        .expect("failed to create core")
}

#[test]
fn accumulating_total_equals_sum_of_valid_amounts() {
    let mut core = core();
    let amounts = [200.0, 0.0, 150.5, 649.5];
    for amount in amounts {
        core.record_sample(Category::Water, amount, None, at(1, 9))
            .expect("valid amount rejected");
    }
    let snap = core.today(Category::Water, at(1, 10)).unwrap();
    assert_eq!(snap.record.total, amounts.iter().sum::<f64>());
}

#[test]
fn weight_record_keeps_last_value() {
    let mut core = core();
    core.record_sample(Category::Weight, 81.4, None, at(1, 8)).unwrap();
    core.record_sample(Category::Weight, 80.9, None, at(1, 21)).unwrap();
    let snap = core.today(Category::Weight, at(1, 22)).unwrap();
    assert_eq!(snap.record.total, 80.9);
}

#[test]
fn invalid_amounts_surface_domain_errors() {
    let mut core = core();
    let err = core.record_sample(Category::Water, -10.0, None, at(1, 9));
    assert!(matches!(err, Err(CoreError::Domain(_))));

    let err = core.record_sample(Category::Weight, 0.0, None, at(1, 9));
    assert!(matches!(err, Err(CoreError::Domain(_))));
}

#[test]
fn bmi_classification_on_the_public_surface() {
    assert_eq!(BmiClass::classify(compute_bmi(74.25, 175.0)), BmiClass::Normal);
    assert_eq!(BmiClass::classify(compute_bmi(100.0, 175.0)), BmiClass::Obese1);
    assert_eq!(compute_bmi(74.25, 0.0), 0.0);
}

#[test]
fn remaining_goal_is_clamped() {
    assert_eq!(remaining(2000.0, 2500.0), 0.0);
    assert_eq!(remaining(4000.0, 700.0), 3300.0);
}

#[test]
fn history_cap_holds_under_pressure() {
    let mut core = core();
    let cap = Category::Weight.history_cap();
    for d in 1..=(cap as u32 + 5) {
        core.record_sample(Category::Weight, 80.0 + d as f64, None, at(d, 9))
            .unwrap();
    }
    let history = core.history(Category::Weight);
    assert_eq!(history.len(), cap);
    // the cap most recent dates, ascending
    let first = history.first().unwrap().date;
    assert_eq!(first, at(6, 0).date());
}

#[test]
fn achievement_catalog_views_are_consistent() {
    let mut core = core();
    let total_defs = core.achievements().locked().len();

    core.record_sample(Category::Water, 250.0, None, at(1, 9)).unwrap();
    let unlocked = core.achievements().unlocked().len();
    let locked = core.achievements().locked().len();
    assert_eq!(unlocked + locked, total_defs);
    assert_eq!(unlocked, 1);
}
