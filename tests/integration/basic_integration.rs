/// End-to-end workflows over a real on-disk SQLite store
use chrono::{NaiveDate, NaiveDateTime};
use daytrack::*;

fn at(d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[test]
fn full_workflow_survives_process_restart() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("tracker.db");

    {
        let mut core = TrackerCore::open(db_path.clone(), TrackerConfig::default())
            .expect("failed to open core");
        core.record_sample(Category::Water, 200.0, None, at(1, 9)).unwrap();
        core.record_sample(Category::Water, 500.0, None, at(1, 14)).unwrap();
        core.record_sample(Category::Calories, 450.0, Some("lunch".to_string()), at(1, 13))
            .unwrap();
        core.set_profile(74.25, 175.0).unwrap();
        core.flush().unwrap();
    }

    // "restart": reopen the same database
    let mut core = TrackerCore::open(db_path, TrackerConfig::default())
        .expect("failed to reopen core");

    let water = core.today(Category::Water, at(1, 18)).unwrap();
    assert_eq!(water.record.total, 700.0);
    assert_eq!(water.record.samples.len(), 2);

    let calories = core.today(Category::Calories, at(1, 18)).unwrap();
    assert_eq!(calories.record.total, 450.0);
    assert_eq!(calories.remaining, Some(1550.0));
    assert_eq!(calories.record.samples[0].label.as_deref(), Some("lunch"));

    let report = core.bmi_report().unwrap();
    assert_eq!(report.class, BmiClass::Normal);
}

#[test]
fn rollover_across_restart_archives_exactly_once() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("tracker.db");

    {
        let mut core = TrackerCore::open(db_path.clone(), TrackerConfig::default()).unwrap();
        core.record_sample(Category::Water, 700.0, None, at(1, 9)).unwrap();
    }

    // next day, fresh process: the first access rolls day 1 over
    let mut core = TrackerCore::open(db_path.clone(), TrackerConfig::default()).unwrap();
    let snap = core.today(Category::Water, at(2, 8)).unwrap();
    assert_eq!(snap.record.total, 0.0);
    drop(core);

    // yet another restart on the same day must not duplicate the entry
    let mut core = TrackerCore::open(db_path, TrackerConfig::default()).unwrap();
    core.today(Category::Water, at(2, 10)).unwrap();
    let day1: Vec<_> = core
        .history(Category::Water)
        .iter()
        .filter(|e| e.date == at(1, 0).date())
        .collect();
    assert_eq!(day1.len(), 1);
    assert_eq!(day1[0].total, 700.0);
}

#[test]
fn achievement_unlocks_persist_across_restart() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("tracker.db");

    {
        let mut core = TrackerCore::open(db_path.clone(), TrackerConfig::default()).unwrap();
        core.record_sample(Category::Water, 250.0, None, at(1, 9)).unwrap();
    }

    let mut core = TrackerCore::open(db_path, TrackerConfig::default()).unwrap();
    let unlocked = core.achievements().unlocked();
    assert!(unlocked.iter().any(|(def, _)| def.id == "water_200"));

    // progress reset after restart still never re-locks
    core.reset_progress(Category::Water).unwrap();
    core.record_sample(Category::Water, 1.0, None, at(1, 10)).unwrap();
    assert!(core
        .achievements()
        .unlocked()
        .iter()
        .any(|(def, _)| def.id == "water_200"));
}

#[test]
fn corrupted_store_values_self_heal() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("tracker.db");

    {
        let mut store = SqliteKvStore::open(db_path.clone()).unwrap();
        store.set("water_today", "{ definitely not json").unwrap();
        store.set("water_progress", "NaN-ish garbage").unwrap();
        store.set("calories_history", "42").unwrap();
    }

    // malformed state falls back to fresh defaults, never an error
    let mut core = TrackerCore::open(db_path, TrackerConfig::default()).unwrap();
    let snap = core.today(Category::Water, at(1, 9)).unwrap();
    assert_eq!(snap.record.total, 0.0);
    assert_eq!(core.achievements().progress(Category::Water), 0.0);
    assert!(core.history(Category::Calories).is_empty());
}

#[test]
fn store_trait_object_usability() {
    let store = MemoryKvStore::new();
    let _: &dyn KeyValueStore = &store;

    let core = TrackerCore::new(Box::new(store), TrackerConfig::default());
    assert!(core.is_ok());
}
