mod common;
use common::{roster, setup_test_db};

use rfarelog::db::pool::DbPool;
use rfarelog::db::state::{load_state, save_state};
use rfarelog::errors::AppError;
use rfarelog::models::{AppState, GroupPair, Roster, YearMonth};
use rfarelog::store::{MemoryStore, RosterStore};

fn round_trip(store: &mut dyn RosterStore) {
    let cases = [
        ("2024-05", Roster::new()),
        ("2024-05_Univille", roster(&[("Alice", true), ("Bob", false)])),
        ("2023-12", roster(&[("Zoë Ñandú", false), ("Zoë Ñandú", true)])),
    ];

    for (key, r) in &cases {
        store.save(key, r).unwrap();
    }
    for (key, r) in &cases {
        assert_eq!(store.load(key).unwrap().as_ref(), Some(r), "key {key}");
        assert!(store.contains(key).unwrap());
    }

    assert_eq!(store.load("1999-01").unwrap(), None);
    assert!(!store.contains("1999-01").unwrap());
}

fn overwrite(store: &mut dyn RosterStore) {
    store.save("2024-05", &roster(&[("Alice", false)])).unwrap();
    store.save("2024-05", &roster(&[("Bob", true)])).unwrap();

    assert_eq!(store.load("2024-05").unwrap(), Some(roster(&[("Bob", true)])));
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    round_trip(&mut store);
    overwrite(&mut store);
}

#[test]
fn test_sqlite_store_round_trip() {
    let db_path = setup_test_db("store_round_trip");
    let pool = DbPool::open(&db_path).unwrap();
    let mut store = pool.store();

    round_trip(&mut store);
    overwrite(&mut store);
    assert_eq!(
        store.keys().unwrap(),
        vec!["2023-12", "2024-05", "2024-05_Univille"]
    );
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let db_path = setup_test_db("store_reopen");
    {
        let pool = DbPool::open(&db_path).unwrap();
        pool.store()
            .save("2024-05", &roster(&[("Alice", true)]))
            .unwrap();
    }

    let pool = DbPool::open(&db_path).unwrap();
    assert_eq!(
        pool.store().load("2024-05").unwrap(),
        Some(roster(&[("Alice", true)]))
    );
}

#[test]
fn test_rosters_table_without_updated_at_is_migrated() {
    let db_path = setup_test_db("store_legacy_rosters");
    {
        let pool = DbPool::new(&db_path).unwrap();
        pool.conn
            .execute_batch(
                "CREATE TABLE rosters (period_key TEXT PRIMARY KEY, data TEXT NOT NULL);
                 INSERT INTO rosters VALUES ('2024-05', '[{\"name\":\"Alice\",\"paid\":true}]');",
            )
            .unwrap();
    }

    // opening twice must apply the migration once
    DbPool::open(&db_path).unwrap();
    let pool = DbPool::open(&db_path).unwrap();

    let columns: Vec<String> = pool
        .conn
        .prepare("PRAGMA table_info('rosters')")
        .unwrap()
        .query_map([], |row| row.get(1))
        .unwrap()
        .map(|c| c.unwrap())
        .collect();
    assert!(columns.iter().any(|c| c == "updated_at"));

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);

    let mut store = pool.store();
    assert_eq!(
        store.load("2024-05").unwrap(),
        Some(roster(&[("Alice", true)]))
    );
    store.save("2024-06", &roster(&[("Alice", false)])).unwrap();
    assert!(store.contains("2024-06").unwrap());
}

#[test]
fn test_sqlite_corrupt_value_is_distinct_from_missing() {
    let db_path = setup_test_db("store_corrupt");
    let pool = DbPool::open(&db_path).unwrap();
    pool.conn
        .execute(
            "INSERT INTO rosters (period_key, data) VALUES ('2024-05', 'garbage')",
            [],
        )
        .unwrap();

    let store = pool.store();
    let err = store.load("2024-05").unwrap_err();

    assert!(matches!(err, AppError::CorruptRoster { ref key, .. } if key == "2024-05"));
    assert!(store.contains("2024-05").unwrap());
    assert_eq!(store.load("2024-06").unwrap(), None);
}

#[test]
fn test_memory_corrupt_value() {
    let mut store = MemoryStore::new();
    store.insert_raw("2024-05", r#"{"name":"Alice"}"#);

    assert!(matches!(
        store.load("2024-05"),
        Err(AppError::CorruptRoster { .. })
    ));
}

#[test]
fn test_group_rosters_are_independent() {
    let db_path = setup_test_db("store_groups");
    let pool = DbPool::open(&db_path).unwrap();
    let mut store = pool.store();

    store
        .save("2024-05_Unisosiesc", &roster(&[("Alice", false)]))
        .unwrap();
    store
        .save("2024-05_Univille", &roster(&[("Bob", false)]))
        .unwrap();
    store
        .save("2024-05_Unisosiesc", &roster(&[("Alice", true), ("Carol", false)]))
        .unwrap();

    assert_eq!(
        store.load("2024-05_Univille").unwrap(),
        Some(roster(&[("Bob", false)]))
    );
}

#[test]
fn test_app_state_round_trip_and_fallbacks() {
    let db_path = setup_test_db("store_app_state");
    let pool = DbPool::open(&db_path).unwrap();
    let groups = GroupPair::default();

    // nothing saved yet: current month, first group
    let initial = load_state(&pool.conn, Some(&groups)).unwrap();
    assert_eq!(initial.month, YearMonth::current());
    assert_eq!(initial.group.as_deref(), Some("Unisosiesc"));

    let state = AppState::new("2023-12".parse().unwrap(), Some("Univille".into()));
    save_state(&pool.conn, &state).unwrap();
    assert_eq!(load_state(&pool.conn, Some(&groups)).unwrap(), state);

    // month-only mode ignores the saved group
    let plain = load_state(&pool.conn, None).unwrap();
    assert_eq!(plain.group, None);

    // a group that is no longer configured falls back to the first one
    let renamed = GroupPair::new("North", "South").unwrap();
    let fallback = load_state(&pool.conn, Some(&renamed)).unwrap();
    assert_eq!(fallback.group.as_deref(), Some("North"));
}
