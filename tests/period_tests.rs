mod common;
use common::roster;

use rfarelog::core::period::{PeriodController, RolloverPolicy, RosterOrigin};
use rfarelog::errors::AppError;
use rfarelog::models::{AppState, GroupPair, Roster, YearMonth, period_key};
use rfarelog::store::{MemoryStore, RosterStore};

fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

fn month_only(month: &str, policy: RolloverPolicy) -> PeriodController {
    PeriodController::new(AppState::new(ym(month), None), None, policy)
}

fn grouped(month: &str, group: &str) -> PeriodController {
    PeriodController::new(
        AppState::new(ym(month), Some(group.to_string())),
        Some(GroupPair::default()),
        RolloverPolicy::PersistEmpty,
    )
}

#[test]
fn test_year_month_parse_and_format() {
    assert_eq!(ym("2024-05").to_string(), "2024-05");
    assert_eq!(ym("2024-05").label(), "May 2024");

    for bad in ["2024-13", "2024-00", "2024-5", "24-05", "2024/05", "", "2024-05-01"] {
        assert!(
            matches!(bad.parse::<YearMonth>(), Err(AppError::InvalidMonth(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_set_month_wraps_year_boundaries() {
    let mut c = month_only("2024-01", RolloverPolicy::PersistEmpty);
    assert_eq!(c.set_month(-1).to_string(), "2023-12");
    assert_eq!(c.set_month(1).to_string(), "2024-01");

    assert_eq!(ym("2023-12").shift(1), ym("2024-01"));
    assert_eq!(ym("2024-03").shift(-15), ym("2022-12"));
    assert_eq!(ym("2024-03").shift(24), ym("2026-03"));
}

#[test]
fn test_period_keys() {
    assert_eq!(period_key(ym("2024-05"), None), "2024-05");
    assert_eq!(period_key(ym("2024-05"), Some("Univille")), "2024-05_Univille");

    let c = grouped("2024-01", "Unisosiesc");
    assert_eq!(c.period_key(), "2024-01_Unisosiesc");
    assert_eq!(c.previous_period_key(), "2023-12_Unisosiesc");
}

#[test]
fn test_switch_group_cycles_between_two_labels() {
    let mut c = grouped("2024-05", "Unisosiesc");

    assert_eq!(c.switch_group().unwrap(), "Univille");
    assert_eq!(c.period_key(), "2024-05_Univille");
    assert_eq!(c.switch_group().unwrap(), "Unisosiesc");
    assert_eq!(c.select_group("univille").unwrap(), "Univille");
    assert!(matches!(c.select_group("Joinville"), Err(AppError::InvalidGroup(_))));
}

#[test]
fn test_switch_group_without_groups_is_an_error() {
    let mut c = month_only("2024-05", RolloverPolicy::PersistEmpty);
    assert!(matches!(c.switch_group(), Err(AppError::GroupsDisabled)));
    assert_eq!(c.period_key(), "2024-05");
}

#[test]
fn test_unknown_saved_group_falls_back_to_first_label() {
    let c = grouped("2024-05", "Gone");
    assert_eq!(c.state().group.as_deref(), Some("Unisosiesc"));

    let c = PeriodController::new(
        AppState::new(ym("2024-05"), Some("Univille".into())),
        None,
        RolloverPolicy::PersistEmpty,
    );
    assert_eq!(c.state().group, None);
}

#[test]
fn test_group_pair_validation() {
    assert!(GroupPair::new("A", "A").is_err());
    assert!(GroupPair::new(" ", "B").is_err());
    assert!(GroupPair::new("A_1", "B").is_err());
    assert!(GroupPair::from_config(&[]).unwrap().is_none());
    assert!(GroupPair::from_config(&["A".into()]).is_err());
    assert!(GroupPair::from_config(&["A".into(), "B".into(), "C".into()]).is_err());
}

#[test]
fn test_stored_roster_is_returned_as_is() {
    let mut store = MemoryStore::new();
    store.save("2024-05", &roster(&[("Alice", true)])).unwrap();
    store.save("2024-04", &roster(&[("Zed", false)])).unwrap();

    let active = month_only("2024-05", RolloverPolicy::PersistEmpty)
        .active_roster(&mut store)
        .unwrap();

    assert_eq!(active.origin, RosterOrigin::Stored);
    assert_eq!(active.roster, roster(&[("Alice", true)]));
}

#[test]
fn test_rollover_carries_names_and_resets_payments() {
    let mut store = MemoryStore::new();
    store
        .save("2024-04", &roster(&[("Alice", true), ("Bob", false)]))
        .unwrap();

    let active = month_only("2024-05", RolloverPolicy::PersistEmpty)
        .active_roster(&mut store)
        .unwrap();

    let expected = roster(&[("Alice", false), ("Bob", false)]);
    assert_eq!(active.roster, expected);
    assert_eq!(
        active.origin,
        RosterOrigin::RolledOver {
            from: "2024-04".into()
        }
    );
    assert_eq!(store.load("2024-05").unwrap(), Some(expected));
    // the previous period is untouched
    assert_eq!(
        store.load("2024-04").unwrap(),
        Some(roster(&[("Alice", true), ("Bob", false)]))
    );
}

#[test]
fn test_rollover_across_year_boundary() {
    let mut store = MemoryStore::new();
    store.save("2023-12", &roster(&[("Alice", true)])).unwrap();

    let active = month_only("2024-01", RolloverPolicy::PersistEmpty)
        .active_roster(&mut store)
        .unwrap();

    assert_eq!(active.roster, roster(&[("Alice", false)]));
}

#[test]
fn test_no_data_anywhere_gives_empty_roster() {
    for policy in [RolloverPolicy::PersistEmpty, RolloverPolicy::LeaveAbsent] {
        let mut store = MemoryStore::new();
        let active = month_only("2024-05", policy)
            .active_roster(&mut store)
            .unwrap();
        assert_eq!(active.roster, Roster::new());
    }
}

#[test]
fn test_empty_previous_roster_does_not_roll_over() {
    let mut store = MemoryStore::new();
    store.save("2024-04", &Roster::new()).unwrap();

    let active = month_only("2024-05", RolloverPolicy::PersistEmpty)
        .active_roster(&mut store)
        .unwrap();

    assert_eq!(active.origin, RosterOrigin::Fresh { persisted: true });
}

#[test]
fn test_persist_empty_policy_rolls_over_at_most_once() {
    let mut store = MemoryStore::new();
    let c = month_only("2024-05", RolloverPolicy::PersistEmpty);

    let first = c.active_roster(&mut store).unwrap();
    assert_eq!(first.origin, RosterOrigin::Fresh { persisted: true });
    assert_eq!(store.raw("2024-05"), Some("[]"));

    // previous period gains people afterwards: current key is already settled
    store.save("2024-04", &roster(&[("Late", true)])).unwrap();
    let second = c.active_roster(&mut store).unwrap();

    assert_eq!(second.origin, RosterOrigin::Stored);
    assert!(second.roster.is_empty());
}

#[test]
fn test_leave_absent_policy_rolls_over_later_data() {
    let mut store = MemoryStore::new();
    let c = month_only("2024-05", RolloverPolicy::LeaveAbsent);

    let first = c.active_roster(&mut store).unwrap();
    assert_eq!(first.origin, RosterOrigin::Fresh { persisted: false });
    assert!(!store.contains("2024-05").unwrap());

    store.save("2024-04", &roster(&[("Late", true)])).unwrap();
    let second = c.active_roster(&mut store).unwrap();

    assert_eq!(second.roster, roster(&[("Late", false)]));
    assert!(matches!(second.origin, RosterOrigin::RolledOver { .. }));

    // once written, the key is settled under this policy too
    store.save("2024-04", &roster(&[("Other", false)])).unwrap();
    let third = c.active_roster(&mut store).unwrap();
    assert_eq!(third.origin, RosterOrigin::Stored);
    assert_eq!(third.roster, roster(&[("Late", false)]));
}

#[test]
fn test_corrupt_current_roster_is_reported_and_preserved() {
    let mut store = MemoryStore::new();
    store.insert_raw("2024-05", "{not json");
    store.save("2024-04", &roster(&[("Alice", true)])).unwrap();

    let active = month_only("2024-05", RolloverPolicy::PersistEmpty)
        .active_roster(&mut store)
        .unwrap();

    assert!(matches!(active.origin, RosterOrigin::Unreadable { .. }));
    assert!(active.roster.is_empty());
    assert_eq!(active.warnings.len(), 1);
    assert_eq!(store.raw("2024-05"), Some("{not json"));
}

#[test]
fn test_corrupt_previous_roster_counts_as_no_data() {
    let mut store = MemoryStore::new();
    store.insert_raw("2024-04", r#"[{"name": 3}]"#);

    let active = month_only("2024-05", RolloverPolicy::PersistEmpty)
        .active_roster(&mut store)
        .unwrap();

    assert_eq!(active.origin, RosterOrigin::Fresh { persisted: true });
    assert_eq!(active.warnings.len(), 1);
    assert!(active.warnings[0].contains("2024-04"));
}

#[test]
fn test_rollover_stays_within_the_group() {
    let mut store = MemoryStore::new();
    store
        .save("2024-04_Unisosiesc", &roster(&[("Alice", true)]))
        .unwrap();

    let uni = grouped("2024-05", "Unisosiesc")
        .active_roster(&mut store)
        .unwrap();
    let ville = grouped("2024-05", "Univille")
        .active_roster(&mut store)
        .unwrap();

    assert_eq!(uni.roster, roster(&[("Alice", false)]));
    assert!(ville.roster.is_empty());
}
