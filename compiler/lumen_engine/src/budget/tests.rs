use super::*;

#[test]
fn default_budget_limits_time_and_matches() {
    let budget = ScanBudget::default();
    assert_eq!(budget.time_limit, Some(ScanBudget::DEFAULT_TIME_LIMIT));
    assert_eq!(budget.max_matches, Some(ScanBudget::DEFAULT_MAX_MATCHES));
}

#[test]
fn unlimited_guard_never_trips() {
    let mut guard = ScanGuard::new(&ScanBudget::UNLIMITED);
    for _ in 0..10_000 {
        assert!(guard.step().is_ok());
        assert!(guard.record_match().is_ok());
    }
    assert_eq!(guard.steps(), 10_000);
    assert_eq!(guard.matches(), 10_000);
}

#[test]
fn match_limit_trips_after_max() {
    let budget = ScanBudget {
        time_limit: None,
        max_matches: Some(2),
    };
    let mut guard = ScanGuard::new(&budget);
    assert!(guard.record_match().is_ok());
    assert!(guard.record_match().is_ok());

    let Err(timeout) = guard.record_match() else {
        panic!("third match must exceed a limit of two");
    };
    assert_eq!(timeout.matches, 3);
}

#[test]
fn zero_time_limit_trips_on_first_step() {
    let budget = ScanBudget {
        time_limit: Some(Duration::ZERO),
        max_matches: None,
    };
    let mut guard = ScanGuard::new(&budget);
    let Err(timeout) = guard.step() else {
        panic!("a zero time limit is already exhausted");
    };
    assert_eq!(timeout.steps, 1);
    assert_eq!(timeout.matches, 0);
}

#[test]
fn huge_time_limit_is_treated_as_unlimited() {
    let budget = ScanBudget {
        time_limit: Some(Duration::MAX),
        max_matches: None,
    };
    let mut guard = ScanGuard::new(&budget);
    assert!(guard.step().is_ok());
}

#[test]
fn timeout_message_mentions_counts() {
    let timeout = ScanTimeout {
        elapsed: Duration::from_millis(5),
        matches: 7,
        steps: 9,
    };
    let msg = timeout.to_string();
    assert!(msg.contains("7 matches"));
    assert!(msg.contains("9 searches"));
}
