//! Tests for the usage calculator.

use super::*;
use crate::positions::Position;
use crate::projects::Project;
use crate::subbudgets::Subbudget;
use proptest::prelude::*;

fn position(id: i64, subbudget_id: i64, planned: f64, actual: f64, done: bool) -> Position {
    Position {
        id,
        subbudget_id,
        name: format!("position {id}"),
        planned,
        actual,
        done,
    }
}

fn subbudget(id: i64, budget: f64, threshold: f64) -> Subbudget {
    Subbudget {
        id,
        project_id: 1,
        name: format!("sub {id}"),
        budget,
        threshold,
    }
}

#[test]
fn used_amount_follows_done_flag() {
    assert_eq!(used_amount(&position(1, 1, 100.0, 40.0, false)), 100.0);
    assert_eq!(used_amount(&position(1, 1, 100.0, 40.0, true)), 40.0);
}

#[test]
fn compute_used_of_nothing_is_zero() {
    let none: Vec<Position> = Vec::new();
    assert_eq!(compute_used(&none), 0.0);
}

#[test]
fn compute_used_mixes_planned_and_actual() {
    let positions = vec![
        position(1, 1, 100.0, 0.0, false),
        position(2, 1, 200.0, 180.0, true),
        position(3, 1, 50.0, 75.0, true),
    ];
    assert_eq!(compute_used(&positions), 355.0);
}

#[test]
fn warning_boundaries() {
    assert!(compute_warning(450.0, 500.0, 0.8));
    assert!(compute_warning(400.0, 500.0, 0.8));
    assert!(!compute_warning(399.0, 500.0, 0.8));
    assert!(compute_warning(0.0, 500.0, 0.0));
}

#[test]
fn zero_or_negative_budget_never_warns() {
    assert!(!compute_warning(1000.0, 0.0, 0.9));
    assert!(!compute_warning(1000.0, -5.0, 0.0));
}

#[test]
fn percent_used_guards_empty_budget() {
    assert_eq!(percent_used(50.0, 200.0), 25.0);
    assert_eq!(percent_used(50.0, 0.0), 0.0);
}

#[test]
fn subbudget_usage_ignores_foreign_positions() {
    let positions = vec![
        position(1, 10, 100.0, 0.0, false),
        position(2, 11, 999.0, 0.0, false),
    ];
    let view = subbudget_usage(subbudget(10, 200.0, 0.9), &positions);
    assert_eq!(view.used, 100.0);
    assert_eq!(view.percent_used, 50.0);
    assert!(!view.warning);
}

#[test]
fn subbudgets_usage_preserves_order_and_fills_gaps() {
    let positions = vec![position(1, 2, 30.0, 0.0, false)];
    let views = subbudgets_usage(
        vec![subbudget(3, 10.0, 0.9), subbudget(2, 10.0, 0.9)],
        &positions,
    );
    assert_eq!(views[0].subbudget.id, 3);
    assert_eq!(views[0].used, 0.0);
    assert_eq!(views[1].used, 30.0);
    assert!(views[1].warning);
}

#[test]
fn scenario_project_rollup() {
    let project = Project {
        id: 1,
        name: "House".to_string(),
        total_budget: 1000.0,
    };
    let positions = vec![position(1, 5, 450.0, 0.0, false)];
    let subs = subbudgets_usage(vec![subbudget(5, 500.0, 0.8)], &positions);

    assert_eq!(subs[0].used, 450.0);
    assert!(subs[0].warning);

    let summary = project_summary(project, subs);
    assert_eq!(summary.used, 450.0);
    assert_eq!(summary.remaining, 550.0);
    assert_eq!(summary.percent_used, 45.0);
    assert_eq!(summary.warning_count, 1);
}

#[test]
fn summary_serializes_flat_project_fields() {
    let project = Project {
        id: 4,
        name: "Flat".to_string(),
        total_budget: 10.0,
    };
    let json = serde_json::to_value(project_summary(project, Vec::new())).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["total_budget"], 10.0);
    assert_eq!(json["used"], 0.0);
    assert!(json["subbudgets"].as_array().unwrap().is_empty());
}

fn amount() -> impl Strategy<Value = f64> {
    (0u32..1_000_000).prop_map(|cents| f64::from(cents) / 100.0)
}

fn positions_strategy() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec((1i64..4, amount(), amount(), any::<bool>()), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (sub, planned, actual, done))| {
                position(i as i64 + 1, sub, planned, actual, done)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn used_amount_is_actual_iff_done(planned in amount(), actual in amount(), done in any::<bool>()) {
        let p = position(1, 1, planned, actual, done);
        prop_assert_eq!(used_amount(&p), if done { actual } else { planned });
    }

    #[test]
    fn subbudget_used_is_sum_over_own_positions(positions in positions_strategy()) {
        let views = subbudgets_usage(
            (1..4).map(|id| subbudget(id, 100.0, 0.9)).collect(),
            &positions,
        );
        for view in &views {
            let expected: f64 = positions
                .iter()
                .filter(|p| p.subbudget_id == view.subbudget.id)
                .map(used_amount)
                .sum();
            prop_assert!((view.used - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn warning_matches_definition(used in amount(), budget in -100.0f64..10_000.0, threshold in 0.0f64..2.0) {
        let expected = budget > 0.0 && used / budget >= threshold;
        prop_assert_eq!(compute_warning(used, budget, threshold), expected);
        if budget <= 0.0 {
            prop_assert!(!compute_warning(used, budget, threshold));
        }
    }
}
