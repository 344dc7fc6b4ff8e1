//! Derived spend figures.
//!
//! Nothing computed here is ever stored: every read path loads the current
//! positions and runs them through these functions again.

use std::collections::HashMap;

use crate::positions::Position;
use crate::projects::{Project, ProjectSummary};
use crate::subbudgets::{Subbudget, SubbudgetWithUsage};

/// Effective spend of one position: the actual amount once it is done,
/// the planned amount until then.
pub fn used_amount(position: &Position) -> f64 {
    if position.done {
        position.actual
    } else {
        position.planned
    }
}

/// Sum of [`used_amount`] over `positions`.
pub fn compute_used<'a, I>(positions: I) -> f64
where
    I: IntoIterator<Item = &'a Position>,
{
    positions.into_iter().map(used_amount).sum()
}

/// Whether `used` has reached `threshold` (a fraction) of `budget`.
///
/// A zero or negative budget never warns.
pub fn compute_warning(used: f64, budget: f64, threshold: f64) -> bool {
    budget > 0.0 && used / budget >= threshold
}

/// `used` as a percentage of `budget`, or 0 when there is no budget.
pub fn percent_used(used: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        used / budget * 100.0
    } else {
        0.0
    }
}

/// Attaches usage to a single sub-budget. Positions belonging to other
/// sub-budgets are ignored.
pub fn subbudget_usage(subbudget: Subbudget, positions: &[Position]) -> SubbudgetWithUsage {
    let used = compute_used(
        positions
            .iter()
            .filter(|p| p.subbudget_id == subbudget.id),
    );
    with_used(subbudget, used)
}

/// Attaches usage to each sub-budget, using only the positions that
/// reference it. Input order of `subbudgets` is preserved.
pub fn subbudgets_usage(
    subbudgets: Vec<Subbudget>,
    positions: &[Position],
) -> Vec<SubbudgetWithUsage> {
    let mut used_by_subbudget: HashMap<i64, f64> = HashMap::new();
    for position in positions {
        *used_by_subbudget.entry(position.subbudget_id).or_insert(0.0) += used_amount(position);
    }

    subbudgets
        .into_iter()
        .map(|subbudget| {
            let used = used_by_subbudget
                .get(&subbudget.id)
                .copied()
                .unwrap_or(0.0);
            with_used(subbudget, used)
        })
        .collect()
}

fn with_used(subbudget: Subbudget, used: f64) -> SubbudgetWithUsage {
    SubbudgetWithUsage {
        percent_used: percent_used(used, subbudget.budget),
        warning: compute_warning(used, subbudget.budget, subbudget.threshold),
        used,
        subbudget,
    }
}

/// Rolls sub-budget usage up to the project level.
pub fn project_summary(project: Project, subbudgets: Vec<SubbudgetWithUsage>) -> ProjectSummary {
    let used: f64 = subbudgets.iter().map(|s| s.used).sum();
    let warning_count = subbudgets.iter().filter(|s| s.warning).count();

    ProjectSummary {
        remaining: project.total_budget - used,
        percent_used: percent_used(used, project.total_budget),
        subbudget_count: subbudgets.len(),
        warning_count,
        used,
        project,
        subbudgets,
    }
}
