//! Aggregation engine - pure spend/threshold computations over loaded rows.

mod usage_calculator;

#[cfg(test)]
mod usage_calculator_tests;

pub use usage_calculator::{
    compute_used, compute_warning, percent_used, project_summary, subbudget_usage,
    subbudgets_usage, used_amount,
};
