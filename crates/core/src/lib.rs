//! Budgetbook Core - Domain entities, aggregation, services, and traits.
//!
//! This crate contains the business logic for Budgetbook: projects own
//! sub-budgets, sub-budgets own positions, and spend figures are derived
//! from positions on every read. It is database-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod positions;
pub mod projects;
pub mod subbudgets;
pub mod usage;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
