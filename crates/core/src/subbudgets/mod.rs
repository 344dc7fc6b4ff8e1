//! Sub-budgets module - domain models, services, and traits.

mod subbudgets_model;
mod subbudgets_service;
mod subbudgets_traits;

#[cfg(test)]
mod subbudgets_service_tests;

pub use subbudgets_model::{
    NewSubbudget, Subbudget, SubbudgetPayload, SubbudgetUpdate, SubbudgetValues,
    SubbudgetWithUsage,
};
pub use subbudgets_service::SubbudgetService;
pub use subbudgets_traits::{SubbudgetRepositoryTrait, SubbudgetServiceTrait};
