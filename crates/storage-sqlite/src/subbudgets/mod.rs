//! SQLite storage implementation for sub-budgets.

mod model;
mod repository;

pub use model::{NewSubbudgetDB, SubbudgetDB};
pub use repository::SubbudgetRepository;
