//! SQLite storage implementation for Budgetbook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `budgetbook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for projects, sub-budgets and positions
//! - Database-specific model types (with Diesel derives)
//!
//! Deleting a project or sub-budget relies on the `ON DELETE CASCADE` foreign
//! keys declared in the migrations, so every pooled connection runs with
//! `PRAGMA foreign_keys = ON`.
//!
//! ```text
//!          core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod positions;
pub mod projects;
pub mod subbudgets;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from budgetbook-core for convenience
pub use budgetbook_core::errors::{DatabaseError, Error, Result};
