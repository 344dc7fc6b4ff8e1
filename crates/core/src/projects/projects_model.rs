//! Project domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AMOUNT;
use crate::errors::Result;
use crate::subbudgets::SubbudgetWithUsage;
use crate::utils::{non_negative_number_or, required_name, NumberInput};

/// Domain model representing a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub total_budget: f64,
}

/// Request body for creating or replacing a project, before coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub name: Option<String>,
    pub total_budget: Option<NumberInput>,
}

impl ProjectPayload {
    pub fn new(name: impl Into<String>, total_budget: f64) -> Self {
        Self {
            name: Some(name.into()),
            total_budget: Some(NumberInput::Number(total_budget)),
        }
    }

    /// Coerces the payload into storable values.
    pub fn validate(&self) -> Result<NewProject> {
        Ok(NewProject {
            name: required_name(self.name.as_deref())?,
            total_budget: non_negative_number_or(
                self.total_budget.as_ref(),
                "total_budget",
                DEFAULT_AMOUNT,
            )?,
        })
    }
}

/// Validated input for inserting a project
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub total_budget: f64,
}

/// Validated full replacement of an existing project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectUpdate {
    pub id: i64,
    pub name: String,
    pub total_budget: f64,
}

impl NewProject {
    pub fn into_update(self, id: i64) -> ProjectUpdate {
        ProjectUpdate {
            id,
            name: self.name,
            total_budget: self.total_budget,
        }
    }
}

/// A project together with the spend rolled up from its sub-budgets.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub used: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub subbudget_count: usize,
    pub warning_count: usize,
    pub subbudgets: Vec<SubbudgetWithUsage>,
}
