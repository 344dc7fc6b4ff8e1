//! Sub-budget domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AMOUNT, DEFAULT_SUBBUDGET_THRESHOLD};
use crate::errors::Result;
use crate::utils::{non_negative_number_or, number_or, required_name, NumberInput};

/// Domain model representing a sub-budget of a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subbudget {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}

/// A sub-budget with the spend derived from its positions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubbudgetWithUsage {
    #[serde(flatten)]
    pub subbudget: Subbudget,
    pub used: f64,
    pub percent_used: f64,
    pub warning: bool,
}

/// Request body for creating or replacing a sub-budget, before coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubbudgetPayload {
    pub name: Option<String>,
    pub budget: Option<NumberInput>,
    pub threshold: Option<NumberInput>,
}

impl SubbudgetPayload {
    pub fn new(name: impl Into<String>, budget: f64, threshold: Option<f64>) -> Self {
        Self {
            name: Some(name.into()),
            budget: Some(NumberInput::Number(budget)),
            threshold: threshold.map(NumberInput::Number),
        }
    }

    /// Coerces the payload into storable values. A missing threshold takes
    /// the default of 0.9.
    pub fn validate(&self) -> Result<SubbudgetValues> {
        Ok(SubbudgetValues {
            name: required_name(self.name.as_deref())?,
            budget: number_or(self.budget.as_ref(), "budget", DEFAULT_AMOUNT)?,
            threshold: non_negative_number_or(
                self.threshold.as_ref(),
                "threshold",
                DEFAULT_SUBBUDGET_THRESHOLD,
            )?,
        })
    }
}

/// Validated user-editable fields of a sub-budget.
#[derive(Debug, Clone, PartialEq)]
pub struct SubbudgetValues {
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}

impl SubbudgetValues {
    pub fn for_project(self, project_id: i64) -> NewSubbudget {
        NewSubbudget {
            project_id,
            name: self.name,
            budget: self.budget,
            threshold: self.threshold,
        }
    }

    pub fn into_update(self, id: i64) -> SubbudgetUpdate {
        SubbudgetUpdate {
            id,
            name: self.name,
            budget: self.budget,
            threshold: self.threshold,
        }
    }
}

/// Validated input for inserting a sub-budget under a project
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubbudget {
    pub project_id: i64,
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}

/// Validated full replacement of a sub-budget. The owning project never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SubbudgetUpdate {
    pub id: i64,
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}
