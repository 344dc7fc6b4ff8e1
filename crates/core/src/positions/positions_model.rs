//! Position domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AMOUNT, DEFAULT_POSITION_ACTUAL};
use crate::errors::Result;
use crate::utils::{flag_or, number_or, required_name, FlagInput, NumberInput};

/// Domain model representing a line item of a sub-budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub id: i64,
    pub subbudget_id: i64,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}

/// Request body for creating or replacing a position, before coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionPayload {
    pub name: Option<String>,
    pub planned: Option<NumberInput>,
    pub actual: Option<NumberInput>,
    pub done: Option<FlagInput>,
}

impl PositionPayload {
    pub fn new(name: impl Into<String>, planned: f64, actual: f64, done: bool) -> Self {
        Self {
            name: Some(name.into()),
            planned: Some(NumberInput::Number(planned)),
            actual: Some(NumberInput::Number(actual)),
            done: Some(FlagInput::Bool(done)),
        }
    }

    /// Coerces the payload into storable values; `actual` defaults to 0 and
    /// `done` to false.
    pub fn validate(&self) -> Result<PositionValues> {
        Ok(PositionValues {
            name: required_name(self.name.as_deref())?,
            planned: number_or(self.planned.as_ref(), "planned", DEFAULT_AMOUNT)?,
            actual: number_or(self.actual.as_ref(), "actual", DEFAULT_POSITION_ACTUAL)?,
            done: flag_or(self.done.as_ref(), "done", false)?,
        })
    }
}

/// Validated user-editable fields of a position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValues {
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}

impl PositionValues {
    pub fn for_subbudget(self, subbudget_id: i64) -> NewPosition {
        NewPosition {
            subbudget_id,
            name: self.name,
            planned: self.planned,
            actual: self.actual,
            done: self.done,
        }
    }

    pub fn into_update(self, id: i64) -> PositionUpdate {
        PositionUpdate {
            id,
            name: self.name,
            planned: self.planned,
            actual: self.actual,
            done: self.done,
        }
    }
}

/// Validated input for inserting a position under a sub-budget
#[derive(Debug, Clone, PartialEq)]
pub struct NewPosition {
    pub subbudget_id: i64,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}

/// Validated full replacement of a position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionUpdate {
    pub id: i64,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}
