//! Lenient parsing of request values.
//!
//! Clients send amounts either as JSON numbers or as the raw text of a form
//! field, and flags as booleans or `0`/`1`. These helpers turn such values
//! into plain `f64`/`bool`, applying defaults for missing values and
//! rejecting anything that is not a number.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result, ValidationError};

/// A numeric request value: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

/// A boolean request value: `true`/`false`, `0`/`1`, or their string forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagInput {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for FlagInput {
    fn from(value: bool) -> Self {
        FlagInput::Bool(value)
    }
}

fn invalid(field: &'static str, expected: &'static str) -> Error {
    Error::Validation(ValidationError::InvalidField { field, expected })
}

/// Resolves an optional number, falling back to `default` when the value is
/// absent or a blank string. Values beyond [`MAX_AMOUNT`] are rejected.
pub fn number_or(input: Option<&NumberInput>, field: &'static str, default: f64) -> Result<f64> {
    let value = match input {
        None => return Ok(default),
        Some(NumberInput::Number(n)) => *n,
        Some(NumberInput::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(default);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| invalid(field, "a number"))?
        }
    };

    if !value.is_finite() {
        return Err(invalid(field, "a finite number"));
    }
    if value.abs() > MAX_AMOUNT {
        return Err(invalid(field, "between -1e15 and 1e15"));
    }
    Ok(value)
}

/// Like [`number_or`], additionally rejecting negative values.
pub fn non_negative_number_or(
    input: Option<&NumberInput>,
    field: &'static str,
    default: f64,
) -> Result<f64> {
    let value = number_or(input, field, default)?;
    if value < 0.0 {
        return Err(invalid(field, "zero or greater"));
    }
    Ok(value)
}

/// Resolves an optional flag, falling back to `default` when absent.
pub fn flag_or(input: Option<&FlagInput>, field: &'static str, default: bool) -> Result<bool> {
    match input {
        None => Ok(default),
        Some(FlagInput::Bool(b)) => Ok(*b),
        Some(FlagInput::Number(n)) if *n == 0.0 => Ok(false),
        Some(FlagInput::Number(n)) if *n == 1.0 => Ok(true),
        Some(FlagInput::Number(_)) => Err(invalid(field, "a boolean")),
        Some(FlagInput::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(field, "a boolean")),
        },
    }
}

/// Returns the trimmed name, or a validation error when it is missing or blank.
pub fn required_name(name: Option<&str>) -> Result<String> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(Error::Validation(ValidationError::MissingField(
            "name".to_string(),
        ))),
    }
}
