use budgetbook_core::positions as core_positions;
use budgetbook_core::projects as core_projects;
use budgetbook_core::subbudgets as core_subbudgets;
use budgetbook_core::usage::used_amount;
use budgetbook_core::utils::{FlagInput, NumberInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub total_budget: f64,
}

impl From<core_projects::Project> for Project {
    fn from(p: core_projects::Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            total_budget: p.total_budget,
        }
    }
}

/// Sub-budget as returned by the API, with spend derived from its positions.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Subbudget {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
    pub used: f64,
    pub percent_used: f64,
    pub warning: bool,
}

impl From<core_subbudgets::SubbudgetWithUsage> for Subbudget {
    fn from(s: core_subbudgets::SubbudgetWithUsage) -> Self {
        Self {
            id: s.subbudget.id,
            project_id: s.subbudget.project_id,
            name: s.subbudget.name,
            budget: s.subbudget.budget,
            threshold: s.subbudget.threshold,
            used: s.used,
            percent_used: s.percent_used,
            warning: s.warning,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Position {
    pub id: i64,
    pub subbudget_id: i64,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
    /// `actual` once the position is done, `planned` before that.
    pub used_amount: f64,
}

impl From<core_positions::Position> for Position {
    fn from(p: core_positions::Position) -> Self {
        let used_amount = used_amount(&p);
        Self {
            id: p.id,
            subbudget_id: p.subbudget_id,
            name: p.name,
            planned: p.planned,
            actual: p.actual,
            done: p.done,
            used_amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    pub total_budget: f64,
    pub used: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub subbudget_count: usize,
    pub warning_count: usize,
    pub subbudgets: Vec<Subbudget>,
}

impl From<core_projects::ProjectSummary> for ProjectSummary {
    fn from(s: core_projects::ProjectSummary) -> Self {
        Self {
            id: s.project.id,
            name: s.project.name,
            total_budget: s.project.total_budget,
            used: s.used,
            remaining: s.remaining,
            percent_used: s.percent_used,
            subbudget_count: s.subbudget_count,
            warning_count: s.warning_count,
            subbudgets: s.subbudgets.into_iter().map(Subbudget::from).collect(),
        }
    }
}

// Request bodies. Amounts may arrive as numbers or numeric strings, so the
// schema type is documented separately from the Rust type.

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct ProjectInput {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub total_budget: Option<NumberInput>,
}

impl From<ProjectInput> for core_projects::ProjectPayload {
    fn from(input: ProjectInput) -> Self {
        Self {
            name: input.name,
            total_budget: input.total_budget,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct SubbudgetInput {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub budget: Option<NumberInput>,
    /// Defaults to 0.9.
    #[schema(value_type = Option<f64>)]
    pub threshold: Option<NumberInput>,
}

impl From<SubbudgetInput> for core_subbudgets::SubbudgetPayload {
    fn from(input: SubbudgetInput) -> Self {
        Self {
            name: input.name,
            budget: input.budget,
            threshold: input.threshold,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct PositionInput {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub planned: Option<NumberInput>,
    #[schema(value_type = Option<f64>)]
    pub actual: Option<NumberInput>,
    #[schema(value_type = Option<bool>)]
    pub done: Option<FlagInput>,
}

impl From<PositionInput> for core_positions::PositionPayload {
    fn from(input: PositionInput) -> Self {
        Self {
            name: input.name,
            planned: input.planned,
            actual: input.actual,
            done: input.done,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct IdResponse {
    pub id: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
