/// Fraction of a sub-budget at which a warning is raised when none is given.
pub const DEFAULT_SUBBUDGET_THRESHOLD: f64 = 0.9;

/// Default spend recorded on a new position.
pub const DEFAULT_POSITION_ACTUAL: f64 = 0.0;

/// Amount used for budget figures that are missing from a request.
pub const DEFAULT_AMOUNT: f64 = 0.0;

/// Largest magnitude accepted for any amount. Sums over positions stay finite
/// well below this bound.
pub const MAX_AMOUNT: f64 = 1e15;
