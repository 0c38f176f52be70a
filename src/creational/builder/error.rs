//! Build errors for the hamburger builder.

use thiserror::Error;

/// Problems found when validating a burger recipe.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Bun not specified. Call .bun(bun) before .build()")]
    MissingBun,

    #[error("No patties added. Add at least one with .patty(patty)")]
    NoPatties,

    #[error("Too many patties ({count}), at most {max} fit in a bun")]
    TooManyPatties { count: usize, max: usize },

    #[error("Burger recipe has {} problems", .0.len())]
    Invalid(Vec<BuildError>),
}
