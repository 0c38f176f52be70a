//! Strategy pattern: a calculator whose operation is swapped at runtime.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StrategyError {
    #[error("No strategy set. Call set_strategy before execute")]
    NotSet,

    #[error("{strategy} overflowed for {a} and {b}")]
    Overflow { strategy: String, a: i64, b: i64 },
}

pub trait Strategy {
    fn name(&self) -> &str;

    /// `None` when the result does not fit in an `i64`.
    fn execute(&self, a: i64, b: i64) -> Option<i64>;
}

pub struct Add;
pub struct Subtract;
pub struct Multiply;

impl Strategy for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn execute(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_add(b)
    }
}

impl Strategy for Subtract {
    fn name(&self) -> &str {
        "subtract"
    }

    fn execute(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_sub(b)
    }
}

impl Strategy for Multiply {
    fn name(&self) -> &str {
        "multiply"
    }

    fn execute(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_mul(b)
    }
}

/// The context.
#[derive(Default)]
pub struct Calculator {
    strategy: Option<Box<dyn Strategy>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        debug!(strategy = strategy.name(), "strategy set");
        self.strategy = Some(strategy);
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_deref().map(|s| s.name())
    }

    pub fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        let strategy = self.strategy.as_deref().ok_or(StrategyError::NotSet)?;
        strategy.execute(a, b).ok_or_else(|| StrategyError::Overflow {
            strategy: strategy.name().to_string(),
            a,
            b,
        })
    }
}
