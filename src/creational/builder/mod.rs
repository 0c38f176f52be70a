//! Builder pattern: assembling a hamburger step by step.
//!
//! [`HamburgerBuilder`] collects ingredients through a fluent API and
//! validates the whole recipe in [`build`](HamburgerBuilder::build). The
//! [`Chef`] director knows a few standard recipes and drives the builder for
//! them.

pub mod error;
mod hamburger;

pub use error::BuildError;
pub use hamburger::{Bun, Burger, Cheese, HamburgerBuilder, Patty, Sauce, Topping, MAX_PATTIES};

/// Director with preset recipes.
pub struct Chef;

impl Chef {
    pub fn cheeseburger() -> Result<Burger, BuildError> {
        HamburgerBuilder::new()
            .bun(Bun::Sesame)
            .patty(Patty::Beef)
            .cheese(Cheese::American)
            .topping(Topping::Pickles)
            .topping(Topping::Onion)
            .sauce(Sauce::Ketchup)
            .sauce(Sauce::Mustard)
            .build()
    }

    pub fn double_bacon() -> Result<Burger, BuildError> {
        HamburgerBuilder::new()
            .bun(Bun::Brioche)
            .patty(Patty::Beef)
            .patty(Patty::Beef)
            .cheese(Cheese::Cheddar)
            .topping(Topping::Bacon)
            .sauce(Sauce::Bbq)
            .build()
    }

    pub fn veggie() -> Result<Burger, BuildError> {
        HamburgerBuilder::new()
            .bun(Bun::LettuceWrap)
            .patty(Patty::Veggie)
            .topping(Topping::Tomato)
            .topping(Topping::Lettuce)
            .sauce(Sauce::Mayo)
            .build()
    }

    /// Every preset, by name.
    pub fn menu() -> Result<Vec<(&'static str, Burger)>, BuildError> {
        Ok(vec![
            ("Cheeseburger", Self::cheeseburger()?),
            ("Double Bacon", Self::double_bacon()?),
            ("Veggie", Self::veggie()?),
        ])
    }
}
