//! Burger product and its fluent builder.

use super::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Most patties a single bun can hold.
pub const MAX_PATTIES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bun {
    Plain,
    Sesame,
    Brioche,
    LettuceWrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Patty {
    Beef,
    Chicken,
    Veggie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cheese {
    Cheddar,
    Swiss,
    American,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topping {
    Lettuce,
    Tomato,
    Onion,
    Pickles,
    Bacon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sauce {
    Ketchup,
    Mustard,
    Mayo,
    Bbq,
}

impl Bun {
    fn price(self) -> u32 {
        match self {
            Self::Plain => 50,
            Self::Sesame => 60,
            Self::Brioche => 90,
            Self::LettuceWrap => 40,
        }
    }
}

impl Patty {
    fn price(self) -> u32 {
        match self {
            Self::Beef => 250,
            Self::Chicken => 220,
            Self::Veggie => 200,
        }
    }
}

impl Topping {
    fn price(self) -> u32 {
        match self {
            Self::Bacon => 120,
            _ => 30,
        }
    }
}

/// The finished product. Only obtainable through [`HamburgerBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Burger {
    bun: Bun,
    patties: Vec<Patty>,
    cheese: Option<Cheese>,
    toppings: Vec<Topping>,
    sauces: Vec<Sauce>,
}

impl Burger {
    pub fn bun(&self) -> Bun {
        self.bun
    }

    pub fn patties(&self) -> &[Patty] {
        &self.patties
    }

    pub fn cheese(&self) -> Option<Cheese> {
        self.cheese
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn sauces(&self) -> &[Sauce] {
        &self.sauces
    }

    /// Price in cents. Cheese is 80, sauces are free.
    pub fn price(&self) -> u32 {
        self.bun.price()
            + self.patties.iter().map(|p| p.price()).sum::<u32>()
            + self.cheese.map_or(0, |_| 80)
            + self.toppings.iter().map(|t| t.price()).sum::<u32>()
    }
}

impl fmt::Display for Burger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} bun, {} patty", self.bun, self.patties.len())?;
        if self.patties.len() != 1 {
            write!(f, "s")?;
        }
        write!(f, " ({:?})", self.patties)?;
        if let Some(cheese) = self.cheese {
            write!(f, ", {:?} cheese", cheese)?;
        }
        if !self.toppings.is_empty() {
            write!(f, ", toppings {:?}", self.toppings)?;
        }
        if !self.sauces.is_empty() {
            write!(f, ", sauces {:?}", self.sauces)?;
        }
        write!(f, " - ${}.{:02}", self.price() / 100, self.price() % 100)
    }
}

/// Fluent builder for [`Burger`].
///
/// # Example
///
/// ```
/// use patternbook::creational::builder::{Bun, Cheese, HamburgerBuilder, Patty, Topping};
///
/// let burger = HamburgerBuilder::new()
///     .bun(Bun::Sesame)
///     .patty(Patty::Beef)
///     .cheese(Cheese::Cheddar)
///     .topping(Topping::Pickles)
///     .build()
///     .unwrap();
///
/// assert_eq!(burger.patties().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HamburgerBuilder {
    bun: Option<Bun>,
    patties: Vec<Patty>,
    cheese: Option<Cheese>,
    toppings: Vec<Topping>,
    sauces: Vec<Sauce>,
}

impl HamburgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bun (required).
    pub fn bun(mut self, bun: Bun) -> Self {
        self.bun = Some(bun);
        self
    }

    /// Add a patty. At least one, at most [`MAX_PATTIES`].
    pub fn patty(mut self, patty: Patty) -> Self {
        self.patties.push(patty);
        self
    }

    /// Set the cheese, replacing any earlier choice.
    pub fn cheese(mut self, cheese: Cheese) -> Self {
        self.cheese = Some(cheese);
        self
    }

    pub fn topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    pub fn sauce(mut self, sauce: Sauce) -> Self {
        self.sauces.push(sauce);
        self
    }

    /// Check every rule, collecting all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let bun_check = if self.bun.is_some() {
            Validation::success(())
        } else {
            Validation::fail(BuildError::MissingBun)
        };

        let patty_check = match self.patties.len() {
            0 => Validation::fail(BuildError::NoPatties),
            n if n > MAX_PATTIES => Validation::fail(BuildError::TooManyPatties {
                count: n,
                max: MAX_PATTIES,
            }),
            _ => Validation::success(()),
        };

        Validation::all_vec(vec![bun_check, patty_check]).map(|_| ())
    }

    /// Build the burger.
    /// A single violation is returned as is; several come back as
    /// [`BuildError::Invalid`].
    pub fn build(self) -> Result<Burger, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            return Err(if errors.len() == 1 {
                errors.remove(0)
            } else {
                BuildError::Invalid(errors)
            });
        }

        let bun = self.bun.ok_or(BuildError::MissingBun)?;
        debug!(?bun, patties = self.patties.len(), "burger assembled");
        Ok(Burger {
            bun,
            patties: self.patties,
            cheese: self.cheese,
            toppings: self.toppings,
            sauces: self.sauces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_bun() {
        let result = HamburgerBuilder::new().patty(Patty::Beef).build();
        assert_eq!(result, Err(BuildError::MissingBun));
    }

    #[test]
    fn builder_requires_patties() {
        let result = HamburgerBuilder::new().bun(Bun::Plain).build();
        assert_eq!(result, Err(BuildError::NoPatties));
    }

    #[test]
    fn builder_limits_patties() {
        let mut builder = HamburgerBuilder::new().bun(Bun::Plain);
        for _ in 0..5 {
            builder = builder.patty(Patty::Beef);
        }
        assert_eq!(
            builder.build(),
            Err(BuildError::TooManyPatties { count: 5, max: 4 })
        );
    }

    #[test]
    fn builder_reports_every_problem_at_once() {
        match HamburgerBuilder::new().build() {
            Err(BuildError::Invalid(errors)) => {
                assert_eq!(errors, vec![BuildError::MissingBun, BuildError::NoPatties]);
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn fluent_api_builds_burger() {
        let burger = HamburgerBuilder::new()
            .bun(Bun::Brioche)
            .patty(Patty::Beef)
            .patty(Patty::Beef)
            .cheese(Cheese::Swiss)
            .topping(Topping::Bacon)
            .sauce(Sauce::Bbq)
            .build()
            .unwrap();

        assert_eq!(burger.bun(), Bun::Brioche);
        assert_eq!(burger.patties(), &[Patty::Beef, Patty::Beef]);
        assert_eq!(burger.cheese(), Some(Cheese::Swiss));
        assert_eq!(burger.sauces(), &[Sauce::Bbq]);
        // 90 + 2 * 250 + 80 + 120
        assert_eq!(burger.price(), 790);
    }

    #[test]
    fn display_includes_price() {
        let burger = HamburgerBuilder::new()
            .bun(Bun::Plain)
            .patty(Patty::Veggie)
            .build()
            .unwrap();
        assert_eq!(burger.to_string(), "Plain bun, 1 patty ([Veggie]) - $2.50");
    }

    #[test]
    fn burger_serializes_correctly() {
        let burger = HamburgerBuilder::new()
            .bun(Bun::Sesame)
            .patty(Patty::Chicken)
            .topping(Topping::Lettuce)
            .build()
            .unwrap();
        let json = serde_json::to_string(&burger).unwrap();
        let back: Burger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, burger);
    }
}
