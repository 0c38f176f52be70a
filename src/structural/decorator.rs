//! Decorator pattern: coffee with stackable extras.
//!
//! Each decorator wraps any [`Coffee`], including another decorator or a
//! boxed trait object, and adjusts cost and description.

/// Prices are in cents.
pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> u32 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        200
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

macro_rules! coffee_decorator {
    ($(#[$meta:meta])* $name:ident, $label:literal, $price:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<C: Coffee> {
            inner: C,
        }

        impl<C: Coffee> $name<C> {
            pub fn new(inner: C) -> Self {
                Self { inner }
            }
        }

        impl<C: Coffee> Coffee for $name<C> {
            fn cost(&self) -> u32 {
                self.inner.cost() + $price
            }

            fn description(&self) -> String {
                format!("{}, {}", self.inner.description(), $label)
            }
        }
    };
}

coffee_decorator!(
    /// Adds 50 cents.
    Milk, "milk", 50
);
coffee_decorator!(
    /// Adds 20 cents.
    Sugar, "sugar", 20
);
coffee_decorator!(
    /// Adds 70 cents.
    WhippedCream, "whipped cream", 70
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_coffee() {
        assert_eq!(SimpleCoffee.cost(), 200);
        assert_eq!(SimpleCoffee.description(), "Coffee");
    }

    #[test]
    fn decorators_stack() {
        let coffee = WhippedCream::new(Sugar::new(Milk::new(SimpleCoffee)));
        assert_eq!(coffee.cost(), 340);
        assert_eq!(coffee.description(), "Coffee, milk, sugar, whipped cream");
    }

    #[test]
    fn same_decorator_can_repeat() {
        let coffee = Sugar::new(Sugar::new(SimpleCoffee));
        assert_eq!(coffee.cost(), 240);
    }

    #[test]
    fn decorators_wrap_trait_objects() {
        let mut order: Box<dyn Coffee> = Box::new(SimpleCoffee);
        order = Box::new(Milk::new(order));
        order = Box::new(Milk::new(order));
        assert_eq!(order.cost(), 300);
        assert_eq!(order.description(), "Coffee, milk, milk");
    }
}
