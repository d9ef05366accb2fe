// ☕ Coffee Layers
// Each wrapper exclusively owns the drink beneath it and adds a fixed cost

use serde::{Deserialize, Serialize};

// ============================================================================
// COFFEE CHAIN
// ============================================================================

/// A drink is either the plain base or a layer wrapping exactly one inner
/// drink. Layers nest into a singly-linked chain, never a tree; cost and
/// description are computed by delegating inward and adding the layer's
/// fixed increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Coffee {
    Simple,
    Milk(Box<Coffee>),
    Sugar(Box<Coffee>),
    WhippedCream(Box<Coffee>),
}

impl Coffee {
    pub fn simple() -> Self {
        Coffee::Simple
    }

    pub fn with_milk(self) -> Self {
        Coffee::Milk(Box::new(self))
    }

    pub fn with_sugar(self) -> Self {
        Coffee::Sugar(Box::new(self))
    }

    pub fn with_whipped_cream(self) -> Self {
        Coffee::WhippedCream(Box::new(self))
    }

    pub fn cost(&self) -> f64 {
        match self {
            Coffee::Simple => 2.00,
            Coffee::Milk(inner) => inner.cost() + 0.50,
            Coffee::Sugar(inner) => inner.cost() + 0.25,
            Coffee::WhippedCream(inner) => inner.cost() + 0.75,
        }
    }

    /// Suffixes concatenate inside-out, so wrap order is visible here.
    pub fn description(&self) -> String {
        match self {
            Coffee::Simple => "Simple coffee".to_string(),
            Coffee::Milk(inner) => format!("{}, milk", inner.description()),
            Coffee::Sugar(inner) => format!("{}, sugar", inner.description()),
            Coffee::WhippedCream(inner) => format!("{}, whipped cream", inner.description()),
        }
    }

    /// Number of layers around the base.
    pub fn layers(&self) -> usize {
        match self {
            Coffee::Simple => 0,
            Coffee::Milk(inner) | Coffee::Sugar(inner) | Coffee::WhippedCream(inner) => {
                inner.layers() + 1
            }
        }
    }
}

// ============================================================================
// DEMO
// ============================================================================

fn print_coffee(coffee: &Coffee) {
    println!(
        "   Cost: ${:.2}, Description: {}",
        coffee.cost(),
        coffee.description()
    );
}

/// Console walkthrough: the base drink gains milk, sugar and whipped cream
/// one layer at a time.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Decorator Pattern...");

    let coffee = Coffee::simple();
    print_coffee(&coffee);

    let coffee = coffee.with_milk();
    print_coffee(&coffee);

    let coffee = coffee.with_sugar();
    print_coffee(&coffee);

    let coffee = coffee.with_whipped_cream();
    print_coffee(&coffee);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milk_then_sugar() {
        let coffee = Coffee::simple().with_milk().with_sugar();

        assert_eq!(coffee.cost(), 2.75);
        assert_eq!(coffee.description(), "Simple coffee, milk, sugar");
    }

    #[test]
    fn test_wrap_order_changes_description_not_cost() {
        let milk_first = Coffee::simple().with_milk().with_sugar();
        let sugar_first = Coffee::simple().with_sugar().with_milk();

        assert_eq!(milk_first.cost(), sugar_first.cost());
        assert_eq!(sugar_first.description(), "Simple coffee, sugar, milk");
        assert_ne!(milk_first.description(), sugar_first.description());
    }

    #[test]
    fn test_base_drink() {
        let coffee = Coffee::simple();
        assert_eq!(coffee.cost(), 2.00);
        assert_eq!(coffee.description(), "Simple coffee");
        assert_eq!(coffee.layers(), 0);
    }

    #[test]
    fn test_full_stack() {
        let coffee = Coffee::simple()
            .with_milk()
            .with_sugar()
            .with_whipped_cream();

        assert_eq!(coffee.cost(), 3.50);
        assert_eq!(
            coffee.description(),
            "Simple coffee, milk, sugar, whipped cream"
        );
        assert_eq!(coffee.layers(), 3);
    }
}
