// 📚 Pattern Catalog
// The demo registry as data: a fixed, ordered list walked by the entry point

use anyhow::Result;

use crate::behavioral::{chain, observer, strategy};
use crate::creational::{abstract_factory, builder, factory, singleton};
use crate::structural::{adapter, composite, decorator, facade};

// ============================================================================
// CATEGORIES
// ============================================================================

/// The three classic groupings, run in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    Creational,
    Structural,
    Behavioral,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 3] = [
        PatternCategory::Creational,
        PatternCategory::Structural,
        PatternCategory::Behavioral,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PatternCategory::Creational => "CREATIONAL PATTERNS",
            PatternCategory::Structural => "STRUCTURAL PATTERNS",
            PatternCategory::Behavioral => "BEHAVIORAL PATTERNS",
        }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// One catalog entry: a named demo and the function that runs it. Every demo
/// takes zero input and writes its walkthrough to stdout.
pub struct PatternEntry {
    pub name: &'static str,
    pub category: PatternCategory,
    pub run: fn() -> Result<()>,
}

/// The full catalog in presentation order.
pub const CATALOG: &[PatternEntry] = &[
    PatternEntry {
        name: "Factory",
        category: PatternCategory::Creational,
        run: factory::run,
    },
    PatternEntry {
        name: "Singleton",
        category: PatternCategory::Creational,
        run: singleton::run,
    },
    PatternEntry {
        name: "Builder",
        category: PatternCategory::Creational,
        run: builder::run,
    },
    PatternEntry {
        name: "Abstract Factory",
        category: PatternCategory::Creational,
        run: abstract_factory::run,
    },
    PatternEntry {
        name: "Adapter",
        category: PatternCategory::Structural,
        run: adapter::run,
    },
    PatternEntry {
        name: "Decorator",
        category: PatternCategory::Structural,
        run: decorator::run,
    },
    PatternEntry {
        name: "Facade",
        category: PatternCategory::Structural,
        run: facade::run,
    },
    PatternEntry {
        name: "Composite",
        category: PatternCategory::Structural,
        run: composite::run,
    },
    PatternEntry {
        name: "Observer",
        category: PatternCategory::Behavioral,
        run: observer::run,
    },
    PatternEntry {
        name: "Strategy",
        category: PatternCategory::Behavioral,
        run: strategy::run,
    },
    PatternEntry {
        name: "Chain of Responsibility",
        category: PatternCategory::Behavioral,
        run: chain::run,
    },
];

// ============================================================================
// SEQUENCING
// ============================================================================

/// Catalog entries for one category, in presentation order.
pub fn entries_for(category: PatternCategory) -> Vec<&'static PatternEntry> {
    CATALOG.iter().filter(|e| e.category == category).collect()
}

/// Run every demo in one category under its numbered section header.
pub fn run_category(category: PatternCategory) -> Result<()> {
    println!("{}", category.title());
    println!("=======================");

    for (position, entry) in entries_for(category).iter().enumerate() {
        println!("\n{}. {} Pattern:", position + 1, entry.name);
        (entry.run)()?;
    }

    Ok(())
}

/// Run the entire catalog, category by category.
pub fn run_all() -> Result<()> {
    for (position, category) in PatternCategory::ALL.iter().enumerate() {
        if position > 0 {
            println!();
        }
        run_category(*category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_pattern() {
        assert_eq!(CATALOG.len(), crate::PATTERNS_TOTAL);
    }

    #[test]
    fn test_category_split() {
        assert_eq!(entries_for(PatternCategory::Creational).len(), 4);
        assert_eq!(entries_for(PatternCategory::Structural).len(), 4);
        assert_eq!(entries_for(PatternCategory::Behavioral).len(), 3);
    }

    #[test]
    fn test_presentation_order_within_categories() {
        let creational: Vec<&str> = entries_for(PatternCategory::Creational)
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            creational,
            vec!["Factory", "Singleton", "Builder", "Abstract Factory"]
        );

        let behavioral: Vec<&str> = entries_for(PatternCategory::Behavioral)
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            behavioral,
            vec!["Observer", "Strategy", "Chain of Responsibility"]
        );
    }

    #[test]
    fn test_every_demo_runs_clean() {
        for entry in CATALOG {
            (entry.run)().unwrap();
        }
    }
}
