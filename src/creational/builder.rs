// 🖥️ Computer Builder
// Staged construction with a consuming fluent builder, frozen at build()

use serde::{Deserialize, Serialize};

// ============================================================================
// PRODUCT
// ============================================================================

/// Finished machine. Immutable once built; only the builder assembles one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    processor: String,
    memory: String,
    storage: String,
    graphics_card: String,
}

impl Computer {
    pub fn builder() -> ComputerBuilder {
        ComputerBuilder::new()
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn graphics_card(&self) -> &str {
        &self.graphics_card
    }
}

impl std::fmt::Display for Computer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CPU: {}, RAM: {}, Storage: {}, GPU: {}",
            self.processor, self.memory, self.storage, self.graphics_card
        )
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Accumulates a configuration and hands over an immutable [`Computer`] at
/// `build()`. Setters take and return the builder by value, so each builder
/// constructs exactly one machine. Fields never set keep their defaults:
/// "Default" for parts, "Integrated" for the graphics card.
#[derive(Debug, Clone)]
pub struct ComputerBuilder {
    processor: String,
    memory: String,
    storage: String,
    graphics_card: String,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        ComputerBuilder {
            processor: "Default".to_string(),
            memory: "Default".to_string(),
            storage: "Default".to_string(),
            graphics_card: "Integrated".to_string(),
        }
    }

    pub fn processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = processor.into();
        self
    }

    pub fn memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = memory.into();
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }

    pub fn graphics_card(mut self, graphics_card: impl Into<String>) -> Self {
        self.graphics_card = graphics_card.into();
        self
    }

    pub fn build(self) -> Computer {
        Computer {
            processor: self.processor,
            memory: self.memory,
            storage: self.storage,
            graphics_card: self.graphics_card,
        }
    }
}

impl Default for ComputerBuilder {
    fn default() -> Self {
        ComputerBuilder::new()
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: a fully specified gaming machine and an office
/// machine that leans on the graphics-card default.
pub fn run() -> anyhow::Result<()> {
    println!("   Building computers using Builder Pattern...");

    let gaming_computer = Computer::builder()
        .processor("Intel i9-13900K")
        .memory("32GB DDR5")
        .storage("2TB NVMe SSD")
        .graphics_card("RTX 4090")
        .build();

    let office_computer = Computer::builder()
        .processor("Intel i5-13400")
        .memory("16GB DDR4")
        .storage("512GB SSD")
        .build();

    println!("   Gaming PC: {}", gaming_computer);
    println!("   Office PC: {}", office_computer);

    Ok(())
}
