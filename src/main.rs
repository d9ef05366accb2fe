use anyhow::Result;

use design_patterns::{catalog, PATTERNS_TOTAL};

fn main() -> Result<()> {
    println!("🎨 Design Patterns Demonstration");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    catalog::run_all()?;

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 All {} patterns demonstrated successfully!", PATTERNS_TOTAL);

    Ok(())
}
