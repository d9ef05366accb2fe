// Design Pattern Catalog - Core Library
// Exposes every pattern module for the CLI runner and tests

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod structural;

// Re-export commonly used types
pub use behavioral::{
    DisplayKind, PaymentMethod, PaymentReceipt, ShoppingCart, SupportChain, SupportLevel,
    SupportTicket, TicketOutcome, TicketPriority, WeatherSample, WeatherStation,
};
pub use catalog::{entries_for, run_all, run_category, PatternCategory, PatternEntry, CATALOG};
pub use creational::{
    build_from_tag, build_vehicle, Button, Computer, ComputerBuilder, ConfigurationManager,
    TextBox, UiFactory, UiFamily, UnknownVehicleType, Vehicle, VehicleType, SETTING_NOT_FOUND,
};
pub use structural::{
    checkout, Coffee, Directory, FsEntry, HomeAutomationFacade, LegacyPaymentAdapter,
    LegacyPaymentGateway, ModernPaymentProcessor, PaymentProcessor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Patterns in the catalog
pub const PATTERNS_TOTAL: usize = 11;

/// Number of demos currently registered
pub fn patterns_registered() -> usize {
    catalog::CATALOG.len()
}
