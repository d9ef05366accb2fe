// Structural Patterns
// How objects fit together:
// - adapter: legacy payment gateway behind the modern contract
// - decorator: coffee layers, each owning the drink beneath it
// - facade: one entry point sequencing four home subsystems
// - composite: a file tree where leaves and directories share one shape

pub mod adapter;
pub mod composite;
pub mod decorator;
pub mod facade;

pub use adapter::{
    checkout, LegacyPaymentAdapter, LegacyPaymentGateway, ModernPaymentProcessor, PaymentProcessor,
};
pub use composite::{Directory, FsEntry};
pub use decorator::Coffee;
pub use facade::{AudioSystem, HomeAutomationFacade, Lights, SecuritySystem, Thermostat};
