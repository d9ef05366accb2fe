// Creational Patterns
// How objects come into existence:
// - factory: tag-keyed vehicle construction
// - singleton: one lazily-built process-wide configuration manager
// - builder: staged computer assembly frozen at build()
// - abstract_factory: matched widget families from bound factories

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod singleton;

pub use abstract_factory::{Button, TextBox, UiFactory, UiFamily};
pub use builder::{Computer, ComputerBuilder};
pub use factory::{build_from_tag, build_vehicle, UnknownVehicleType, Vehicle, VehicleType};
pub use singleton::{ConfigurationManager, SETTING_NOT_FOUND};
