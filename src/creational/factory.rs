// 🚗 Vehicle Factory
// Tag-keyed construction over a closed set of vehicle variants

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// TAGS
// ============================================================================

/// The enumerated tag set the factory dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleType {
    pub fn tag(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Truck => "truck",
        }
    }
}

/// Raised when a textual tag names no known vehicle. Fatal to the call that
/// supplied it; there is no retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVehicleType {
    pub tag: String,
}

impl std::fmt::Display for UnknownVehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown vehicle type: '{}'", self.tag)
    }
}

impl std::error::Error for UnknownVehicleType {}

impl FromStr for VehicleType {
    type Err = UnknownVehicleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(VehicleType::Car),
            "motorcycle" => Ok(VehicleType::Motorcycle),
            "truck" => Ok(VehicleType::Truck),
            other => Err(UnknownVehicleType {
                tag: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// PRODUCTS
// ============================================================================

/// Concrete vehicles the factory can produce. No further lifecycle: a
/// vehicle only describes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vehicle {
    Car,
    Motorcycle,
    Truck,
}

impl Vehicle {
    pub fn info(&self) -> &'static str {
        match self {
            Vehicle::Car => "Car - 4 wheels, enclosed cabin",
            Vehicle::Motorcycle => "Motorcycle - 2 wheels, open design",
            Vehicle::Truck => "Truck - 6+ wheels, cargo area",
        }
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Static dispatch over the closed tag set.
pub fn build_vehicle(kind: VehicleType) -> Vehicle {
    match kind {
        VehicleType::Car => Vehicle::Car,
        VehicleType::Motorcycle => Vehicle::Motorcycle,
        VehicleType::Truck => Vehicle::Truck,
    }
}

/// Textual entry point: parse the tag, then build. An unrecognized tag
/// fails immediately with [`UnknownVehicleType`].
pub fn build_from_tag(tag: &str) -> Result<Vehicle, UnknownVehicleType> {
    tag.parse().map(build_vehicle)
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: build one vehicle per known tag, then show a tag the
/// factory refuses.
pub fn run() -> anyhow::Result<()> {
    println!("   Creating vehicles using Factory Pattern...");

    for tag in ["car", "motorcycle", "truck"] {
        let vehicle = build_from_tag(tag)?;
        println!("   Created: {}", vehicle.info());
    }

    if let Err(err) = build_from_tag("hovercraft") {
        println!("   ❌ Rejected: {}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_builds_its_variant() {
        assert_eq!(build_vehicle(VehicleType::Car), Vehicle::Car);
        assert_eq!(build_vehicle(VehicleType::Motorcycle), Vehicle::Motorcycle);
        assert_eq!(build_vehicle(VehicleType::Truck), Vehicle::Truck);
    }

    #[test]
    fn test_textual_tags_round_through_the_factory() {
        for kind in [VehicleType::Car, VehicleType::Motorcycle, VehicleType::Truck] {
            assert_eq!(build_from_tag(kind.tag()).unwrap(), build_vehicle(kind));
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = build_from_tag("hovercraft").unwrap_err();
        assert_eq!(err.tag, "hovercraft");
        assert_eq!(err.to_string(), "unknown vehicle type: 'hovercraft'");
    }

    #[test]
    fn test_vehicle_info_strings() {
        assert_eq!(Vehicle::Car.info(), "Car - 4 wheels, enclosed cabin");
        assert_eq!(Vehicle::Truck.info(), "Truck - 6+ wheels, cargo area");
    }
}
