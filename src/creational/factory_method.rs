//! Factory method: logistics companies that decide which transport to create.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactoryError {
    #[error("Unknown transport kind '{0}' (expected truck, ship or plane)")]
    UnknownKind(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Truck,
    Ship,
    Plane,
}

impl FromStr for TransportKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truck" => Ok(Self::Truck),
            "ship" => Ok(Self::Ship),
            "plane" => Ok(Self::Plane),
            _ => Err(FactoryError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Truck => "truck",
            Self::Ship => "ship",
            Self::Plane => "plane",
        };
        f.write_str(name)
    }
}

/// The product.
pub trait Transport {
    fn kind(&self) -> TransportKind;
    fn deliver(&self, cargo: &str) -> String;
}

pub struct Truck;
pub struct Ship;
pub struct Plane;

impl Transport for Truck {
    fn kind(&self) -> TransportKind {
        TransportKind::Truck
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Delivering {} by land in a box", cargo)
    }
}

impl Transport for Ship {
    fn kind(&self) -> TransportKind {
        TransportKind::Ship
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Delivering {} by sea in a container", cargo)
    }
}

impl Transport for Plane {
    fn kind(&self) -> TransportKind {
        TransportKind::Plane
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Delivering {} by air on a pallet", cargo)
    }
}

/// The creator. Subtypes override [`create_transport`](Logistics::create_transport);
/// the planning logic stays the same.
pub trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self, cargo: &str) -> String {
        let transport = self.create_transport();
        debug!(kind = %transport.kind(), cargo, "transport created");
        transport.deliver(cargo)
    }
}

pub struct RoadLogistics;
pub struct SeaLogistics;
pub struct AirLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

impl Logistics for AirLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Plane)
    }
}

/// Pick a logistics company for a transport kind.
pub fn logistics_for(kind: TransportKind) -> Box<dyn Logistics> {
    match kind {
        TransportKind::Truck => Box::new(RoadLogistics),
        TransportKind::Ship => Box::new(SeaLogistics),
        TransportKind::Plane => Box::new(AirLogistics),
    }
}

/// Parameterised factory keyed by name, e.g. read from user input.
pub fn create_transport_by_key(key: &str) -> Result<Box<dyn Transport>, FactoryError> {
    let kind: TransportKind = key.parse()?;
    Ok(logistics_for(kind).create_transport())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_logistics_creates_its_transport() {
        assert_eq!(RoadLogistics.create_transport().kind(), TransportKind::Truck);
        assert_eq!(SeaLogistics.create_transport().kind(), TransportKind::Ship);
        assert_eq!(AirLogistics.create_transport().kind(), TransportKind::Plane);
    }

    #[test]
    fn plan_delivery_uses_created_transport() {
        assert_eq!(
            SeaLogistics.plan_delivery("bananas"),
            "Delivering bananas by sea in a container"
        );
    }

    #[test]
    fn keys_are_case_insensitive() {
        let transport = create_transport_by_key(" Plane ").unwrap();
        assert_eq!(transport.kind(), TransportKind::Plane);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = create_transport_by_key("bicycle");
        assert!(matches!(result, Err(FactoryError::UnknownKind(k)) if k == "bicycle"));
    }

    #[test]
    fn kind_display_parses_back() {
        for kind in [TransportKind::Truck, TransportKind::Ship, TransportKind::Plane] {
            assert_eq!(kind.to_string().parse::<TransportKind>(), Ok(kind));
        }
    }
}
