//! # Vehicle Module
//!
//! The shared vehicle abstraction and its concrete variants.
//!
//! Every variant implements [`Vehicle`]. Collisions are driven by the default
//! [`Vehicle::collide`] method, which asks each participant to mark itself damaged.

mod airplane;
mod car;

pub use airplane::*;
pub use car::*;

use crate::VehicleResult;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for vehicles.
pub type VehicleId = Uuid;

/// Creates a new unique vehicle ID.
pub fn new_vehicle_id() -> VehicleId {
    Uuid::new_v4()
}

/// The kinds of vehicle available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Airplane,
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleKind::Car => write!(f, "car"),
            VehicleKind::Airplane => write!(f, "airplane"),
        }
    }
}

/// Capability set shared by every vehicle.
pub trait Vehicle {
    /// Returns the vehicle's unique ID.
    fn id(&self) -> VehicleId;

    /// Returns which kind of vehicle this is.
    fn kind(&self) -> VehicleKind;

    /// Moves the vehicle forward once.
    fn advance(&mut self);

    /// Returns whether the vehicle has been damaged.
    fn is_damaged(&self) -> bool {
        false
    }

    /// Records damage on this vehicle.
    ///
    /// Called by [`Vehicle::collide`] on both participants. Variants that
    /// cannot be damaged return [`crate::VehicleError::IncompatibleCollision`].
    fn mark_damaged(&mut self) -> VehicleResult<()>;

    /// Collides this vehicle with another.
    ///
    /// This vehicle is marked damaged first, then `other`. The operation is not
    /// atomic: if `other` rejects the collision, damage already recorded on
    /// this vehicle stays recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicles::{Car, Vehicle};
    ///
    /// let mut a = Car::new();
    /// let mut b = Car::new();
    /// a.collide(&mut b).unwrap();
    /// assert!(a.is_damaged());
    /// assert!(b.is_damaged());
    /// ```
    fn collide(&mut self, other: &mut dyn Vehicle) -> VehicleResult<()> {
        debug!(
            "{} {} colliding with {} {}",
            self.kind(),
            self.id(),
            other.kind(),
            other.id()
        );
        self.mark_damaged()?;
        other.mark_damaged()
    }
}

/// Either kind of vehicle, held by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ConcreteVehicle {
    Car(Car),
    Airplane(Airplane),
}

impl ConcreteVehicle {
    /// Returns the inner car, if this is one.
    pub fn as_car(&self) -> Option<&Car> {
        match self {
            ConcreteVehicle::Car(car) => Some(car),
            ConcreteVehicle::Airplane(_) => None,
        }
    }

    /// Returns the inner airplane, if this is one.
    pub fn as_airplane(&self) -> Option<&Airplane> {
        match self {
            ConcreteVehicle::Airplane(airplane) => Some(airplane),
            ConcreteVehicle::Car(_) => None,
        }
    }
}

impl Vehicle for ConcreteVehicle {
    fn id(&self) -> VehicleId {
        match self {
            ConcreteVehicle::Car(car) => car.id(),
            ConcreteVehicle::Airplane(airplane) => airplane.id(),
        }
    }

    fn kind(&self) -> VehicleKind {
        match self {
            ConcreteVehicle::Car(_) => VehicleKind::Car,
            ConcreteVehicle::Airplane(_) => VehicleKind::Airplane,
        }
    }

    fn advance(&mut self) {
        match self {
            ConcreteVehicle::Car(car) => car.advance(),
            ConcreteVehicle::Airplane(airplane) => airplane.advance(),
        }
    }

    fn is_damaged(&self) -> bool {
        match self {
            ConcreteVehicle::Car(car) => car.is_damaged(),
            ConcreteVehicle::Airplane(airplane) => airplane.is_damaged(),
        }
    }

    fn mark_damaged(&mut self) -> VehicleResult<()> {
        match self {
            ConcreteVehicle::Car(car) => car.mark_damaged(),
            ConcreteVehicle::Airplane(airplane) => airplane.mark_damaged(),
        }
    }
}

impl From<Car> for ConcreteVehicle {
    fn from(car: Car) -> Self {
        ConcreteVehicle::Car(car)
    }
}

impl From<Airplane> for ConcreteVehicle {
    fn from(airplane: Airplane) -> Self {
        ConcreteVehicle::Airplane(airplane)
    }
}
