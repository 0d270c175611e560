//! # Car
//!
//! A vehicle that covers a fixed distance per advance and keeps a tally of collisions.

use crate::config::{VehicleConfig, AVERAGE_SPEED};
use crate::{new_vehicle_id, Vehicle, VehicleError, VehicleId, VehicleKind, VehicleResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A car.
///
/// `distance_traveled` is always a multiple of `average_speed`.
///
/// # Examples
///
/// ```
/// use vehicles::{Car, Vehicle};
///
/// let mut car = Car::new();
/// car.advance();
/// car.advance();
/// assert_eq!(car.distance_traveled(), 80);
/// assert!(!car.is_damaged());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CarState")]
pub struct Car {
    id: VehicleId,
    collision_count: u32,
    distance_traveled: u64,
    average_speed: u64,
}

impl Car {
    /// Creates a car travelling at [`AVERAGE_SPEED`].
    pub fn new() -> Self {
        Self::with_average_speed(AVERAGE_SPEED)
    }

    /// Creates a car using the speed from `config`.
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(config: &VehicleConfig) -> VehicleResult<Self> {
        config.validate()?;
        Ok(Self::with_average_speed(config.average_speed))
    }

    fn with_average_speed(average_speed: u64) -> Self {
        Self {
            id: new_vehicle_id(),
            collision_count: 0,
            distance_traveled: 0,
            average_speed,
        }
    }

    /// Total distance covered so far.
    pub fn distance_traveled(&self) -> u64 {
        self.distance_traveled
    }

    /// Number of collisions this car has been in.
    pub fn collision_count(&self) -> u32 {
        self.collision_count
    }

    /// Distance covered per advance.
    pub fn average_speed(&self) -> u64 {
        self.average_speed
    }
}

/// Unchecked car fields as read from serialized data.
#[derive(Deserialize)]
struct CarState {
    id: VehicleId,
    collision_count: u32,
    distance_traveled: u64,
    average_speed: u64,
}

impl TryFrom<CarState> for Car {
    type Error = VehicleError;

    fn try_from(state: CarState) -> Result<Self, Self::Error> {
        VehicleConfig::new(state.average_speed).validate()?;
        if state.distance_traveled % state.average_speed != 0 {
            return Err(VehicleError::InvalidConfig(format!(
                "distance_traveled {} is not a multiple of average_speed {}",
                state.distance_traveled, state.average_speed
            )));
        }
        Ok(Self {
            id: state.id,
            collision_count: state.collision_count,
            distance_traveled: state.distance_traveled,
            average_speed: state.average_speed,
        })
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for Car {
    fn id(&self) -> VehicleId {
        self.id
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn advance(&mut self) {
        match self.distance_traveled.checked_add(self.average_speed) {
            Some(distance) => {
                self.distance_traveled = distance;
                debug!("car {} advanced to {}", self.id, self.distance_traveled);
            }
            None => warn!(
                "car {} cannot advance past {}",
                self.id, self.distance_traveled
            ),
        }
    }

    fn is_damaged(&self) -> bool {
        self.collision_count > 0
    }

    fn mark_damaged(&mut self) -> VehicleResult<()> {
        self.collision_count += 1;
        debug!(
            "car {} damaged, {} collision(s)",
            self.id, self.collision_count
        );
        Ok(())
    }
}
