//! # Airplane
//!
//! A vehicle that counts its advances and can never be damaged.

use crate::{new_vehicle_id, Vehicle, VehicleError, VehicleId, VehicleKind, VehicleResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// An airplane. Colliding with one always fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airplane {
    id: VehicleId,
    advance_count: u32,
}

impl Airplane {
    /// Creates an airplane that has not moved yet.
    pub fn new() -> Self {
        Self {
            id: new_vehicle_id(),
            advance_count: 0,
        }
    }

    /// Number of times this airplane has advanced.
    pub fn advance_count(&self) -> u32 {
        self.advance_count
    }
}

impl Default for Airplane {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for Airplane {
    fn id(&self) -> VehicleId {
        self.id
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Airplane
    }

    fn advance(&mut self) {
        self.advance_count += 1;
        debug!("airplane {} advanced {} time(s)", self.id, self.advance_count);
    }

    fn mark_damaged(&mut self) -> VehicleResult<()> {
        warn!("airplane {} rejected a collision", self.id);
        Err(VehicleError::IncompatibleCollision { id: self.id })
    }
}
