//! # Vehicles
//!
//! Cars and airplanes that share a common "can move / can collide" abstraction.
//!
//! ## Overview
//!
//! - **Vehicle**: the capability set every variant implements (advance, collide, is-damaged)
//! - **Car**: accumulates distance at a fixed average speed and records collisions
//! - **Airplane**: counts its advances and can never be damaged
//! - **ConcreteVehicle**: closed enum over both variants for holding either by value
//!
//! Colliding with an airplane always fails with [`VehicleError::IncompatibleCollision`].

pub mod config;
pub mod vehicle;

pub use config::VehicleConfig;
pub use vehicle::*;

/// Core error type for the vehicles crate.
#[derive(thiserror::Error, Debug)]
pub enum VehicleError {
    /// The vehicle cannot take part in a collision
    #[error("cannot collide with an airplane (vehicle {id})")]
    IncompatibleCollision { id: VehicleId },

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the vehicles crate.
pub type VehicleResult<T> = Result<T, VehicleError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
