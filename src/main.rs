//! # Vehicles Demo Entry Point
//!
//! Builds a few vehicles, runs them through advances and collisions, and prints
//! the resulting state as JSON.

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use vehicles::{
    Airplane, Car, ConcreteVehicle, Vehicle, VehicleConfig, VehicleError, VehicleResult,
};

/// Command line arguments for the vehicles demo.
#[derive(Parser, Debug)]
#[command(name = "vehicles")]
#[command(about = "Cars and airplanes that advance and collide")]
#[command(version)]
struct Args {
    /// Distance a car covers per advance (overrides the config file)
    #[arg(long)]
    average_speed: Option<u64>,

    /// Path to a JSON vehicle configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many times the first car advances
    #[arg(long, default_value_t = 1)]
    advances: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting vehicles v{}", vehicles::VERSION);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

/// Resolves configuration with the command line taking precedence over the file.
fn load_config(args: &Args) -> VehicleResult<VehicleConfig> {
    let config = match &args.config {
        Some(path) => VehicleConfig::from_file(path)?,
        None => VehicleConfig::default(),
    };
    config.with_override(args.average_speed)
}

fn run(args: &Args) -> VehicleResult<()> {
    let config = load_config(args)?;
    info!("Cars travel {} per advance", config.average_speed);

    let mut car_a = Car::with_config(&config)?;
    let mut car_b = Car::with_config(&config)?;
    let mut airplane = Airplane::new();

    for _ in 0..args.advances {
        car_a.advance();
    }
    airplane.advance();
    info!("Car {} traveled {}", car_a.id(), car_a.distance_traveled());

    car_a.collide(&mut car_b)?;
    info!(
        "Cars collided: {} damaged={}, {} damaged={}",
        car_a.id(),
        car_a.is_damaged(),
        car_b.id(),
        car_b.is_damaged()
    );

    match car_b.collide(&mut airplane) {
        Err(VehicleError::IncompatibleCollision { id }) => {
            warn!("Collision with {} rejected", id);
        }
        other => other?,
    }

    let report: Vec<ConcreteVehicle> = vec![car_a.into(), car_b.into(), airplane.into()];
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
