//! Property tests for how vehicles accumulate movement.

use proptest::prelude::*;
use vehicles::{Airplane, Car, Vehicle, VehicleConfig};

proptest! {
    #[test]
    fn car_distance_is_speed_times_advances(speed in 1u64..1_000, advances in 0u32..200) {
        let mut car = Car::with_config(&VehicleConfig::new(speed)).unwrap();
        for _ in 0..advances {
            car.advance();
        }
        prop_assert_eq!(car.distance_traveled(), speed * advances as u64);
        prop_assert_eq!(car.distance_traveled() % speed, 0);
        prop_assert!(!car.is_damaged());
    }

    #[test]
    fn airplane_counts_every_advance(advances in 0u32..200) {
        let mut airplane = Airplane::new();
        for _ in 0..advances {
            airplane.advance();
        }
        prop_assert_eq!(airplane.advance_count(), advances);
        prop_assert!(!airplane.is_damaged());
    }
}
