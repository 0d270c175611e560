//! # Vehicle Configuration
//!
//! Named constants and the loadable configuration shared by vehicles.

use crate::{VehicleError, VehicleResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distance a car covers on every advance.
pub const AVERAGE_SPEED: u64 = 40;

/// Largest accepted car speed.
pub const MAX_AVERAGE_SPEED: u64 = 10_000;

/// Configuration applied to newly built vehicles.
///
/// # Examples
///
/// ```
/// use vehicles::VehicleConfig;
///
/// let config = VehicleConfig::default();
/// assert_eq!(config.average_speed, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Distance a car covers per advance
    pub average_speed: u64,
}

impl VehicleConfig {
    /// Creates a configuration with the given car speed.
    pub fn new(average_speed: u64) -> Self {
        Self { average_speed }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_file(path: impl AsRef<Path>) -> VehicleResult<Self> {
        let path = path.as_ref();
        debug!("Loading vehicle configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: VehicleConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies a speed override on top of this configuration.
    ///
    /// The override wins over the loaded value, and the result is validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicles::VehicleConfig;
    ///
    /// let config = VehicleConfig::new(55).with_override(Some(10)).unwrap();
    /// assert_eq!(config.average_speed, 10);
    /// ```
    pub fn with_override(mut self, average_speed: Option<u64>) -> VehicleResult<Self> {
        if let Some(speed) = average_speed {
            self.average_speed = speed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the configuration keeps the distance invariant meaningful.
    pub fn validate(&self) -> VehicleResult<()> {
        if self.average_speed == 0 {
            return Err(VehicleError::InvalidConfig(
                "average_speed must be greater than zero".to_string(),
            ));
        }
        if self.average_speed > MAX_AVERAGE_SPEED {
            return Err(VehicleError::InvalidConfig(format!(
                "average_speed must be at most {}",
                MAX_AVERAGE_SPEED
            )));
        }
        Ok(())
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::new(AVERAGE_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_uses_average_speed() {
        assert_eq!(VehicleConfig::default().average_speed, AVERAGE_SPEED);
        assert!(VehicleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let config = VehicleConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(VehicleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_speed_above_maximum_is_rejected() {
        assert!(VehicleConfig::new(MAX_AVERAGE_SPEED).validate().is_ok());
        assert!(matches!(
            VehicleConfig::new(MAX_AVERAGE_SPEED + 1).validate(),
            Err(VehicleError::InvalidConfig(_))
        ));
        assert!(VehicleConfig::new(u64::MAX).validate().is_err());
    }

    #[test]
    fn test_override_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "average_speed": 55 }}"#).unwrap();

        let loaded = VehicleConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.clone().with_override(None).unwrap().average_speed, 55);
        assert_eq!(loaded.with_override(Some(10)).unwrap().average_speed, 10);
    }

    #[test]
    fn test_override_is_validated() {
        assert!(matches!(
            VehicleConfig::new(55).with_override(Some(0)),
            Err(VehicleError::InvalidConfig(_))
        ));
        assert!(VehicleConfig::default()
            .with_override(Some(u64::MAX))
            .is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "average_speed": 55 }}"#).unwrap();

        let config = VehicleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.average_speed, 55);
    }

    #[test]
    fn test_from_file_missing_fields_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = VehicleConfig::from_file(file.path()).unwrap();
        assert_eq!(config, VehicleConfig::default());
    }

    #[test]
    fn test_from_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            VehicleConfig::from_file(file.path()),
            Err(VehicleError::Serde(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            VehicleConfig::from_file(dir.path().join("missing.json")),
            Err(VehicleError::Io(_))
        ));
    }
}
