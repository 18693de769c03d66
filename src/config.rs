//! Settings file for the sizing calculator.
//!
//! Every table and key is optional; anything left out keeps the built-in
//! Earth constants, mission defaults and correction policy.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::PhysicalConstants;
use crate::errors::SizingError;
use crate::sizing::engine::{CorrectionPolicy, SizingEngine};
use crate::sizing::mission::MissionParameters;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub constants: PhysicalConstants,
    pub defaults: MissionParameters,
    pub correction: CorrectionPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] SizingError),
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SizingError> {
        validate_constants(&self.constants)?;
        self.defaults.validate()?;
        self.correction.validate()
    }

    pub fn engine(&self) -> SizingEngine {
        SizingEngine::with_policy(self.constants, self.correction)
    }
}

fn validate_constants(constants: &PhysicalConstants) -> Result<(), SizingError> {
    let positive = [
        ("gravitational_constant", constants.gravitational_constant),
        ("body_mass", constants.body_mass),
        ("equatorial_radius", constants.equatorial_radius),
        ("standard_gravity", constants.standard_gravity),
    ];
    for (field, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(SizingError::invalid_input(
                field,
                value,
                "must be greater than 0",
            ));
        }
    }

    let omega = constants.angular_velocity;
    if !(omega.is_finite() && omega >= 0.0) {
        return Err(SizingError::invalid_input(
            "angular_velocity",
            omega,
            "must not be negative",
        ));
    }
    Ok(())
}
