use serde::Deserialize;

use crate::constants::{
    DEFAULT_DELTA_V_BUDGET, DEFAULT_LAUNCH_LATITUDE, DEFAULT_ORBIT_ALTITUDE,
    DEFAULT_PAYLOAD_MASS, DEFAULT_SPECIFIC_IMPULSE, DEFAULT_STRUCTURAL_FRACTION,
    DELTA_V_BUDGET_MAX, DELTA_V_BUDGET_MIN,
};
use crate::errors::SizingError;

/// Inputs to a single sizing run. Missing fields in a settings file take the
/// calculator defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MissionParameters {
    pub payload_mass: f64,        // kg
    pub specific_impulse: f64,    // s
    pub launch_latitude: f64,     // degrees
    pub orbit_altitude: f64,      // m
    pub structural_fraction: f64, // dimensionless
    pub delta_v_budget: f64,      // m/s
}

impl Default for MissionParameters {
    fn default() -> Self {
        MissionParameters {
            payload_mass: DEFAULT_PAYLOAD_MASS,
            specific_impulse: DEFAULT_SPECIFIC_IMPULSE,
            launch_latitude: DEFAULT_LAUNCH_LATITUDE,
            orbit_altitude: DEFAULT_ORBIT_ALTITUDE,
            structural_fraction: DEFAULT_STRUCTURAL_FRACTION,
            delta_v_budget: DEFAULT_DELTA_V_BUDGET,
        }
    }
}

impl MissionParameters {
    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::PayloadMass => self.payload_mass,
            ParameterField::SpecificImpulse => self.specific_impulse,
            ParameterField::LaunchLatitude => self.launch_latitude,
            ParameterField::OrbitAltitude => self.orbit_altitude,
            ParameterField::StructuralFraction => self.structural_fraction,
            ParameterField::DeltaVBudget => self.delta_v_budget,
        }
    }

    pub fn set(&mut self, field: ParameterField, value: f64) {
        let slot = match field {
            ParameterField::PayloadMass => &mut self.payload_mass,
            ParameterField::SpecificImpulse => &mut self.specific_impulse,
            ParameterField::LaunchLatitude => &mut self.launch_latitude,
            ParameterField::OrbitAltitude => &mut self.orbit_altitude,
            ParameterField::StructuralFraction => &mut self.structural_fraction,
            ParameterField::DeltaVBudget => &mut self.delta_v_budget,
        };
        *slot = value;
    }

    /// Checks every field against its allowed range, first failure wins.
    pub fn validate(&self) -> Result<(), SizingError> {
        for field in ParameterField::ALL {
            field.check(self.get(field))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    PayloadMass,
    SpecificImpulse,
    LaunchLatitude,
    OrbitAltitude,
    StructuralFraction,
    DeltaVBudget,
}

impl ParameterField {
    pub const ALL: [ParameterField; 6] = [
        ParameterField::PayloadMass,
        ParameterField::SpecificImpulse,
        ParameterField::LaunchLatitude,
        ParameterField::OrbitAltitude,
        ParameterField::StructuralFraction,
        ParameterField::DeltaVBudget,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParameterField::PayloadMass => "payload_mass",
            ParameterField::SpecificImpulse => "specific_impulse",
            ParameterField::LaunchLatitude => "launch_latitude",
            ParameterField::OrbitAltitude => "orbit_altitude",
            ParameterField::StructuralFraction => "structural_fraction",
            ParameterField::DeltaVBudget => "delta_v_budget",
        }
    }

    /// Prompt label shown by the interactive boundary.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterField::PayloadMass => "Payload mass (kg)",
            ParameterField::SpecificImpulse => "Specific Impulse (s)",
            ParameterField::LaunchLatitude => "Launch Latitude (degrees)",
            ParameterField::OrbitAltitude => "Orbit Altitude (meters)",
            ParameterField::StructuralFraction => "Structural Mass Fraction (0-1)",
            ParameterField::DeltaVBudget => "Delta-v Budget (km/s) between 9.3 and 10.0",
        }
    }

    /// Returns the value back if it lies in the field's range. The delta-v
    /// budget is checked in m/s.
    pub fn check(&self, value: f64) -> Result<f64, SizingError> {
        let field = self.name();
        if !value.is_finite() {
            return Err(SizingError::invalid_input(field, value, "must be finite"));
        }

        let in_range = match self {
            ParameterField::PayloadMass | ParameterField::SpecificImpulse => value > 0.0,
            ParameterField::LaunchLatitude => (-90.0..=90.0).contains(&value),
            ParameterField::OrbitAltitude => value >= 0.0,
            ParameterField::StructuralFraction => (0.0..1.0).contains(&value),
            ParameterField::DeltaVBudget => {
                (DELTA_V_BUDGET_MIN..=DELTA_V_BUDGET_MAX).contains(&value)
            }
        };

        if in_range {
            Ok(value)
        } else {
            Err(SizingError::invalid_input(field, value, self.range_description()))
        }
    }

    fn range_description(&self) -> &'static str {
        match self {
            ParameterField::PayloadMass | ParameterField::SpecificImpulse => {
                "must be greater than 0"
            }
            ParameterField::LaunchLatitude => "must be between -90 and 90 degrees",
            ParameterField::OrbitAltitude => "must not be negative",
            ParameterField::StructuralFraction => "must be in [0, 1)",
            ParameterField::DeltaVBudget => "must be between 9300 and 10000 m/s",
        }
    }
}

/// Checks a delta-v budget in m/s against the accepted window.
pub fn validate_delta_v_budget(delta_v_budget: f64) -> Result<f64, SizingError> {
    ParameterField::DeltaVBudget.check(delta_v_budget)
}
