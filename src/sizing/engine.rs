use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::{PhysicalConstants, BREAKEVEN_MARGIN};
use crate::errors::SizingError;

use super::{
    mission::MissionParameters,
    orbit::{orbital_velocity, rotational_boost},
    propulsion::{mass_ratio, max_structural_fraction},
    structure::{mass_breakdown, MassBreakdown},
};

/// How the engine reacts to a structural fraction that cannot close the
/// mass budget.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CorrectionPolicy {
    pub auto_correct: bool,
    /// Relative amount taken off `1 / mass_ratio` before retrying. Zero retries
    /// at the exact breakeven point.
    pub breakeven_margin: f64,
}

impl Default for CorrectionPolicy {
    fn default() -> Self {
        CorrectionPolicy {
            auto_correct: true,
            breakeven_margin: BREAKEVEN_MARGIN,
        }
    }
}

impl CorrectionPolicy {
    pub fn strict() -> Self {
        CorrectionPolicy {
            auto_correct: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SizingError> {
        if (0.0..1.0).contains(&self.breakeven_margin) {
            Ok(())
        } else {
            Err(SizingError::invalid_input(
                "breakeven_margin",
                self.breakeven_margin,
                "must be in [0, 1)",
            ))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingResult {
    pub payload_mass: f64,
    pub orbital_velocity: f64,
    pub rotational_boost: f64,
    pub delta_v_budget: f64,
    pub mass_ratio: f64,
    pub exhaust_velocity: f64,
    pub total_mass: f64,
    pub structural_mass: f64,
    pub fuel_mass: f64,
    pub requested_structural_fraction: f64,
    pub effective_structural_fraction: f64,
    pub adjusted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizingEngine {
    constants: PhysicalConstants,
    policy: CorrectionPolicy,
}

impl SizingEngine {
    pub fn new(constants: PhysicalConstants) -> Self {
        SizingEngine {
            constants,
            policy: CorrectionPolicy::default(),
        }
    }

    pub fn with_policy(constants: PhysicalConstants, policy: CorrectionPolicy) -> Self {
        SizingEngine { constants, policy }
    }

    pub fn compute(&self, params: &MissionParameters) -> Result<SizingResult, SizingError> {
        params.validate()?;
        self.policy.validate()?;

        let orbital_velocity = orbital_velocity(params.orbit_altitude, &self.constants);
        let rotational_boost = rotational_boost(params.launch_latitude, &self.constants);
        debug!(orbital_velocity, rotational_boost, "velocity requirements");

        let ratio = mass_ratio(
            params.delta_v_budget,
            params.specific_impulse,
            &self.constants,
        );
        debug!(
            mass_ratio = ratio.mass_ratio,
            exhaust_velocity = ratio.exhaust_velocity,
            "tsiolkovsky"
        );

        let (breakdown, effective_fraction, adjusted) = self.size_structure(
            params.payload_mass,
            ratio.mass_ratio,
            params.structural_fraction,
        )?;

        Ok(SizingResult {
            payload_mass: params.payload_mass,
            orbital_velocity,
            rotational_boost,
            delta_v_budget: params.delta_v_budget,
            mass_ratio: ratio.mass_ratio,
            exhaust_velocity: ratio.exhaust_velocity,
            total_mass: breakdown.total_mass,
            structural_mass: breakdown.structural_mass,
            fuel_mass: breakdown.fuel_mass,
            requested_structural_fraction: params.structural_fraction,
            effective_structural_fraction: effective_fraction,
            adjusted,
        })
    }

    fn size_structure(
        &self,
        payload_mass: f64,
        mass_ratio: f64,
        structural_fraction: f64,
    ) -> Result<(MassBreakdown, f64, bool), SizingError> {
        match mass_breakdown(payload_mass, mass_ratio, structural_fraction) {
            Ok(breakdown) => Ok((breakdown, structural_fraction, false)),
            Err(err @ SizingError::InfeasibleStructuralFraction { .. }) => {
                if !self.policy.auto_correct {
                    return Err(err);
                }

                let corrected = max_structural_fraction(mass_ratio)
                    * (1.0 - self.policy.breakeven_margin);
                info!(
                    requested = structural_fraction,
                    corrected, "structural fraction too high, adjusting"
                );

                match mass_breakdown(payload_mass, mass_ratio, corrected) {
                    Ok(breakdown) => Ok((breakdown, corrected, true)),
                    Err(_) => Err(SizingError::StillInfeasible {
                        structural_fraction: corrected,
                        mass_ratio,
                    }),
                }
            }
            Err(err) => Err(err),
        }
    }
}

/// Sizes a vehicle for `params` around the body described by `constants`,
/// auto-correcting an infeasible structural fraction once.
pub fn compute(
    params: &MissionParameters,
    constants: &PhysicalConstants,
) -> Result<SizingResult, SizingError> {
    SizingEngine::new(*constants).compute(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn feasible_mission() -> MissionParameters {
        MissionParameters {
            payload_mass: 100.0,
            specific_impulse: 450.0,
            launch_latitude: 28.5,
            orbit_altitude: 300_000.0,
            structural_fraction: 0.05,
            delta_v_budget: 9_300.0,
        }
    }

    #[test]
    fn test_feasible_mission_is_not_adjusted() {
        let result = compute(&feasible_mission(), &PhysicalConstants::EARTH).unwrap();

        assert!(!result.adjusted);
        assert_eq!(result.effective_structural_fraction, 0.05);
        assert_relative_eq!(
            result.structural_mass + result.fuel_mass + result.payload_mass,
            result.total_mass,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.mass_ratio,
            (result.delta_v_budget / result.exhaust_velocity).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_default_mission_is_auto_corrected() {
        let params = MissionParameters::default();
        let result = compute(&params, &PhysicalConstants::EARTH).unwrap();

        assert!(result.adjusted);
        assert_eq!(result.requested_structural_fraction, 0.10);
        assert_abs_diff_eq!(result.exhaust_velocity, 3_433.5, epsilon = 1e-9);
        assert_abs_diff_eq!(
            result.effective_structural_fraction,
            1.0 / result.mass_ratio,
            epsilon = 1e-6
        );
        assert!(result.effective_structural_fraction < 1.0 / result.mass_ratio);
        assert!(result.total_mass.is_finite());
        assert!(result.fuel_mass >= 0.0);
    }

    #[test]
    fn test_strict_policy_reports_infeasible() {
        let engine = SizingEngine::with_policy(PhysicalConstants::EARTH, CorrectionPolicy::strict());
        let err = engine.compute(&MissionParameters::default()).unwrap_err();
        assert!(matches!(
            err,
            SizingError::InfeasibleStructuralFraction { structural_fraction, .. }
                if structural_fraction == 0.10
        ));
    }

    #[test]
    fn test_exact_breakeven_is_still_infeasible() {
        let policy = CorrectionPolicy {
            auto_correct: true,
            breakeven_margin: 0.0,
        };
        let engine = SizingEngine::with_policy(PhysicalConstants::EARTH, policy);

        let err = engine.compute(&MissionParameters::default()).unwrap_err();
        match err {
            SizingError::StillInfeasible {
                structural_fraction,
                mass_ratio,
            } => assert_relative_eq!(structural_fraction, 1.0 / mass_ratio),
            other => panic!("expected StillInfeasible, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_mass_is_not_corrected() {
        let params = MissionParameters {
            payload_mass: 1.5e307,
            structural_fraction: 0.01,
            ..MissionParameters::default()
        };

        for engine in [
            SizingEngine::new(PhysicalConstants::EARTH),
            SizingEngine::with_policy(PhysicalConstants::EARTH, CorrectionPolicy::strict()),
        ] {
            let err = engine.compute(&params).unwrap_err();
            assert!(matches!(
                err,
                SizingError::InvalidInput { field: "payload_mass", .. }
            ));
        }
    }

    #[test]
    fn test_invalid_input_rejected_before_sizing() {
        let mut params = feasible_mission();
        params.delta_v_budget = 12_000.0;
        let err = compute(&params, &PhysicalConstants::EARTH).unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput { field: "delta_v_budget", .. }
        ));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = CorrectionPolicy {
            auto_correct: true,
            breakeven_margin: 1.5,
        };
        let engine = SizingEngine::with_policy(PhysicalConstants::EARTH, policy);
        assert!(engine.compute(&feasible_mission()).is_err());
    }
}
