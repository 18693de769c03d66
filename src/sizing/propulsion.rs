use crate::constants::PhysicalConstants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassRatio {
    pub mass_ratio: f64,
    pub exhaust_velocity: f64, // m/s
}

pub fn exhaust_velocity(specific_impulse: f64, constants: &PhysicalConstants) -> f64 {
    specific_impulse * constants.standard_gravity
}

/// Tsiolkovsky mass ratio m0 / mf for the given delta-v budget (m/s) and
/// specific impulse (s).
pub fn mass_ratio(
    delta_v_budget: f64,
    specific_impulse: f64,
    constants: &PhysicalConstants,
) -> MassRatio {
    let exhaust_velocity = exhaust_velocity(specific_impulse, constants);
    MassRatio {
        mass_ratio: (delta_v_budget / exhaust_velocity).exp(),
        exhaust_velocity,
    }
}

/// Structural fraction at which 1 - mass_ratio * fraction reaches zero.
pub fn max_structural_fraction(mass_ratio: f64) -> f64 {
    1.0 / mass_ratio
}
