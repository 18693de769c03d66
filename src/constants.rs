use serde::Deserialize;

// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const STANDARD_GRAVITY: f64 = 9.81; // m/s²
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_137.0; // meters (WGS-84)
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.292_115_9e-5; // rad/s (sidereal)
pub const MARS_MASS: f64 = 6.4171e23; // kg
pub const MARS_EQUATORIAL_RADIUS: f64 = 3_396_200.0; // meters
pub const MARS_ANGULAR_VELOCITY: f64 = 7.088_218e-5; // rad/s

// Mission Defaults
pub const DEFAULT_PAYLOAD_MASS: f64 = 1.0; // kg
pub const DEFAULT_SPECIFIC_IMPULSE: f64 = 350.0; // s
pub const DEFAULT_LAUNCH_LATITUDE: f64 = 45.0; // degrees
pub const DEFAULT_ORBIT_ALTITUDE: f64 = 200_000.0; // m (200 km)
pub const DEFAULT_STRUCTURAL_FRACTION: f64 = 0.10;
pub const DEFAULT_DELTA_V_BUDGET: f64 = 9_500.0; // m/s

// Delta-v budget window accepted by the engine
pub const DELTA_V_BUDGET_MIN: f64 = 9_300.0; // m/s
pub const DELTA_V_BUDGET_MAX: f64 = 10_000.0; // m/s

// Feasibility correction
pub const BREAKEVEN_MARGIN: f64 = 1e-6; // fraction shaved off 1 / mass_ratio

/// Constants of the body the vehicle launches from.
///
/// Fields missing from a settings file fall back to Earth.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64,
    pub body_mass: f64,
    pub equatorial_radius: f64,
    pub standard_gravity: f64,
    pub angular_velocity: f64,
}

impl PhysicalConstants {
    pub const EARTH: PhysicalConstants = PhysicalConstants {
        gravitational_constant: GRAVITATIONAL_CONSTANT,
        body_mass: EARTH_MASS,
        equatorial_radius: EARTH_EQUATORIAL_RADIUS,
        standard_gravity: STANDARD_GRAVITY,
        angular_velocity: EARTH_ANGULAR_VELOCITY,
    };

    // g0 stays at the Earth convention: Isp is quoted against it everywhere.
    pub const MARS: PhysicalConstants = PhysicalConstants {
        gravitational_constant: GRAVITATIONAL_CONSTANT,
        body_mass: MARS_MASS,
        equatorial_radius: MARS_EQUATORIAL_RADIUS,
        standard_gravity: STANDARD_GRAVITY,
        angular_velocity: MARS_ANGULAR_VELOCITY,
    };

    /// G·M of the body, m³/s².
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_constant * self.body_mass
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::EARTH
    }
}
