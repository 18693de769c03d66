use crate::constants::PhysicalConstants;

/// Circular orbital speed at `orbit_altitude` meters above the equatorial radius.
pub fn orbital_velocity(orbit_altitude: f64, constants: &PhysicalConstants) -> f64 {
    let radius = constants.equatorial_radius + orbit_altitude;
    (constants.gravitational_parameter() / radius).sqrt()
}

/// Surface speed due to the body's rotation at the given latitude. This is a
/// magnitude only; alignment with the launch azimuth is not modelled.
pub fn rotational_boost(latitude_deg: f64, constants: &PhysicalConstants) -> f64 {
    let latitude_rad = latitude_deg.to_radians();
    constants.angular_velocity * constants.equatorial_radius * latitude_rad.cos()
}
