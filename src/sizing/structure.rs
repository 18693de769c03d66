use crate::errors::SizingError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBreakdown {
    pub total_mass: f64,      // kg
    pub structural_mass: f64, // kg
    pub fuel_mass: f64,       // kg
}

impl MassBreakdown {
    /// Whatever is left of the initial mass once structure and fuel are taken out.
    pub fn payload_mass(&self) -> f64 {
        self.total_mass - self.structural_mass - self.fuel_mass
    }
}

/// Splits the initial vehicle mass into structure, fuel and payload.
///
/// Fails with `InfeasibleStructuralFraction` when `1 - mass_ratio * structural_fraction`
/// is not positive, i.e. the structure alone eats the whole mass budget.
pub fn mass_breakdown(
    payload_mass: f64,
    mass_ratio: f64,
    structural_fraction: f64,
) -> Result<MassBreakdown, SizingError> {
    let denominator = 1.0 - mass_ratio * structural_fraction;
    if denominator <= 0.0 {
        return Err(SizingError::InfeasibleStructuralFraction {
            structural_fraction,
            mass_ratio,
        });
    }

    // The fraction closes the budget; only the payload can push m0 past f64.
    let total_mass = mass_ratio * payload_mass / denominator;
    if !total_mass.is_finite() {
        return Err(SizingError::invalid_input(
            "payload_mass",
            payload_mass,
            "total mass overflows",
        ));
    }

    let structural_mass = structural_fraction * total_mass;
    let fuel_mass = total_mass - structural_mass - payload_mass;

    Ok(MassBreakdown {
        total_mass,
        structural_mass,
        fuel_mass,
    })
}
