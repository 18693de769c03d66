use std::fmt;

use crate::sizing::engine::SizingResult;

pub struct Report<'a> {
    result: &'a SizingResult,
    launch_latitude: f64,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a SizingResult, launch_latitude: f64) -> Self {
        Report {
            result,
            launch_latitude,
        }
    }

    fn format_mass(mass: f64) -> String {
        if mass >= 1_000_000.0 {
            format!("{:.2} kg ({:.2} t)", mass, mass / 1000.0)
        } else {
            format!("{:.2} kg", mass)
        }
    }

    fn format_fraction(fraction: f64) -> String {
        format!("{:.4} ({:.2}%)", fraction, fraction * 100.0)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn display(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;

        writeln!(out, "=== Calculations ===\n")?;
        writeln!(out, "1. Orbital Velocity: {:.2} m/s", r.orbital_velocity)?;
        writeln!(
            out,
            "2. Rotational Boost at {}° Latitude: {:.2} m/s",
            self.launch_latitude, r.rotational_boost
        )?;
        writeln!(out, "3. Selected Delta-v Budget: {:.2} m/s", r.delta_v_budget)?;
        writeln!(out, "4. Tsiolkovsky Mass Ratio: {:.2}", r.mass_ratio)?;
        writeln!(
            out,
            "   Effective Exhaust Velocity (ve): {:.2} m/s",
            r.exhaust_velocity
        )?;

        if r.adjusted {
            writeln!(
                out,
                "\nWarning: Structural fraction of {} is too high for this configuration.",
                r.requested_structural_fraction
            )?;
            writeln!(
                out,
                "Automatically adjusting to the maximum possible structural fraction: {:.4}",
                r.effective_structural_fraction
            )?;
        }

        writeln!(
            out,
            "5. Total Initial Mass (m0): {}",
            Self::format_mass(r.total_mass)
        )?;
        writeln!(
            out,
            "   Structural Mass (m_structure): {}",
            Self::format_mass(r.structural_mass)
        )?;
        writeln!(
            out,
            "   Fuel Mass (m_fuel): {}",
            Self::format_mass(r.fuel_mass)
        )?;

        writeln!(out, "\n=== Summary ===")?;
        writeln!(out, "Payload Mass: {}", Self::format_mass(r.payload_mass))?;
        writeln!(out, "Structural Mass: {}", Self::format_mass(r.structural_mass))?;
        writeln!(out, "Fuel Mass: {}", Self::format_mass(r.fuel_mass))?;
        writeln!(out, "Total Initial Mass: {}", Self::format_mass(r.total_mass))?;
        writeln!(out, "Delta-v Budget: {:.2} m/s", r.delta_v_budget)?;
        writeln!(out, "Mass Ratio: {:.2}", r.mass_ratio)?;
        writeln!(
            out,
            "Effective Exhaust Velocity (ve): {:.2} m/s",
            r.exhaust_velocity
        )?;
        writeln!(out, "Orbital Velocity: {:.2} m/s", r.orbital_velocity)?;
        writeln!(out, "Rotational Boost: {:.2} m/s", r.rotational_boost)?;

        writeln!(out, "\n=== Notes ===")?;
        writeln!(
            out,
            "- Structural Fraction entered: {}",
            Self::format_fraction(r.requested_structural_fraction)
        )?;
        if r.adjusted {
            writeln!(
                out,
                "- Adjusted Structural Fraction: {}",
                Self::format_fraction(r.effective_structural_fraction)
            )?;
        } else {
            writeln!(out, "- Structural Fraction was not adjusted.")?;
        }
        writeln!(
            out,
            "- Ensure that the structural mass fraction is realistic (typically between 5% to 20%)."
        )?;
        writeln!(
            out,
            "- This calculator assumes a single-stage rocket. Multi-stage designs can optimize the mass ratio further."
        )?;

        Ok(())
    }
}
