use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error(
        "Structural fraction {structural_fraction} is too high for mass ratio {mass_ratio:.4}"
    )]
    InfeasibleStructuralFraction {
        structural_fraction: f64,
        mass_ratio: f64,
    },

    #[error(
        "Structural fraction {structural_fraction:.4} is still too high for mass ratio {mass_ratio:.4} after adjustment"
    )]
    StillInfeasible {
        structural_fraction: f64,
        mass_ratio: f64,
    },
}

impl SizingError {
    pub fn invalid_input(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        SizingError::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }
}
