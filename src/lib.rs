pub mod config;
pub mod constants;
pub mod errors;
pub mod input;
pub mod report_system;
pub mod sizing;

pub use constants::*;
pub use errors::SizingError;
pub use sizing::engine::{compute, CorrectionPolicy, SizingEngine, SizingResult};
pub use sizing::mission::{validate_delta_v_budget, MissionParameters, ParameterField};

// Re-export the individual calculation steps
pub use sizing::orbit::{orbital_velocity, rotational_boost};
pub use sizing::propulsion::{mass_ratio, max_structural_fraction, MassRatio};
pub use sizing::structure::{mass_breakdown, MassBreakdown};

// Re-export the terminal boundary
pub use config::{ConfigError, Settings};
pub use input::prompt::Prompter;
pub use report_system::report::Report;
