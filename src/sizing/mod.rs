pub mod engine;
pub mod mission;
pub mod orbit;
pub mod propulsion;
pub mod structure;
