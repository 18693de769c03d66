use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rocket_sizing::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Single-stage rocket sizing calculator")]
struct Cli {
    /// TOML settings file (constants, defaults, correction policy)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Body to launch from; replaces any constants from the settings file
    #[arg(long, value_enum)]
    body: Option<Body>,

    /// Payload mass in kg
    #[arg(long)]
    payload_mass: Option<f64>,

    /// Specific impulse in seconds
    #[arg(long)]
    specific_impulse: Option<f64>,

    /// Launch latitude in degrees, -90 to 90
    #[arg(long, allow_negative_numbers = true)]
    launch_latitude: Option<f64>,

    /// Target orbit altitude in meters
    #[arg(long)]
    orbit_altitude: Option<f64>,

    /// Structural mass fraction, 0 to 1
    #[arg(long)]
    structural_fraction: Option<f64>,

    /// Delta-v budget in km/s, 9.3 to 10.0
    #[arg(long = "delta-v")]
    delta_v: Option<f64>,

    /// Use flags and defaults without prompting
    #[arg(long, default_value_t = false)]
    no_prompt: bool,

    /// Report an infeasible structural fraction instead of adjusting it
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Body {
    Earth,
    Mars,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(body) = self.body {
            settings.constants = match body {
                Body::Earth => PhysicalConstants::EARTH,
                Body::Mars => PhysicalConstants::MARS,
            };
        }

        let overrides = [
            (ParameterField::PayloadMass, self.payload_mass),
            (ParameterField::SpecificImpulse, self.specific_impulse),
            (ParameterField::LaunchLatitude, self.launch_latitude),
            (ParameterField::OrbitAltitude, self.orbit_altitude),
            (ParameterField::StructuralFraction, self.structural_fraction),
            (ParameterField::DeltaVBudget, self.delta_v.map(|km_s| km_s * 1000.0)),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                settings.defaults.set(field, value);
            }
        }

        if self.strict {
            settings.correction.auto_correct = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    cli.apply(&mut settings);
    settings.validate().context("invalid mission parameters")?;
    debug!(?settings, "resolved settings");

    println!("=== Rocket Design Calculator ===\n");
    let params = if cli.no_prompt {
        settings.defaults
    } else {
        println!("Enter the following parameters or press Enter to use default values.\n");
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        let params = prompter.read_mission(&settings.defaults)?;
        println!();
        params
    };

    let result = settings
        .engine()
        .compute(&params)
        .context("no vehicle could be sized for these parameters")?;
    Report::new(&result, params.launch_latitude).display();

    Ok(())
}
