use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn sizer() -> Command {
    Command::cargo_bin("sizer").expect("sizer bin")
}

#[test]
fn test_defaults_without_prompting() {
    sizer()
        .arg("--no-prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Rocket Design Calculator ==="))
        .stdout(predicate::str::contains("=== Summary ==="))
        .stdout(predicate::str::contains("3. Selected Delta-v Budget: 9500.00 m/s"))
        .stdout(predicate::str::contains("4. Tsiolkovsky Mass Ratio: 15.91"))
        .stdout(predicate::str::contains(
            "Automatically adjusting to the maximum possible structural fraction: 0.0629",
        ));
}

#[test]
fn test_flags_override_defaults() {
    sizer()
        .args([
            "--no-prompt",
            "--payload-mass",
            "500",
            "--specific-impulse",
            "450",
            "--launch-latitude",
            "-28.5",
            "--structural-fraction",
            "0.05",
            "--delta-v",
            "9.3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload Mass: 500.00 kg"))
        .stdout(predicate::str::contains("at -28.5° Latitude"))
        .stdout(predicate::str::contains("Structural Fraction was not adjusted"))
        .stdout(predicate::str::contains("Warning").not());
}

#[test]
fn test_strict_mode_fails_on_infeasible_fraction() {
    sizer()
        .args(["--no-prompt", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too high for mass ratio"));
}

#[test]
fn test_out_of_range_delta_v_flag_is_rejected() {
    sizer()
        .args(["--no-prompt", "--delta-v", "10.001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("delta_v_budget"));
}

#[test]
fn test_interactive_session() {
    sizer()
        .write_stdin("250\n\n\n\n0.05\n9.0\n9.6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Rocket Design Calculator ==="))
        .stdout(predicate::str::contains("Payload mass (kg) [1.0]: "))
        .stdout(predicate::str::contains(
            "Please enter a delta-v budget between 9.3 and 10.0 km/s.",
        ))
        .stdout(predicate::str::contains("Delta-v Budget: 9600.00 m/s"))
        .stdout(predicate::str::contains("Payload Mass: 250.00 kg"));
}

#[test]
fn test_interactive_invalid_entry_uses_default() {
    sizer()
        .write_stdin("heavy\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Using default value."))
        .stdout(predicate::str::contains("Payload Mass: 1.00 kg"));
}

#[test]
fn test_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[defaults]\npayload_mass = 42.0\nstructural_fraction = 0.02\n\n[correction]\nauto_correct = false"
    )
    .unwrap();

    sizer()
        .arg("--no-prompt")
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload Mass: 42.00 kg"));
}

#[test]
fn test_bad_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults]\nlaunch_latitude = 123.0").unwrap();

    sizer()
        .arg("--no-prompt")
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading settings"));
}

#[test]
fn test_mars_launch() {
    sizer()
        .args(["--no-prompt", "--body", "mars", "--launch-latitude", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Orbital Velocity: 3"));
}
