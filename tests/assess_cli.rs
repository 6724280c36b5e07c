//! E2E tests for the assess, sample and schema commands

use std::process::Command;

/// Worked example A: single recent RCC floor, fixed year so depreciation
/// stays in the zero band.
#[test]
fn assess_example_a() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/example_a.json",
            "--year",
            "2024",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("PROPERTY TAX ASSESSMENT (year 2024)"));
    assert!(stdout.contains("P-1001"));
    // Floor tax from the worked sheet
    assert!(stdout.contains("579.87"));
    // Final payable after 29% surcharge, 5% rebate and 26% cess
    assert!(stdout.contains("905.12"));
    assert!(stdout.contains("\u{2713} OK"));
}

/// A vacant site must ignore any supplied floors and tax the whole plot as
/// vacant land.
#[test]
fn assess_vacant_site_ignores_floors() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/vacant_corner.json",
            "--year",
            "2024",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Vacant site"));
    // No floor table for the floor that came with the document
    assert!(!stdout.contains("RCC"));
    // effectiveVacantArea = plot, corner-uplifted guidance
    assert!(stdout.contains("Vacant Area Used: 2000.00"));
    assert!(stdout.contains("Vacant Land Tax: 3960.00"));
    assert!(stdout.contains("Total Property Tax: 5108.40"));
}

/// JSON output carries the formatted summary fields and no warnings for a
/// clean document.
#[test]
fn assess_json_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/vacant_corner.json",
            "--year",
            "2024",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"final_payable\""));
    assert!(stdout.contains("\"vacant_land_tax\": \"3960.00\""));
    assert!(stdout.contains("\"total_property_tax\": \"5108.40\""));
    assert!(stdout.contains("\"warnings\": []"));
}

/// CSV output has one derived row per floor.
#[test]
fn assess_csv_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/example_a.json",
            "--year",
            "2024",
            "--csv",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("floor"));
    assert!(stdout.contains("built_up_area"));
    assert!(stdout.contains("579.87"));
}

/// The corner query-parameter override applies the 10% guidance premium.
#[test]
fn assess_corner_override() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/example_a.json",
            "--year",
            "2024",
            "--corner",
            "YES",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // 10% of 743.49
    assert!(stdout.contains("Corner Premium: 74.35"));
}

/// Over-built floor data still computes, with an advisory warning.
#[test]
fn assess_overbuilt_warns_but_computes() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/overbuilt.json",
            "--year",
            "2024",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\u{26A0}"));
    assert!(stdout.contains("exceeds total site area"));
    // Numbers are still produced
    assert!(stdout.contains("TOTAL PAYABLE:"));
}

/// A floor with an unknown construction-type tag still computes; its
/// market rate degrades to zero.
#[test]
fn assess_unknown_construction_tag_degrades_to_zero() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-p",
            "tests/data/unknown_type.json",
            "--year",
            "2024",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // The tag is displayed as-is with a zero market rate
    assert!(stdout.contains("BRICK"));
    // land = 400 * 185.8725 * 1 * 1; building = 0
    // floor tax = 74349 * 0.004
    assert!(stdout.contains("297.40"));
    assert!(stdout.contains("TOTAL PAYABLE:"));
}

/// Sample command prints a loadable property document.
#[test]
fn sample_dataset_round_trips_through_assess() {
    let output = Command::new("cargo")
        .args(["run", "--", "sample", "--scenario", "a"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("EXAMPLE-A"));
    assert!(stdout.contains("market_rates"));
    assert!(stdout.contains("guidance_value"));
}

/// Schema command publishes the input format.
#[test]
fn schema_lists_input_fields() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("plot_area"));
    assert!(stdout.contains("floors"));
}
