use std::{fs, path::Path};

use tempfile::tempdir;

use stratum::{LayoutError, StratumError};
use stratum_cli::Args;

/// Arguments for the reference layout: 3 x 2 grids, 3 levels.
fn args_in(dir: &Path, config: &str) -> Args {
    let config_path = dir.join("config.toml");
    fs::write(&config_path, config).expect("Failed to write config");

    Args {
        vert_count: "3".to_string(),
        vert_distance: "10".to_string(),
        vert_range: "20".to_string(),
        hor_count: "2".to_string(),
        hor_distance: "5".to_string(),
        hor_range: "15".to_string(),
        level_count: "3".to_string(),
        level_distance: "4".to_string(),
        level_range: "1".to_string(),
        output: dir.join("layout.svg").to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
        dry_run: false,
    }
}

#[test]
fn e2e_smoke_test_writes_plan_preview() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_in(temp_dir.path(), "");

    stratum_cli::run(&args).expect("Layout should be generated");

    let svg = fs::read_to_string(&args.output).expect("Output should exist");
    assert!(svg.contains("<svg"));
    for label in ["1", "2", "3", "A", "B"] {
        assert!(svg.contains(&format!("data-label=\"{label}\"")), "missing grid {label}");
    }
    for level in ["Level 2 (+4)", "Level 3 (+8)", "Level 4 (+12)"] {
        assert!(svg.contains(level), "missing {level}");
    }
}

#[test]
fn e2e_smoke_test_config_changes_level_names() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_in(
        temp_dir.path(),
        r#"
        [naming]
        level_prefix = "Floor"
        first_level_number = 1
        "#,
    );

    stratum_cli::run(&args).expect("Layout should be generated");

    let svg = fs::read_to_string(&args.output).expect("Output should exist");
    assert!(svg.contains("Floor 1 (+4)"));
    assert!(!svg.contains("Level 2"));
}

#[test]
fn e2e_smoke_test_dry_run_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        dry_run: true,
        ..args_in(temp_dir.path(), "")
    };

    stratum_cli::run(&args).expect("Dry run should succeed");
    assert!(!Path::new(&args.output).exists());
}

#[test]
fn e2e_smoke_test_bad_number_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        vert_distance: "ten".to_string(),
        ..args_in(temp_dir.path(), "")
    };

    let err = stratum_cli::run(&args).unwrap_err();
    assert!(matches!(
        err,
        StratumError::ParameterFormat {
            field: "vert_distance",
            ..
        }
    ));
    assert!(!Path::new(&args.output).exists());
}

#[test]
fn e2e_smoke_test_zero_range_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        hor_range: "0".to_string(),
        ..args_in(temp_dir.path(), "")
    };

    let err = stratum_cli::run(&args).unwrap_err();
    assert!(matches!(
        err,
        StratumError::Layout(LayoutError::InvalidParameter {
            parameter: "horizontal.range",
            ..
        })
    ));
    assert!(!Path::new(&args.output).exists());
}

#[test]
fn e2e_smoke_test_strict_letters_limit_horizontal_grids() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        hor_count: "27".to_string(),
        ..args_in(
            temp_dir.path(),
            r#"
            [naming]
            letters = "strict"
            "#,
        )
    };

    let err = stratum_cli::run(&args).unwrap_err();
    assert!(matches!(
        err,
        StratumError::Layout(LayoutError::InvalidParameter {
            parameter: "horizontal.count",
            ..
        })
    ));
}

#[test]
fn e2e_smoke_test_extended_letters_past_z() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        hor_count: "28".to_string(),
        ..args_in(temp_dir.path(), "")
    };

    stratum_cli::run(&args).expect("Extended lettering should succeed");

    let svg = fs::read_to_string(&args.output).expect("Output should exist");
    assert!(svg.contains("data-label=\"Z\""));
    assert!(svg.contains("data-label=\"AA\""));
    assert!(svg.contains("data-label=\"AB\""));
}
