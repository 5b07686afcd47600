//! Tests that pipeline failures surface as typed, descriptive errors.

use std::io::Write;

use tempfile::TempDir;

use earthquakes::{run_pipeline, ConfigError, Config, ValidationError};

#[tokio::test]
async fn test_negative_days_is_validation_error() {
    let config = Config {
        days: -3,
        ..Default::default()
    };
    let err = run_pipeline(&config).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::NegativeDays(-3))
    );
    assert!(format!("{err:#}").contains("days must be zero or positive"));
}

#[tokio::test]
async fn test_missing_bbox_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        bbox_path: dir.path().join("missing.csv"),
        db_path: dir.path().join("earthquakes.db"),
        ..Default::default()
    };
    let err = run_pipeline(&config).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io { .. })
    ));
    assert!(format!("{err:#}").contains("Failed to load bounding box"));
}

#[tokio::test]
async fn test_bad_bbox_header_names_expected_columns() {
    let dir = TempDir::new().unwrap();
    let bbox_path = dir.path().join("bounding_box.csv");
    let mut file = std::fs::File::create(&bbox_path).unwrap();
    writeln!(file, "south,north,west,east\n35,47.5,5,20").unwrap();

    let config = Config {
        bbox_path,
        db_path: dir.path().join("earthquakes.db"),
        ..Default::default()
    };
    let err = run_pipeline(&config).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("minlatitude,maxlatitude,minlongitude,maxlongitude"));
    assert!(message.contains("south,north,west,east"));
}

#[test]
fn test_zero_top_is_rejected() {
    let config = Config {
        top: 0,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("greater than 0"));
}
