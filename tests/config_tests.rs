//! Configuration Tests
//!
//! Tests for:
//! - JSON parsing of patrols (scalar and list durations, defaults)
//! - Paired window settings
//! - App construction from a config
//! - Error propagation (strict validation, turn fraction, missing file)

use glam::Vec3;

use patrol::app::App;
use patrol::config::{AppConfig, PatrolConfig, WindowConfig, WindowSection};
use patrol::errors::PatrolError;
use patrol::path::{DEFAULT_HEADING_OFFSET, DEFAULT_TURN_FRACTION, DurationSpec, Validation};

const EPSILON: f32 = 1e-4;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

const PANDA_JSON: &str = r#"{
    "window": { "title": "Panda", "width": 800, "height": 600 },
    "camera_dolly": true,
    "patrols": [
        {
            "name": "panda",
            "waypoints": [[0, -1, 0], [0, 1, 0]],
            "durations": [3, 3]
        },
        {
            "waypoints": [[-2, -2, 0], [2, -2, 0], [2, 2, 0]],
            "durations": 1.5,
            "turn_fraction": 0.5
        }
    ]
}"#;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_patrols_with_list_and_scalar_durations() {
    let config = AppConfig::from_json_str(PANDA_JSON).unwrap();

    assert!(config.camera_dolly);
    assert_eq!(config.patrols.len(), 2);

    let panda = &config.patrols[0];
    assert_eq!(panda.name, "panda");
    assert_eq!(
        panda.waypoints(),
        vec![Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]
    );
    assert_eq!(panda.durations, Some(DurationSpec::List(vec![3.0, 3.0])));

    let second = &config.patrols[1];
    assert_eq!(second.name, "patrol");
    assert_eq!(second.durations, Some(DurationSpec::Single(1.5)));
    assert_eq!(second.turn_fraction, 0.5);
}

#[test]
fn missing_fields_take_defaults() {
    let config = AppConfig::from_json_str(r#"{ "patrols": [{ "waypoints": [[1, 2, 3]] }] }"#).unwrap();

    assert!(!config.camera_dolly);
    assert_eq!(config.window, WindowSection::default());

    let patrol = &config.patrols[0];
    assert_eq!(patrol.durations, None);
    assert_eq!(patrol.default_duration, 1.0);
    assert_eq!(patrol.turn_fraction, DEFAULT_TURN_FRACTION);
    assert_eq!(patrol.heading_offset, DEFAULT_HEADING_OFFSET);
    assert_eq!(patrol.options().validation, Validation::Lenient);
}

#[test]
fn empty_document_is_a_valid_config() {
    let config = AppConfig::from_json_str("{}").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn malformed_json_is_reported() {
    let err = AppConfig::from_json_str(r#"{ "patrols": [{ "waypoints": "nope" }] }"#).unwrap_err();
    assert!(matches!(err, PatrolError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AppConfig::load("/definitely/not/here/patrol.json").unwrap_err();
    assert!(matches!(err, PatrolError::Io(_)));
}

// ============================================================================
// Window
// ============================================================================

#[test]
fn window_pairs_must_be_complete() {
    let full = WindowConfig::from_parts("w", Some(640), Some(480), Some(10), Some(20)).unwrap();
    assert_eq!(full.size, Some((640, 480)));
    assert_eq!(full.origin, Some((10, 20)));

    let none = WindowConfig::from_parts("w", None, None, None, None).unwrap();
    assert_eq!(none.size, None);
    assert_eq!(none.origin, None);

    let err = WindowConfig::from_parts("w", Some(640), None, None, None).unwrap_err();
    assert!(matches!(err, PatrolError::Config(ref msg) if msg.contains("height")));

    let err = WindowConfig::from_parts("w", None, None, None, Some(5)).unwrap_err();
    assert!(matches!(err, PatrolError::Config(ref msg) if msg.contains("`x`")));
}

#[test]
fn window_section_falls_back_to_default_title() {
    let section = WindowSection {
        width: Some(1024),
        height: Some(768),
        ..Default::default()
    };
    let window = section.to_window_config().unwrap();
    assert_eq!(window.title, WindowConfig::default().title);
    assert_eq!(window.size, Some((1024, 768)));
}

// ============================================================================
// App from config
// ============================================================================

#[test]
fn app_from_config_spawns_patrols_and_dolly() {
    let config = AppConfig::from_json_str(PANDA_JSON).unwrap();
    let mut app = App::from_config(&config).unwrap();

    assert_eq!(app.window().title, "Panda");
    assert_eq!(app.window().size, Some((800, 600)));
    assert_eq!(app.stage().len(), 2);
    assert!(app.tasks().find("camera_dolly").is_some());

    let panda = app.stage().find_actor("panda").unwrap();
    assert!(approx_vec(
        app.stage().actor(panda).unwrap().transform.position,
        Vec3::new(0.0, -1.0, 0.0)
    ));

    app.run_frames(10, 0.1);
    assert!(approx_vec(app.stage().camera.position, Vec3::new(0.0, -1.0, 0.1)));
}

#[test]
fn invalid_window_section_fails_app_construction() {
    let config = AppConfig::from_json_str(r#"{ "window": { "width": 800 } }"#).unwrap();
    assert!(matches!(App::from_config(&config), Err(PatrolError::Config(_))));
}

#[test]
fn strict_patrol_rejects_duplicate_waypoints() {
    let mut config = PatrolConfig::new(
        "stutter",
        &[Vec3::ZERO, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
    );
    config.strict = true;

    let mut app = App::default();
    let err = app.spawn_patrol(&config).unwrap_err();
    assert!(matches!(err, PatrolError::DuplicateWaypoint { index: 0 }));
    assert!(app.stage().is_empty());

    config.strict = false;
    assert!(app.spawn_patrol(&config).is_ok());
}

#[test]
fn out_of_range_turn_fraction_is_rejected() {
    let mut config = PatrolConfig::new("spinner", &[Vec3::NEG_Y, Vec3::Y]);
    config.turn_fraction = 1.0;

    let err = App::default().spawn_patrol(&config).unwrap_err();
    assert!(matches!(err, PatrolError::InvalidTurnFraction(f) if f == 1.0));
}

#[test]
fn empty_waypoint_list_is_rejected() {
    let config = PatrolConfig::new("nobody", &[]);
    let err = App::default().spawn_patrol(&config).unwrap_err();
    assert!(matches!(err, PatrolError::EmptyPath));
}
