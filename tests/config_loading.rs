use std::fs;

use error::GameError;
use pretty_assertions::assert_eq;
use soul_guardian::GameConfig;
use tempfile::tempdir;

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "fps": 30, "seed": 99 }"#).unwrap();

    let config = GameConfig::load(&path).unwrap();
    assert_eq!(config.fps, 30);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.screen_width, GameConfig::default().screen_width);
    assert_eq!(config.hold_window_frames(), 4);
}

#[test]
fn out_of_range_value_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "fps": 0 }"#).unwrap();

    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)), "{err}");
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match GameConfig::load(&path) {
        Err(GameError::ConfigIo { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ConfigIo, got {other:?}"),
    }
    assert!(error::handle_error(&GameConfig::load(&path).unwrap_err()).contains("not found"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ fps: 60").unwrap();

    assert!(matches!(
        GameConfig::load(&path),
        Err(GameError::ConfigParse(_))
    ));
}

#[test]
fn no_path_means_defaults() {
    let config = GameConfig::load_or_default(None).unwrap();
    assert_eq!(config.fps, 60);
    assert_eq!(config.seed, None);
}
