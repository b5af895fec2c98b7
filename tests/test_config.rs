use std::time::Duration;

use rug_raiders::config::GameConfig;
use rug_raiders::error::GameError;

#[test]
fn defaults_are_valid() {
    let cfg = GameConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.spawn_interval(), Duration::from_millis(1000));
    assert_eq!(cfg.explosion_frames, 6);
    assert_eq!(cfg.explosion_frame_delay, 5);
    assert_eq!(cfg.pickup_every, 15);
    assert_eq!(cfg.tough_score_threshold, 100);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let cfg = GameConfig::from_toml_str("starting_lives = 5\nenemy_base_speed = 1.25\n").unwrap();
    assert_eq!(cfg.starting_lives, 5);
    assert_eq!(cfg.enemy_base_speed, 1.25);
    assert_eq!(cfg.frame_ms, GameConfig::default().frame_ms);
    assert_eq!(cfg.high_score_path, None);
}

#[test]
fn empty_toml_is_the_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn wrong_type_is_a_parse_error() {
    assert!(GameConfig::from_toml_str("starting_lives = \"many\"").is_err());
}

#[test]
fn non_positive_size_is_rejected() {
    let cfg = GameConfig {
        bullet_width: 0.0,
        ..GameConfig::default()
    };
    match cfg.validate() {
        Err(GameError::InvalidConfig { field, .. }) => assert_eq!(field, "bullet_width"),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn zero_timers_are_rejected() {
    let cfg = GameConfig {
        spawn_interval_ms: 0,
        ..GameConfig::default()
    };
    assert!(cfg.validate().is_err());
    let cfg = GameConfig {
        explosion_frame_delay: 0,
        ..GameConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn load_reads_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    std::fs::write(&path, "fire_cooldown = 3\nhigh_score_path = \"/tmp/best\"\n").unwrap();

    let cfg = GameConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(cfg.fire_cooldown, 3);
    assert_eq!(cfg.high_score_file(), std::path::PathBuf::from("/tmp/best"));
}

#[test]
fn load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, GameError::Io { .. }));
}

#[test]
fn load_invalid_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "frame_ms = [").unwrap();

    let err = GameConfig::load(Some(path.as_path())).unwrap_err();
    match &err {
        GameError::Config { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected Config error, got {:?}", other),
    }
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn load_validates_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    std::fs::write(&path, "starting_lives = 0\n").unwrap();
    assert!(matches!(
        GameConfig::load(Some(path.as_path())),
        Err(GameError::InvalidConfig { field: "starting_lives", .. })
    ));
}

#[test]
fn negative_or_nan_speeds_are_rejected() {
    let cfg = GameConfig {
        enemy_base_speed: -1.0,
        ..GameConfig::default()
    };
    match cfg.validate() {
        Err(GameError::InvalidConfig { field, .. }) => assert_eq!(field, "enemy_base_speed"),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
    let cfg = GameConfig {
        pickup_speed: f32::NAN,
        ..GameConfig::default()
    };
    assert!(cfg.validate().is_err());
    let cfg = GameConfig {
        bullet_base_speed: -0.5,
        ..GameConfig::default()
    };
    assert!(cfg.validate().is_err());
    assert!(GameConfig::from_toml_str("enemy_base_speed = 0.0")
        .unwrap()
        .validate()
        .is_ok());
}
