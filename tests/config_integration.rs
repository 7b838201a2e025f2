// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, Direction, Position, DEFAULT_DURATION_MS};
use iced_toast::toast::{DisplayMode, Manager, ToastRequest};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn saved_config_round_trips_through_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.toasts.duration_ms = Some(2500);
    config.toasts.stacked = Some(false);
    config.toasts.turn = Some(false);
    config.toasts.direction = Some(Direction::Ltr);
    config.toasts.position = Some(Position::TopRight);
    config.toasts.display_mode = Some(DisplayMode::Both);

    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");
    assert!(dir.path().join("settings.toml").exists());

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn hand_written_file_drives_manager_behaviour() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[toasts]\nduration_ms = 800\nstacked = false\ndisplay_mode = \"linear\"\n",
    )
    .expect("Failed to write config");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let settings = loaded.settings();
    assert_eq!(settings.duration, Duration::from_millis(800));

    let t0 = Instant::now();
    let mut manager = Manager::new(settings);
    let id = manager.push(ToastRequest::new("from file"), t0);
    assert_eq!(manager.get(id).unwrap().display_mode(), DisplayMode::Linear);

    manager.on_frame(t0 + Duration::from_millis(799));
    assert!(manager.contains(id));
    manager.on_frame(t0 + Duration::from_millis(800));
    assert!(!manager.contains(id));
}

#[test]
fn invalid_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[toasts\nbroken")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded.settings().duration, Duration::from_millis(DEFAULT_DURATION_MS));
    let warning = warning.expect("expected a load warning");
    assert!(warning.starts_with("config-load-error"));
}
