//! Integration tests for configuration files
//!
//! Run with: cargo test --test config_integration_tests

use lgl_sandbox::lgl::camera::{CameraMode, ProjectionType};
use lgl_sandbox::lgl::input::{CameraAction, InputBinding, InputSource, Key};
use lgl_sandbox::lgl::{CameraSystem, Error, SandboxConfig};

#[test]
fn test_integration_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sandbox.toml");

    let mut config = SandboxConfig::default();
    config.camera.field_of_view = 60.0;
    config.camera.projection = ProjectionType::Orthographic;
    config.controller.move_speed = 12.0;
    config.controller.bindings = Some(vec![
        InputBinding::new(InputSource::Key(Key::Up), CameraAction::MoveForward),
    ]);
    config.save(&path).unwrap();

    let loaded = SandboxConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_integration_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[camera]\nmode = \"orbital\"\n").unwrap();

    let config = SandboxConfig::load(&path).unwrap();
    assert_eq!(config.camera.mode, CameraMode::Orbital);
    assert_eq!(config.controller, SandboxConfig::default().controller);

    let system = CameraSystem::new(&config);
    assert_eq!(system.camera().target().map(|t| t.length()), Some(0.0));
}

#[test]
fn test_integration_empty_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").unwrap();
    assert_eq!(SandboxConfig::load(&path).unwrap(), SandboxConfig::default());
}

#[test]
fn test_integration_invalid_values_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[controller]\nmove_speed = -1.0\n").unwrap();
    assert!(matches!(SandboxConfig::load(&path), Err(Error::InvalidConfig(_))));
}
