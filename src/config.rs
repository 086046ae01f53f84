use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraSettings;
use crate::traits::controller::Key;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Sandbox".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
        }
    }
}

/// Keys that move the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Key,
    pub backward: Key,
    pub left: Key,
    pub right: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: Key::W,
            backward: Key::S,
            left: Key::A,
            right: Key::D,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub bindings: KeyBindings,
    /// Clamp pitch while looking around
    pub constrain_pitch: bool,
    /// Walk on the starting plane instead of flying
    pub ground_locked: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            constrain_pitch: true,
            ground_locked: false,
        }
    }
}

/// Everything the viewer reads at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub controls: Controls,
    pub start_position: [f32; 3],
    pub light_position: [f32; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings::default(),
            controls: Controls::default(),
            start_position: [0.0, 0.0, 3.0],
            light_position: [1.2, 1.0, 2.0],
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_json_str(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the camera or window cannot work with
    pub fn validate(&self) -> Result<()> {
        let camera = &self.camera;
        ensure!(
            camera.min_zoom <= camera.max_zoom,
            "camera.min_zoom ({}) must not exceed camera.max_zoom ({})",
            camera.min_zoom,
            camera.max_zoom
        );
        ensure!(
            camera.pitch_limit >= 0.0 && camera.pitch_limit < 90.0,
            "camera.pitch_limit ({}) must be in [0, 90)",
            camera.pitch_limit
        );
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size {}x{} must be non-zero",
            self.window.width,
            self.window.height
        );
        Ok(())
    }

    pub fn start_position(&self) -> Vec3 {
        Vec3::from_array(self.start_position)
    }

    pub fn light_position(&self) -> Vec3 {
        Vec3::from_array(self.light_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let settings = Settings::from_json_str(
            r#"{ "camera": { "movement_speed": 5.0 }, "controls": { "bindings": { "forward": "Up" } } }"#,
        )
        .unwrap();

        assert_eq!(settings.camera.movement_speed, 5.0);
        assert_eq!(settings.camera.mouse_sensitivity, 0.1);
        assert_eq!(settings.controls.bindings.forward, Key::Up);
        assert_eq!(settings.controls.bindings.backward, Key::S);
        assert!(settings.controls.constrain_pitch);
    }

    #[test]
    fn test_inverted_zoom_rejected() {
        let err = Settings::from_json_str(r#"{ "camera": { "min_zoom": 50.0 } }"#).unwrap_err();
        assert!(err.to_string().contains("min_zoom"));
    }

    #[test]
    fn test_pitch_limit_at_pole_rejected() {
        assert!(Settings::from_json_str(r#"{ "camera": { "pitch_limit": 90.0 } }"#).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Settings::from_json_str("{ camera: ").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
