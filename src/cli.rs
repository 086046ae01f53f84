// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Settings;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "freelook")]
#[command(about = "First-person camera sandbox", long_about = None)]
pub struct Cli {
    /// JSON settings file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Borderless fullscreen on the current monitor
    #[arg(long)]
    pub fullscreen: bool,

    /// Keep the camera on its starting plane
    #[arg(long = "ground-locked")]
    pub ground_locked: bool,

    /// Let pitch pass the poles
    #[arg(long = "no-pitch-limit")]
    pub no_pitch_limit: bool,
}

impl Cli {
    /// Load the settings file (or defaults) and apply command-line overrides
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        self.apply(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    /// Overwrite settings with flags given on the command line
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.window.width = width;
        }
        if let Some(height) = self.height {
            settings.window.height = height;
        }
        if self.fullscreen {
            settings.window.fullscreen = true;
        }
        if self.ground_locked {
            settings.controls.ground_locked = true;
        }
        if self.no_pitch_limit {
            settings.controls.constrain_pitch = false;
        }
    }
}
