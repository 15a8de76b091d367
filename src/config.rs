//! Configuration and CLI argument handling
//!
//! Settings are layered: built-in defaults, then the JSON settings file,
//! then environment variables / command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    display::Screen,
    error::Result,
    state::{
        settings::DEFAULT_CONFIG_FILE,
        EndCount, TimerSettings, TotalSeconds,
    },
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pace-timer")]
#[command(about = "A shared pace clock with segment progress, driven over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, env = "PACE_PORT", default_value = "5000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Total duration in seconds (overrides the settings file)
    #[arg(long, env = "PACE_TOTAL_SECONDS")]
    pub total_seconds: Option<u64>,

    /// Number of ends (overrides the settings file)
    #[arg(long, env = "PACE_NUM_ENDS")]
    pub num_ends: Option<u32>,

    /// Logo image URL (overrides the settings file)
    #[arg(long, env = "PACE_LOGO_URL")]
    pub logo_url: Option<String>,

    /// JSON file settings are loaded from and saved to
    #[arg(long, env = "PACE_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Display loop rate in frames per second
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Display width in pixels
    #[arg(long, default_value = "1920")]
    pub screen_width: u32,

    /// Display height in pixels
    #[arg(long, default_value = "1080")]
    pub screen_height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn screen(&self) -> Screen {
        Screen {
            width: self.screen_width,
            height: self.screen_height,
        }
    }

    /// Overlay flag/env values on top of the file settings (or defaults).
    pub fn resolve_settings(&self, from_file: Option<TimerSettings>) -> Result<TimerSettings> {
        let mut settings = from_file.unwrap_or_default();

        if let Some(total) = self.total_seconds {
            settings.total_seconds = TotalSeconds::new(total)?;
        }
        if let Some(ends) = self.num_ends {
            settings.num_ends = EndCount::new(ends)?;
        }
        if let Some(url) = &self.logo_url {
            settings.logo_url = url.trim().to_string();
        }

        Ok(settings)
    }
}
