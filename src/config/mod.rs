use crossterm::style::Color;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::menu::{DEFAULT_TITLE, RenderStyle};

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.json";

/// Directory under the platform config dir holding the config file.
pub const CONFIG_DIR: &str = "pickmenu";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration loaded from `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Menu title used when none is given on the command line.
    #[serde(default = "default_title")]
    pub title: String,

    /// Prefix drawn before the highlighted option.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Color name for the highlighted option (e.g. "green", "dark_cyan").
    #[serde(default)]
    pub highlight_color: Option<String>,

    /// yt-dlp program used for searches.
    #[serde(default = "default_ytdlp")]
    pub ytdlp: String,

    /// mpv program used for playback.
    #[serde(default = "default_mpv")]
    pub mpv: String,

    /// Number of search results to offer.
    #[serde(default = "default_search_results")]
    pub search_results: u32,

    /// Extra arguments passed to mpv before the URL.
    #[serde(default, deserialize_with = "deserialize_args")]
    pub mpv_args: Vec<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_marker() -> String {
    "> ".to_string()
}

fn default_ytdlp() -> String {
    "yt-dlp".to_string()
}

fn default_mpv() -> String {
    "mpv".to_string()
}

fn default_search_results() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            marker: default_marker(),
            highlight_color: None,
            ytdlp: default_ytdlp(),
            mpv: default_mpv(),
            search_results: default_search_results(),
            mpv_args: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match default_path() {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Menu styling derived from this config.
    ///
    /// Unknown color names are logged and ignored.
    pub fn render_style(&self) -> RenderStyle {
        let color = self.highlight_color.as_deref().and_then(|name| {
            let parsed = Color::try_from(name).ok();
            if parsed.is_none() {
                warn!("unknown highlight color '{name}', ignoring");
            }
            parsed
        });

        RenderStyle {
            marker: self.marker.clone(),
            color,
        }
    }
}

/// `<config dir>/pickmenu/config.json`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn deserialize_args<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(arg) => Ok(vec![arg]),
        serde_json::Value::Array(items) => {
            let mut args = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(arg) => args.push(arg),
                    _ => {
                        return Err(serde::de::Error::custom("mpv arguments must be strings"));
                    }
                }
            }
            Ok(args)
        }
        serde_json::Value::Null => Ok(Vec::new()),
        _ => Err(serde::de::Error::custom(
            "mpv arguments must be a string or array of strings",
        )),
    }
}
