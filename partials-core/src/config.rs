use std::path::{Path, PathBuf};

use serde::Deserialize;

use partials_types::pitch::is_valid_base_freq;
use partials_types::{Preset, SessionDefaults};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Upper bound on the note bank size.
pub const MAX_NOTES: usize = 16;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    base_freq: Option<f64>,
    note_count: Option<usize>,
    preset: Option<String>,
}

#[derive(Deserialize, Default)]
struct RuntimeConfig {
    interaction_log: Option<bool>,
}

pub struct Config {
    defaults: DefaultsConfig,
    runtime: RuntimeConfig,
}

impl Config {
    /// Embedded defaults, overridden key by key from the user's config file.
    pub fn load() -> Self {
        Self::load_from(user_config_path().as_deref())
    }

    pub fn load_from(user_path: Option<&Path>) -> Self {
        let mut base: ConfigFile = match toml::from_str(DEFAULT_CONFIG) {
            Ok(base) => base,
            Err(e) => {
                log::error!(target: "config", "embedded config.toml is invalid: {}", e);
                ConfigFile::default()
            }
        };

        if let Some(path) = user_path {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => {
                            merge_defaults(&mut base.defaults, user.defaults);
                            merge_runtime(&mut base.runtime, user.runtime);
                        }
                        Err(e) => log::warn!(
                            target: "config",
                            "ignoring malformed config {}: {}",
                            path.display(),
                            e
                        ),
                    },
                    Err(e) => log::warn!(
                        target: "config",
                        "could not read config {}: {}",
                        path.display(),
                        e
                    ),
                }
            }
        }

        Config {
            defaults: base.defaults,
            runtime: base.runtime,
        }
    }

    pub fn defaults(&self) -> SessionDefaults {
        let fallback = SessionDefaults::default();
        SessionDefaults {
            base_freq: self
                .defaults
                .base_freq
                .filter(|&f| is_valid_base_freq(f))
                .unwrap_or(fallback.base_freq),
            note_count: self
                .defaults
                .note_count
                .map(|n| n.clamp(1, MAX_NOTES))
                .unwrap_or(fallback.note_count),
            preset: self
                .defaults
                .preset
                .as_deref()
                .and_then(Preset::from_name)
                .unwrap_or(fallback.preset),
        }
    }

    /// Whether dispatched actions are appended to the interaction log.
    pub fn interaction_log_enabled(&self) -> bool {
        self.runtime.interaction_log.unwrap_or(false)
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("partials").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.base_freq.is_some() {
        base.base_freq = user.base_freq;
    }
    if user.note_count.is_some() {
        base.note_count = user.note_count;
    }
    if user.preset.is_some() {
        base.preset = user.preset;
    }
}

fn merge_runtime(base: &mut RuntimeConfig, user: RuntimeConfig) {
    if user.interaction_log.is_some() {
        base.interaction_log = user.interaction_log;
    }
}
