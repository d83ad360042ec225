use anyhow::{Context, Result};
use icsgen_core::GeneratorOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings from ~/.config/icsgen/config.toml
///
/// ```toml
/// product_id = "-//Acme//Planner//EN"
/// uid_domain = "acme.example"
/// timezone = "Europe/Berlin"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// PRODID written into the calendar envelope
    pub product_id: Option<String>,

    /// Domain part of generated UIDs
    pub uid_domain: Option<String>,

    /// Timezone for timed events when the input names none
    pub timezone: Option<String>,
}

impl Config {
    /// Load config from `explicit` if given, else from the default location.
    ///
    /// A missing file at the default location yields an empty config; a
    /// missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("no config file, using built-in defaults");
                    return Ok(Config::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            product_id: self.product_id.clone().unwrap_or(defaults.product_id),
            uid_domain: self.uid_domain.clone().unwrap_or(defaults.uid_domain),
            fallback_timezone: self.timezone.clone(),
        }
    }
}

/// Get the config file path (~/.config/icsgen/config.toml)
pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("icsgen").join("config.toml"))
}
