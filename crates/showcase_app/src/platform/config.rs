use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use showcase_core::{BrowserSettings, PAGE_SIZE_OPTIONS};

pub const DEFAULT_CONFIG_FILE: &str = "showcase.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub page_size: usize,
    pub load_more_step: usize,
    pub debounce_ms: u64,
    pub state_dir: PathBuf,
    pub export_dir: PathBuf,
    pub listen_addr: String,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = BrowserSettings::default();
        Self {
            page_size: settings.page_size,
            load_more_step: settings.load_more_step,
            debounce_ms: settings.debounce.as_millis() as u64,
            state_dir: PathBuf::from("state"),
            export_dir: PathBuf::from("exports"),
            listen_addr: "127.0.0.1:3000".to_string(),
            log_to_file: true,
        }
    }
}

impl AppConfig {
    pub fn browser_settings(&self) -> BrowserSettings {
        BrowserSettings {
            page_size: self.page_size,
            load_more_step: self.load_more_step,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }

    fn validate(&self) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            bail!(
                "page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS,
                self.page_size
            );
        }
        if self.load_more_step == 0 {
            bail!("load_more_step must be positive");
        }
        Ok(())
    }
}

/// Where the effective config came from; logged once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Defaults { missing: PathBuf },
}

/// Reads `path`, or [`DEFAULT_CONFIG_FILE`] when none is given.
///
/// A missing file yields defaults. A file that exists but does not parse is
/// an error.
pub fn load_config(path: Option<&Path>) -> Result<(AppConfig, ConfigOrigin)> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((AppConfig::default(), ConfigOrigin::Defaults { missing: path }));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {path:?}"));
        }
    };

    let config: AppConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse config {path:?}"))?;
    config
        .validate()
        .with_context(|| format!("invalid config {path:?}"))?;
    Ok((config, ConfigOrigin::File(path)))
}
