use std::env;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};

use super::schema::Settings;
use crate::error::{Result, ShelfError};

const ENV_PREFIX: &str = "MEDIASHELF";
const CONFIG_PATH_VAR: &str = "MEDIASHELF_CONFIG_PATH";
const APP_DIR: &str = "mediashelf";
const CONFIG_FILE: &str = "config.toml";

impl Settings {
    /// Load settings from the resolved config file (if any) overlaid with
    /// `MEDIASHELF__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Same as [`Settings::load`] with an explicit, optional config file.
    /// A path that does not exist is treated as an empty file.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(p) = path {
            builder = builder.add_source(File::from(p).required(false));
        }

        let env = Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true);

        let settings: Settings = builder.add_source(env).build()?.try_deserialize()?;

        tracing::debug!(config = ?path, "settings loaded");
        Ok(settings)
    }

    /// Reject settings that load fine but cannot render anything sensible.
    pub fn validate(&self) -> Result<()> {
        if self.display.separator.is_empty() {
            return Err(ShelfError::InvalidSettings(
                "display.separator must not be empty".to_string(),
            ));
        }
        if self.display.fields.is_empty() {
            return Err(ShelfError::InvalidSettings(
                "display.fields must name at least one field".to_string(),
            ));
        }
        Ok(())
    }
}

/// `MEDIASHELF_CONFIG_PATH` when set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `<config home>/mediashelf/config.toml`, where the config home is
/// `$XDG_CONFIG_HOME`, or `$HOME/.config` when that is unset.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

    Some(config_home.join(APP_DIR).join(CONFIG_FILE))
}
