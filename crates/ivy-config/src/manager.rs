use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_DIR_NAME: &str = "ivy-wallet";
const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir).map_err(|err| ConfigError::io(&config_dir, err))?;
        Ok(Self::new(config_dir.join(CONFIG_FILE_NAME)))
    }

    /// Uses the platform configuration directory, falling back to the current directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored config, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)
                .map_err(|err| ConfigError::io(&self.config_path, err))?;
            serde_json::from_str(&data).map_err(|err| ConfigError::format(&self.config_path, err))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|err| ConfigError::io(parent, err))?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::format(&self.config_path, err))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json).map_err(|err| ConfigError::io(&tmp, err))?;
        fs::rename(&tmp, &self.config_path).map_err(|err| ConfigError::io(&self.config_path, err))?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
