use crate::constants::{DEFAULT_NAME, DEFAULT_PORT, PLATFORM};
use crate::error::{FdtError, Result};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options of one `fdtcam` platform entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(deserialize_with = "validation::string")]
    pub host: String,
    #[serde(default = "default_name", deserialize_with = "validation::string")]
    pub name: String,
    #[serde(default, deserialize_with = "validation::optional_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "validation::optional_string")]
    pub password: Option<String>,
    #[serde(default = "default_port", deserialize_with = "validation::string")]
    pub port: String,
}

fn default_platform() -> String {
    PLATFORM.to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

impl CameraConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            platform: default_platform(),
            host: host.into(),
            name: default_name(),
            username: None,
            password: None,
            port: default_port(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(FdtError::ConfigError("host must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Camera section of a configuration file:
///
/// ```toml
/// [[camera]]
/// platform = "fdtcam"
/// host = "192.168.1.20"
/// username = "admin"
/// password = "secret"
/// ```
///
/// Entries for other platforms are kept raw and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: Vec<toml::Table>,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validated `fdtcam` entries in file order, plus the errors of the
    /// entries that were skipped. One bad entry never hides the others.
    pub fn cameras(&self) -> (Vec<CameraConfig>, Vec<FdtError>) {
        let mut cameras = Vec::new();
        let mut errors = Vec::new();

        for (index, entry) in self.camera.iter().enumerate() {
            let platform = entry
                .get("platform")
                .and_then(|p| p.as_str())
                .unwrap_or(PLATFORM);
            if platform != PLATFORM {
                log::debug!("Skipping camera entry {} for platform {}", index, platform);
                continue;
            }

            match Self::camera_entry(index, entry) {
                Ok(camera) => cameras.push(camera),
                Err(e) => {
                    log::warn!("Ignoring invalid camera entry {}: {}", index, e);
                    errors.push(e);
                }
            }
        }

        (cameras, errors)
    }

    fn camera_entry(index: usize, entry: &toml::Table) -> Result<CameraConfig> {
        let camera: CameraConfig = toml::Value::Table(entry.clone())
            .try_into()
            .map_err(|e| FdtError::ConfigError(format!("camera entry {}: {}", index, e)))?;
        camera.validate()?;
        Ok(camera)
    }
}
