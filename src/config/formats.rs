use super::core::ThreadrunConfig;
use anyhow::Result;
use clap::ValueEnum;
use figment::providers::{Data, Format, Json, Toml, Yaml};
use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Figment provider reading `path` in this format. Missing files yield no data.
    pub fn provider(self, path: &Path) -> FileProvider {
        match self {
            ConfigFormat::Toml => FileProvider::Toml(Toml::file(path)),
            ConfigFormat::Json => FileProvider::Json(Json::file(path)),
            ConfigFormat::Yaml => FileProvider::Yaml(Yaml::file(path)),
        }
    }

    /// Provider for a user-supplied file; unknown extensions are read as TOML
    pub fn auto(path: &Path) -> FileProvider {
        let format = Self::from_path(path).unwrap_or_else(|| {
            tracing::debug!("no known extension on {}, reading as TOML", path.display());
            ConfigFormat::Toml
        });
        format.provider(path)
    }
}

/// A config file provider whose format was picked at runtime
pub enum FileProvider {
    Toml(Data<Toml>),
    Json(Data<Json>),
    Yaml(Data<Yaml>),
}

impl Provider for FileProvider {
    fn metadata(&self) -> Metadata {
        match self {
            FileProvider::Toml(p) => p.metadata(),
            FileProvider::Json(p) => p.metadata(),
            FileProvider::Yaml(p) => p.metadata(),
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        match self {
            FileProvider::Toml(p) => p.data(),
            FileProvider::Json(p) => p.data(),
            FileProvider::Yaml(p) => p.data(),
        }
    }
}

impl ThreadrunConfig {
    /// Render the merged configuration in the given format
    pub fn export_config(&self, format: ConfigFormat) -> Result<String> {
        let config: serde_json::Value = self.get_full_config()?;

        let output = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
            ConfigFormat::Toml => toml::to_string_pretty(&config)?,
            ConfigFormat::Yaml => serde_yml::to_string(&config)?,
        };

        Ok(output)
    }
}
