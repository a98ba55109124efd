use super::formats::ConfigFormat;
use crate::launcher::{LaunchSettings, SpawnFailurePolicy};
use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::Serialize;
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const FILE_EXTENSIONS: [&str; 4] = ["toml", "json", "yaml", "yml"];

/// Launch settings given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LauncherOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_spawn_failure: Option<SpawnFailurePolicy>,
}

pub struct ThreadrunConfig {
    figment: Figment,
}

impl ThreadrunConfig {
    pub fn load(custom_config: Option<&str>, cli_overrides: Option<LauncherOverrides>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository files
        if let Some(custom_path) = custom_config {
            let path = Path::new(custom_path);
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("CONFIG LOAD: Using custom config {}", path.display());
            figment = figment.merge(ConfigFormat::auto(path));
        } else {
            for path in Self::candidate_files(&Self::user_config_base_path())
                .into_iter()
                .chain(Self::candidate_files(Path::new("threadrun")))
            {
                figment = figment.merge(ConfigFormat::auto(&path));
            }
        }

        // Environment variables override files; THREADRUN_CONFIG names the file itself
        figment = figment.merge(Env::prefixed("THREADRUN_").ignore(&["config"]).split("__"));

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides {:?}", overrides);
            figment = figment.merge(Serialized::default("launcher", overrides));
        }

        Ok(ThreadrunConfig { figment })
    }

    /// The resolved `[launcher]` section
    pub fn launcher(&self) -> Result<LaunchSettings> {
        let settings: LaunchSettings = self
            .figment
            .extract_inner("launcher")
            .context("Invalid [launcher] configuration")?;

        if settings.thread_name_prefix.contains('\0') {
            bail!("launcher.thread_name_prefix must not contain NUL bytes");
        }

        tracing::trace!("CONFIG LOAD: Final launcher settings = {:?}", settings);
        Ok(settings)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn candidate_files(base: &Path) -> Vec<PathBuf> {
        FILE_EXTENSIONS
            .iter()
            .map(|ext| base.with_extension(ext))
            .collect()
    }

    fn user_config_base_path() -> PathBuf {
        match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(".config/threadrun/config"),
            Err(_) => PathBuf::from("~/.config/threadrun/config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Point HOME at the jail so a real user config is never picked up
    fn isolate_home(jail: &mut Jail) {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
    }

    fn settings(custom: Option<&str>, overrides: Option<LauncherOverrides>) -> Result<LaunchSettings, String> {
        ThreadrunConfig::load(custom, overrides)
            .and_then(|config| config.launcher())
            .map_err(|e| format!("{e:#}"))
    }

    #[test]
    fn test_config_loads_defaults() {
        Jail::expect_with(|jail| {
            isolate_home(jail);

            let loaded = settings(None, None)?;
            assert_eq!(loaded, LaunchSettings::default());
            Ok(())
        });
    }

    #[test]
    fn test_repository_config_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file("threadrun.toml", "[launcher]\nworker_count = 7\n")?;

            let loaded = settings(None, None)?;
            assert_eq!(loaded.worker_count, 7);
            assert_eq!(loaded.iterations, 5);
            Ok(())
        });
    }

    #[test]
    fn test_user_config_under_repository_config() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            std::fs::create_dir_all(jail.directory().join(".config/threadrun"))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                ".config/threadrun/config.yaml",
                "launcher:\n  worker_count: 2\n  iterations: 9\n",
            )?;
            jail.create_file("threadrun.json", r#"{"launcher": {"worker_count": 4}}"#)?;

            let loaded = settings(None, None)?;
            assert_eq!(loaded.worker_count, 4);
            assert_eq!(loaded.iterations, 9);
            Ok(())
        });
    }

    #[test]
    fn test_env_and_cli_priority() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file("threadrun.toml", "[launcher]\nworker_count = 7\ndelay_ms = 10\n")?;
            jail.set_env("THREADRUN_LAUNCHER__WORKER_COUNT", 11);
            jail.set_env("THREADRUN_LAUNCHER__ON_SPAWN_FAILURE", "detach");

            let loaded = settings(None, None)?;
            assert_eq!(loaded.worker_count, 11);
            assert_eq!(loaded.delay_ms, 10);
            assert_eq!(loaded.on_spawn_failure, SpawnFailurePolicy::Detach);

            let overrides = LauncherOverrides {
                worker_count: Some(1),
                ..LauncherOverrides::default()
            };
            let loaded = settings(None, Some(overrides))?;
            assert_eq!(loaded.worker_count, 1);
            assert_eq!(loaded.delay_ms, 10);
            Ok(())
        });
    }

    #[test]
    fn test_custom_config_replaces_discovered_files() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file("threadrun.toml", "[launcher]\nworker_count = 7\n")?;
            jail.create_file("custom.yml", "launcher:\n  iterations: 2\n")?;

            let loaded = settings(Some("custom.yml"), None)?;
            assert_eq!(loaded.worker_count, 3);
            assert_eq!(loaded.iterations, 2);
            Ok(())
        });
    }

    #[test]
    fn test_missing_custom_config_is_error() {
        Jail::expect_with(|jail| {
            isolate_home(jail);

            let err = settings(Some("non_existent.toml"), None).unwrap_err();
            assert!(err.contains("Config file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file("threadrun.toml", "[launcher]\nworker_count = \"many\"\n")?;

            let err = settings(None, None).unwrap_err();
            assert!(err.contains("Invalid [launcher] configuration"));
            Ok(())
        });
    }

    #[test]
    fn test_nul_in_thread_prefix_is_rejected() {
        Jail::expect_with(|jail| {
            isolate_home(jail);

            let overrides = LauncherOverrides {
                thread_name_prefix: Some("bad\0name".to_string()),
                ..LauncherOverrides::default()
            };
            let err = settings(None, Some(overrides)).unwrap_err();
            assert!(err.contains("NUL"));
            Ok(())
        });
    }
}
