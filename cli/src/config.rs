// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use slotcal_core::{APP_NAME, Config as CoreConfig};

const SLOTCAL_CONFIG_ENV: &str = "SLOTCAL_CONFIG";
const SLOTCAL_DEV_ENV: &str = "SLOTCAL_DEV";

const SLOTCAL_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const SLOTCAL_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Terminal columns are reported as this many width units by default.
const DEFAULT_CELL_WIDTH: u32 = 8;

/// Loads the configuration from, in order, the given path, `SLOTCAL_CONFIG`,
/// or the default location. A missing default file yields the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SLOTCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({SLOTCAL_DEV_ENV} is set): config must be explicitly specified via --config or {SLOTCAL_CONFIG_ENV} environment variable",
            ).into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.tui))
}

/// Configuration of the terminal front-end.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width units reported per terminal column.
    pub cell_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Config {
    /// Converts terminal columns to the width compared against the narrow threshold.
    pub fn viewport_width(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width.max(1))
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    core: CoreConfig,
    tui: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    if let Ok(val) = std::env::var(SLOTCAL_DEV_ENV) {
        let lower = val.to_lowercase();
        if SLOTCAL_DEV_VALID_TRUE.contains(&lower.as_str()) {
            Some(true)
        } else if SLOTCAL_DEV_VALID_FALSE.contains(&lower.as_str()) {
            Some(false)
        } else {
            tracing::warn!(
                "Unrecognized value for {}: '{}'. Expected one of: {}. Treating as unset.",
                SLOTCAL_DEV_ENV,
                val,
                format!(
                    "true: {}, false: {}",
                    SLOTCAL_DEV_VALID_TRUE.join(", "),
                    SLOTCAL_DEV_VALID_FALSE.join(", ")
                )
            );
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use slotcal_core::{Preset, ViewKind};
    use std::fs;
    use std::path::Path;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(path: &Path, preset: &str) {
        let toml_content = format!(
            r#"
[core]
preset = "{preset}"
"#
        );
        fs::write(path, toml_content).unwrap();
    }

    #[test]
    fn test_parse_full_file() {
        let raw: ConfigRaw = r#"
[core]
preset = "planner"
default_view = "month"
narrow_threshold = 900

[[core.events]]
title = "Team Meeting"
start = "2024-06-17T10:00:00"
end = "2024-06-17T11:30:00"

[tui]
cell_width = 10
"#
        .parse()
        .unwrap();

        assert_eq!(raw.core.initial_view(), ViewKind::Month);
        assert_eq!(raw.core.narrow_threshold(), 900);
        assert_eq!(raw.core.events.len(), 1);
        assert_eq!(raw.tui.cell_width, 10);
        assert_eq!(raw.tui.viewport_width(100), 1000);
    }

    #[test]
    fn test_tui_section_is_optional() {
        let raw: ConfigRaw = "[core]\npreset = \"agenda\"\n".parse().unwrap();
        assert_eq!(raw.core.preset, Preset::Agenda);
        assert_eq!(raw.tui.cell_width, DEFAULT_CELL_WIDTH);
        // 96 columns sit exactly on the default threshold
        assert_eq!(raw.tui.viewport_width(96), 768);
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        assert!("[core]\npreset = \"demo\"\n".parse::<ConfigRaw>().is_err());
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        write_config(&config_path, "timesheet");

        let env_path = temp_dir.path().join("env_config.toml");
        write_config(&env_path, "agenda");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
                std::env::remove_var(SLOTCAL_DEV_ENV);
                std::env::set_var(SLOTCAL_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let (config, _) = parse_config(Some(config_path.clone())).await.unwrap();

            assert_eq!(config.preset, Preset::Timesheet);

            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_config_path = temp_dir.path().join("env_config.toml");
        write_config(&env_config_path, "persian");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
                std::env::remove_var(SLOTCAL_DEV_ENV);
                std::env::set_var(SLOTCAL_CONFIG_ENV, env_config_path.to_str().unwrap());
            }

            let (config, _) = parse_config(None).await.unwrap();

            assert_eq!(config.preset, Preset::Persian);

            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_config_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_config_dir).unwrap();
        write_config(&default_config_dir.join("config.toml"), "agenda");

        let xdg_config_home = temp_dir.path().to_str().unwrap().to_string();
        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
                std::env::remove_var(SLOTCAL_DEV_ENV);
                std::env::set_var("XDG_CONFIG_HOME", xdg_config_home);
            }

            let (config, _) = parse_config(None).await.unwrap();

            assert_eq!(config.preset, Preset::Agenda);

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_back_to_defaults_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();
        let empty_dir = temp_dir.path().join("empty");
        fs::create_dir(&empty_dir).unwrap();

        let xdg_config_home = empty_dir.to_str().unwrap().to_string();
        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
                std::env::remove_var(SLOTCAL_DEV_ENV);
                std::env::set_var("XDG_CONFIG_HOME", xdg_config_home);
            }

            let (config, tui) = parse_config(None).await.unwrap();

            assert_eq!(config.preset, Preset::Planner);
            assert!(config.events.is_empty());
            assert_eq!(tui.cell_width, DEFAULT_CELL_WIDTH);

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn returns_error_when_explicit_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let result = parse_config(Some(missing)).await;

        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn slotcal_dev_disables_default_discovery() {
        for value in ["1", "true", "yes", "TRUE"] {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
                std::env::set_var(SLOTCAL_DEV_ENV, value);
            }

            let result = parse_config(None).await;

            let error_msg = result.unwrap_err().to_string();
            assert!(error_msg.contains("Development environment detected"));
            assert!(error_msg.contains(SLOTCAL_DEV_ENV));

            unsafe {
                std::env::remove_var(SLOTCAL_DEV_ENV);
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slotcal_dev_false_allows_default_discovery() {
        let temp_dir = TempDir::new().unwrap();
        let default_config_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_config_dir).unwrap();
        write_config(&default_config_dir.join("config.toml"), "timesheet");

        let xdg_config_home = temp_dir.path().to_str().unwrap().to_string();
        for value in ["0", "false", "no", "False", "invalid"] {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SLOTCAL_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", &xdg_config_home);
                std::env::set_var(SLOTCAL_DEV_ENV, value);
            }

            let (config, _) = parse_config(None).await.unwrap();
            assert_eq!(config.preset, Preset::Timesheet, "{SLOTCAL_DEV_ENV}={value}");

            unsafe {
                std::env::remove_var(SLOTCAL_DEV_ENV);
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn slotcal_dev_cli_flag_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        write_config(&config_path, "persian");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(SLOTCAL_DEV_ENV, "1");
            }

            let (config, _) = parse_config(Some(config_path)).await.unwrap();
            assert_eq!(config.preset, Preset::Persian);

            unsafe {
                std::env::remove_var(SLOTCAL_DEV_ENV);
            }
        }
    }
}
