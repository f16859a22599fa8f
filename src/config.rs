use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace, warn};

pub const ENV_DATA_DIR: &str = "URLVAULT_DATA_DIR";
pub const ENV_FETCH_TIMEOUT: &str = "URLVAULT_FETCH_TIMEOUT";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "URLVAULT_ACCEPT_INVALID_CERTS";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FetchSettings {
    /// Request timeout in seconds (default: 8)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with title fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of decoded characters scanned for a title (default: 1 MiB)
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Accept any TLS certificate (default: false)
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_chars() -> usize {
    1024 * 1024
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_chars: default_max_chars(),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Directory holding urls.json, config.json and the view state files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Options for fetching page titles
    #[serde(default)]
    pub fetch: FetchSettings,
}

fn default_data_dir() -> String {
    "~/.config/urlvault".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            fetch: FetchSettings::default(),
        }
    }
}

impl Settings {
    /// Data directory with `~` and environment variables expanded
    pub fn data_path(&self) -> PathBuf {
        match shellexpand::full(&self.data_dir) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(e) => {
                warn!("Cannot expand data dir '{}': {}", self.data_dir, e);
                PathBuf::from(&self.data_dir)
            }
        }
    }
}

/// Default location of the settings file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/urlvault/settings.toml"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load settings from the settings file and environment variables.
///
/// An explicit `config_file` must exist and parse; the default location is optional
/// and ignored when unreadable.
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                DomainError::Other(format!("Cannot read config file {}: {}", path.display(), e))
            })?;
            toml::from_str::<Settings>(&text).map_err(|e| {
                DomainError::Other(format!("Invalid config file {}: {}", path.display(), e))
            })?
        }
        None => default_config_path()
            .filter(|p| p.exists())
            .and_then(|p| {
                trace!("Loading config from: {:?}", p);
                let text = std::fs::read_to_string(&p).ok()?;
                match toml::from_str::<Settings>(&text) {
                    Ok(s) => Some(s),
                    Err(e) => {
                        warn!("Ignoring invalid config file {:?}: {}", p, e);
                        None
                    }
                }
            })
            .unwrap_or_default(),
    };

    if settings.fetch.timeout_secs == 0 {
        warn!(
            "Ignoring fetch timeout of 0 seconds, using {}",
            default_timeout_secs()
        );
        settings.fetch.timeout_secs = default_timeout_secs();
    }

    if let Ok(data_dir) = std::env::var(ENV_DATA_DIR) {
        trace!("Using {} from environment: {}", ENV_DATA_DIR, data_dir);
        settings.data_dir = data_dir;
    }

    if let Ok(timeout) = std::env::var(ENV_FETCH_TIMEOUT) {
        match timeout.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => settings.fetch.timeout_secs = secs,
            _ => warn!("Ignoring invalid {}: {}", ENV_FETCH_TIMEOUT, timeout),
        }
    }

    if let Ok(accept) = std::env::var(ENV_ACCEPT_INVALID_CERTS) {
        match parse_bool(&accept) {
            Some(flag) => settings.fetch.accept_invalid_certs = flag,
            None => warn!("Ignoring invalid {}: {}", ENV_ACCEPT_INVALID_CERTS, accept),
        }
    }

    debug!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    toml::to_string_pretty(&Settings::default())
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use rstest::rstest;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config_file(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, content).unwrap();
        (temp_dir, config_path)
    }

    fn clear_env() {
        env::remove_var(ENV_DATA_DIR);
        env::remove_var(ENV_FETCH_TIMEOUT);
        env::remove_var(ENV_ACCEPT_INVALID_CERTS);
    }

    #[test]
    #[serial]
    fn given_empty_config_file_when_load_then_defaults() {
        let _guard = EnvGuard::new();
        clear_env();
        let (_dir, path) = create_temp_config_file("");

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.fetch.timeout_secs, 8);
        assert_eq!(settings.fetch.max_chars, 1_048_576);
        assert!(!settings.fetch.accept_invalid_certs);
    }

    #[test]
    #[serial]
    fn given_config_file_when_load_then_values_used() {
        let _guard = EnvGuard::new();
        clear_env();
        let (_dir, path) = create_temp_config_file(
            r#"
            data_dir = "/srv/vault"

            [fetch]
            timeout_secs = 3
            accept_invalid_certs = true
            "#,
        );

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.data_dir, "/srv/vault");
        assert_eq!(settings.fetch.timeout_secs, 3);
        assert!(settings.fetch.accept_invalid_certs);
        assert_eq!(settings.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    #[serial]
    fn given_environment_when_load_then_overrides_config_file() {
        let _guard = EnvGuard::new();
        let (_dir, path) = create_temp_config_file(
            r#"
            data_dir = "/from/file"
            [fetch]
            timeout_secs = 3
            "#,
        );
        env::set_var(ENV_DATA_DIR, "/from/env");
        env::set_var(ENV_FETCH_TIMEOUT, "20");
        env::set_var(ENV_ACCEPT_INVALID_CERTS, "yes");

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.data_dir, "/from/env");
        assert_eq!(settings.fetch.timeout_secs, 20);
        assert!(settings.fetch.accept_invalid_certs);
    }

    #[test]
    #[serial]
    fn given_invalid_environment_value_when_load_then_ignored() {
        let _guard = EnvGuard::new();
        clear_env();
        let (_dir, path) = create_temp_config_file("");
        env::set_var(ENV_FETCH_TIMEOUT, "soon");

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.fetch.timeout_secs, 8);
    }

    #[rstest]
    #[case("0")]
    #[case(" 0 ")]
    #[serial]
    fn given_zero_timeout_in_environment_when_load_then_default_kept(#[case] value: &str) {
        let _guard = EnvGuard::new();
        clear_env();
        let (_dir, path) = create_temp_config_file("");
        env::set_var(ENV_FETCH_TIMEOUT, value);

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.fetch.timeout_secs, 8);
    }

    #[test]
    #[serial]
    fn given_zero_timeout_in_config_file_when_load_then_default_used() {
        let _guard = EnvGuard::new();
        clear_env();
        let (_dir, path) = create_temp_config_file(
            r#"
            [fetch]
            timeout_secs = 0
            "#,
        );

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.fetch.timeout_secs, 8);
    }

    #[test]
    #[serial]
    fn given_missing_explicit_config_file_when_load_then_error() {
        let _guard = EnvGuard::new();
        let dir = TempDir::new().unwrap();
        assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn given_tilde_data_dir_then_expanded() {
        let settings = Settings {
            data_dir: "~/vault".to_string(),
            ..Settings::default()
        };
        assert!(!settings.data_path().to_string_lossy().starts_with('~'));
    }

    #[test]
    fn given_defaults_when_generate_config_then_valid_toml() {
        let generated = generate_default_config();
        assert!(generated.contains("data_dir"));
        assert!(generated.contains("[fetch]"));
        let parsed: Settings = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
