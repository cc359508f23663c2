//! Daemon settings: an optional `foohub.toml`, then `FOOHUB_*` environment
//! variables on top.
//!
//! `FOOHUB_CONFIG` points at another file. A missing file is not an error;
//! every key falls back to its default.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_PATH: &str = "foohub.toml";
const DEFAULT_LOG_FILTER: &str = "foohubd=info,foohub=info,tower_http=debug";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `tracing-subscriber` filter directive, in `RUST_LOG` syntax.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Config {
    /// Read the process environment and the config file it selects.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("FOOHUB_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_PATH), PathBuf::from);
        Self::load_from(&path, |key| std::env::var(key).ok())
    }

    /// Read `path` (if it exists), overlay the variables answered by `env`,
    /// then validate.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when the resulting
    /// port is zero.
    pub fn load_from(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        config.overlay_env(env);
        if config.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        Ok(config)
    }

    // FOOHUB_BIND wins over FOOHUB_HOST/FOOHUB_PORT; RUST_LOG wins over FOOHUB_LOG.
    fn overlay_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        let port = |raw: &str| raw.parse::<u16>().ok();

        if let Some(host) = env("FOOHUB_HOST") {
            self.server.host = host;
        }
        if let Some(p) = env("FOOHUB_PORT").as_deref().and_then(port) {
            self.server.port = p;
        }
        if let Some(bind) = env("FOOHUB_BIND")
            && let Some((host, raw_port)) = bind.rsplit_once(':')
        {
            self.server.host = host.to_owned();
            if let Some(p) = port(raw_port) {
                self.server.port = p;
            }
        }
        if let Some(filter) = env("RUST_LOG").or_else(|| env("FOOHUB_LOG")) {
            self.logging.filter = filter;
        }
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

/// Why the daemon could not assemble its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("server port must be non-zero")]
    ZeroPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("foohubd-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn should_bind_loopback_8080_without_file_or_env() {
        let config = Config::load_from(Path::new("does-not-exist.toml"), no_env).unwrap();
        assert_eq!(config.server.to_string(), "127.0.0.1:8080");
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn should_read_values_from_file() {
        let path = write_temp(
            "full.toml",
            "[server]\nhost = '0.0.0.0'\nport = 9090\n\n[logging]\nfilter = 'debug'\n",
        );

        let config = Config::load_from(&path, no_env).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.to_string(), "0.0.0.0:9090");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_keep_defaults_for_keys_missing_from_file() {
        let config: Config = toml::from_str("[server]\nport = 3000\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn should_report_path_when_file_is_malformed() {
        let path = write_temp("broken.toml", "invalid {{{");

        let err = Config::load_from(&path, no_env).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn should_let_env_override_file() {
        let path = write_temp("env.toml", "[server]\nport = 9090\n");

        let config =
            Config::load_from(&path, env(&[("FOOHUB_HOST", "0.0.0.0"), ("FOOHUB_PORT", "9000")]))
                .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let config = Config::load_from(
            Path::new("does-not-exist.toml"),
            env(&[
                ("FOOHUB_HOST", "0.0.0.0"),
                ("FOOHUB_PORT", "9000"),
                ("FOOHUB_BIND", "10.0.0.1:7000"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server.to_string(), "10.0.0.1:7000");
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let config = Config::load_from(
            Path::new("does-not-exist.toml"),
            env(&[("FOOHUB_PORT", "eighty")]),
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_prefer_rust_log_over_foohub_log() {
        let config = Config::load_from(
            Path::new("does-not-exist.toml"),
            env(&[("FOOHUB_LOG", "warn"), ("RUST_LOG", "trace")]),
        )
        .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_port() {
        let result = Config::load_from(
            Path::new("does-not-exist.toml"),
            env(&[("FOOHUB_PORT", "0")]),
        );
        assert!(matches!(result, Err(ConfigError::ZeroPort)));
    }
}
