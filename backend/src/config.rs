use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};

/// Server settings read from `AVALIAQUI_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub seed_path: PathBuf,
    pub open_browser: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: try_load(&lookup, "AVALIAQUI_HOST", "127.0.0.1".to_string()),
            port: try_load(&lookup, "AVALIAQUI_PORT", 3000),
            database_path: try_load(&lookup, "AVALIAQUI_DB", PathBuf::from("avaliaqui.sqlite")),
            seed_path: try_load(&lookup, "AVALIAQUI_SEED", PathBuf::from("db.json")),
            open_browser: try_load(&lookup, "AVALIAQUI_OPEN_BROWSER", false),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default {default:?}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default:?}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::Settings;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_listen_on_port_3000() {
        let s = settings(&[]);
        assert_eq!(s.port, 3000);
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.seed_path, PathBuf::from("db.json"));
        assert!(!s.open_browser);
        assert_eq!(s.url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let s = settings(&[
            ("AVALIAQUI_HOST", "0.0.0.0"),
            ("AVALIAQUI_PORT", "8080"),
            ("AVALIAQUI_DB", "/tmp/x.sqlite"),
            ("AVALIAQUI_OPEN_BROWSER", "true"),
        ]);
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 8080);
        assert_eq!(s.database_path, PathBuf::from("/tmp/x.sqlite"));
        assert!(s.open_browser);
    }

    #[test]
    fn invalid_value_falls_back() {
        let s = settings(&[("AVALIAQUI_PORT", "not-a-port")]);
        assert_eq!(s.port, 3000);
    }
}
