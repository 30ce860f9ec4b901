//! Process settings from the environment (after loading `.env` when present).

use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Declaration directory; `None` serves the compiled-in models.
    pub schemas_path: Option<PathBuf>,
    pub cors_origins: CorsOrigins,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            schemas_path: None,
            cors_origins: CorsOrigins::Any,
            database_url_set: false,
            database_name_set: false,
        }
    }
}

impl Settings {
    /// Process environment, falling back to `.env` in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_file(Path::new(".env"))
    }

    /// Process environment, falling back to the dotenv file at `path` (ignored when absent).
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let file_vars: HashMap<String, String> = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter.flatten().collect(),
            Err(_) => HashMap::new(),
        };
        Self::from_lookup(|name| std::env::var(name).ok().or_else(|| file_vars.get(name).cloned()))
    }

    /// Build settings from any variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };
        let set = |name: &str| lookup(name).is_some_and(|v| !v.is_empty());
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            schemas_path: lookup("SCHEMAS_PATH").filter(|s| !s.is_empty()).map(PathBuf::from),
            cors_origins: lookup("CORS_ALLOW_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(CorsOrigins::Any),
            database_url_set: set("DATABASE_URL"),
            database_name_set: set("DATABASE_NAME"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.bind_addr(), "0.0.0.0:8000");
        assert_eq!(s.cors_origins, CorsOrigins::Any);
        assert!(s.schemas_path.is_none());
        assert!(!s.database_url_set);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("PORT", "9100"),
            ("SCHEMAS_PATH", "/srv/models"),
            ("CORS_ALLOW_ORIGINS", "https://a.example, https://b.example"),
            ("DATABASE_URL", "mongodb://localhost"),
        ])
        .unwrap();
        assert_eq!(s.port, 9100);
        assert_eq!(s.schemas_path, Some(PathBuf::from("/srv/models")));
        assert_eq!(
            s.cors_origins,
            CorsOrigins::List(vec!["https://a.example".into(), "https://b.example".into()])
        );
        assert!(s.database_url_set);
        assert!(!s.database_name_set);
    }

    #[test]
    fn wildcard_origin_means_any() {
        let s = settings(&[("CORS_ALLOW_ORIGINS", "*")]).unwrap();
        assert_eq!(s.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(matches!(
            settings(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidVar { name: "PORT", .. })
        ));
    }

    #[test]
    fn dotenv_file_fills_unset_vars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"DATABASE_NAME=viewer\nCORS_ALLOW_ORIGINS=https://viewer.example\n",
        )
        .unwrap();
        let s = Settings::from_env_file(file.path()).unwrap();
        if std::env::var("DATABASE_NAME").is_err() {
            assert!(s.database_name_set);
        }
        if std::env::var("CORS_ALLOW_ORIGINS").is_err() {
            assert_eq!(s.cors_origins, CorsOrigins::List(vec!["https://viewer.example".into()]));
        }
    }

    #[test]
    fn missing_dotenv_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::from_env_file(&dir.path().join(".env")).is_ok());
    }
}
