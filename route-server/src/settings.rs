//! Process settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::planner::QueryConfig;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the connections CSV (`ROUTES_DATA`).
    pub data_path: PathBuf,

    /// Listen address (`ROUTES_ADDR`).
    pub addr: SocketAddr,

    /// Query limits (`ROUTES_MAX_HOPS`, `ROUTES_MAX_EXPANSIONS`).
    pub query: QueryConfig,

    /// Wall-clock limit for a single query (`ROUTES_TIMEOUT_MS`).
    pub query_timeout: Duration,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, using defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = QueryConfig::default();

        let data_path = lookup("ROUTES_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("routes.csv"));
        let addr = parse_or(&lookup, "ROUTES_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?;
        let max_hops_limit = parse_or(&lookup, "ROUTES_MAX_HOPS", defaults.max_hops_limit)?;
        let max_expansions = parse_opt(&lookup, "ROUTES_MAX_EXPANSIONS")?;
        let timeout_ms = parse_or(&lookup, "ROUTES_TIMEOUT_MS", 2000u64)?;

        if max_hops_limit == 0 {
            return Err(SettingsError::Invalid {
                key: "ROUTES_MAX_HOPS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            data_path,
            addr,
            query: QueryConfig::new(
                max_hops_limit,
                defaults.default_max_hops.min(max_hops_limit),
                max_expansions,
            ),
            query_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_opt<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| SettingsError::Invalid { key, value })
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();

        assert_eq!(s.data_path, PathBuf::from("routes.csv"));
        assert_eq!(s.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(s.query.max_hops_limit, 5);
        assert_eq!(s.query.default_max_hops, 3);
        assert_eq!(s.query.max_expansions, None);
        assert_eq!(s.query_timeout, Duration::from_millis(2000));
    }

    #[test]
    fn overrides() {
        let s = settings(&[
            ("ROUTES_DATA", "/srv/base.csv"),
            ("ROUTES_ADDR", "0.0.0.0:8080"),
            ("ROUTES_MAX_HOPS", "2"),
            ("ROUTES_MAX_EXPANSIONS", " 50000 "),
            ("ROUTES_TIMEOUT_MS", "500"),
        ])
        .unwrap();

        assert_eq!(s.data_path, PathBuf::from("/srv/base.csv"));
        assert_eq!(s.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(s.query.max_hops_limit, 2);
        // Default hop count is clamped into the accepted range
        assert_eq!(s.query.default_max_hops, 2);
        assert_eq!(s.query.max_expansions, Some(50_000));
        assert_eq!(s.query_timeout, Duration::from_millis(500));
    }

    #[test]
    fn invalid_values() {
        let err = settings(&[("ROUTES_MAX_HOPS", "many")]).unwrap_err();
        assert_eq!(
            err,
            SettingsError::Invalid {
                key: "ROUTES_MAX_HOPS",
                value: "many".into()
            }
        );
        assert_eq!(err.to_string(), "invalid value for ROUTES_MAX_HOPS: \"many\"");

        assert!(settings(&[("ROUTES_MAX_HOPS", "0")]).is_err());
        assert!(settings(&[("ROUTES_ADDR", "localhost")]).is_err());
        assert!(settings(&[("ROUTES_TIMEOUT_MS", "-1")]).is_err());
    }
}
