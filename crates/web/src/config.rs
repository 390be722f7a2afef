use anyhow::{Context, Result};
use storage::services::achievements::DEFAULT_FEATURED_ACHIEVEMENTS;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub featured_achievements_limit: usize,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            featured_achievements_limit: match lookup("FEATURED_ACHIEVEMENTS_LIMIT") {
                Some(value) => value
                    .parse()
                    .context("FEATURED_ACHIEVEMENTS_LIMIT must be a non-negative number")?,
                None => DEFAULT_FEATURED_ACHIEVEMENTS,
            },
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/club"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.featured_achievements_limit, DEFAULT_FEATURED_ACHIEVEMENTS);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://localhost/club"),
            ("FEATURED_ACHIEVEMENTS_LIMIT", "6"),
            ("RUN_MIGRATIONS", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.featured_achievements_limit, 6);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_config_rejects_bad_port() {
        let result = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "eighty"),
            ("DATABASE_URL", "postgres://localhost/club"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn test_config_requires_database_url() {
        let result = Config::from_lookup(lookup_from(&[("HOST", "0.0.0.0"), ("PORT", "80")]));

        assert!(result.is_err());
    }
}
