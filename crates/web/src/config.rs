use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_db_connections: u32,
    pub api_keys: String,
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
            max_db_connections: match lookup("MAX_DB_CONNECTIONS") {
                Some(value) => value
                    .parse()
                    .context("MAX_DB_CONNECTIONS must be a number")?,
                None => 10,
            },
            api_keys: lookup("API_KEYS").unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_loads_required_values_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://dojo@localhost/dojo"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_db_connections, 10);
        assert!(config.api_keys.is_empty());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "eighty"),
            ("DATABASE_URL", "postgres://localhost/dojo"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("HOST", "::"), ("PORT", "80")]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("DATABASE_URL"));
    }
}
