use std::env;

/// Table used when `TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "HighAvailabilityTable";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the table backing both handlers (default: "HighAvailabilityTable")
    pub table_name: String,
}

impl Config {
    /// Creates a configuration targeting the given table.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Target table name (default: "HighAvailabilityTable")
    pub fn from_env() -> Self {
        Self::new(env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_table_name() {
        let config = Config::new("items-test");

        assert_eq!(config.table_name, "items-test");
    }

    #[test]
    fn test_default_table_name() {
        // Clear environment variables to test defaults
        env::remove_var("TABLE_NAME");

        let config = Config::from_env();

        assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
    }
}
