use std::env;

/// Table used when `TABLE_NAME` is unset.
pub const DEFAULT_TABLE_NAME: &str = "ProductsTable";

/// Region used when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Process configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Name of the DynamoDB table holding the products.
    pub table_name: String,
    /// AWS region of the table.
    pub region: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to the defaults for unset or
    /// blank variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            table_name: read("TABLE_NAME", DEFAULT_TABLE_NAME),
            region: read("AWS_REGION", DEFAULT_REGION),
        }
    }
}
