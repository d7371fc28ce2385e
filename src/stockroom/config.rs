use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
const DEFAULT_LOW_STOCK_MARKER: &str = "[LOW STOCK!]";

/// Presentation settings for the interactive shell.
///
/// Nothing is read from disk unless a config path is given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prefix for every rendered money amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Appended to table rows whose product is low on stock
    #[serde(default = "default_low_stock_marker")]
    pub low_stock_marker: String,

    /// Allow ANSI styling (still subject to terminal detection)
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_low_stock_marker() -> String {
    DEFAULT_LOW_STOCK_MARKER.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            low_stock_marker: default_low_stock_marker(),
            color: default_color(),
        }
    }
}

impl ShellConfig {
    /// Load config from a JSON file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(StockError::Io)?;
        let config: ShellConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<()> {
        self.currency_symbol = symbol.trim().to_string();
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(StockError::Config(
                "currency symbol cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.low_stock_marker, "[LOW STOCK!]");
        assert!(config.color);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.json");
        fs::write(&path, r#"{ "currency_symbol": "$" }"#).unwrap();

        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.low_stock_marker, "[LOW STOCK!]");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StockError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ currency").unwrap();
        assert!(matches!(
            ShellConfig::load(&path),
            Err(StockError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_symbol_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, r#"{ "currency_symbol": " " }"#).unwrap();
        assert!(matches!(ShellConfig::load(&path), Err(StockError::Config(_))));

        let mut config = ShellConfig::default();
        assert!(config.set_currency_symbol("").is_err());
        config.set_currency_symbol(" € ").unwrap();
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = ShellConfig {
            currency_symbol: "£".to_string(),
            low_stock_marker: "!".to_string(),
            color: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
