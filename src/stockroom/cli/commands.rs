//! # CLI Layer
//!
//! This module is **one possible UI client** for stockroom, not the
//! application itself. It is the only place that touches stdin/stdout,
//! parses arguments and decides exit codes.
//!
//! `run()` parses flags, installs logging, resolves the shell config
//! (defaults < `--config` file < flags) and hands the terminal to the
//! [`Shell`](super::shell::Shell).

use super::logging;
use super::render::Renderer;
use super::setup::Cli;
use super::shell::Shell;
use clap::Parser;
use std::io;
use stockroom::api::InventoryApi;
use stockroom::config::ShellConfig;
use stockroom::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = resolve_config(&cli)?;
    let use_color = config.color && console::colors_enabled();
    tracing::debug!(currency = %config.currency_symbol, use_color, "starting shell");

    let renderer = Renderer::new(&config, use_color);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(InventoryApi::default(), stdin.lock(), stdout.lock(), renderer);
    shell.run()
}

fn resolve_config(cli: &Cli) -> Result<ShellConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            ShellConfig::load(path)?
        }
        None => ShellConfig::default(),
    };

    if let Some(symbol) = &cli.currency {
        config.set_currency_symbol(symbol)?;
    }
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stockroom::error::StockError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = resolve_config(&parse(&["stockroom"])).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.json");
        fs::write(
            &path,
            r#"{ "currency_symbol": "€", "low_stock_marker": "(low)", "color": true }"#,
        )
        .unwrap();
        let path = path.to_string_lossy().to_string();

        let from_file = resolve_config(&parse(&["stockroom", "--config", &path])).unwrap();
        assert_eq!(from_file.currency_symbol, "€");
        assert_eq!(from_file.low_stock_marker, "(low)");
        assert!(from_file.color);

        let overridden = resolve_config(&parse(&[
            "stockroom",
            "--config",
            &path,
            "--currency",
            "$",
            "--no-color",
        ]))
        .unwrap();
        assert_eq!(overridden.currency_symbol, "$");
        assert_eq!(overridden.low_stock_marker, "(low)");
        assert!(!overridden.color);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let path = path.to_string_lossy().to_string();
        let err = resolve_config(&parse(&["stockroom", "--config", &path])).unwrap_err();
        assert!(matches!(err, StockError::Io(_)));
    }

    #[test]
    fn test_blank_currency_flag_is_rejected() {
        let err = resolve_config(&parse(&["stockroom", "--currency", "  "])).unwrap_err();
        assert!(matches!(err, StockError::Config(_)));
    }
}
