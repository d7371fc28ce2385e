use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version)]
#[command(about = "Interactive inventory manager for a small stockroom", long_about = None)]
pub struct Cli {
    /// Currency symbol for prices and totals
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log more (repeat for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["stockroom"]).unwrap();
        assert!(cli.currency.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "stockroom",
            "--currency",
            "$",
            "--config",
            "/tmp/stock.json",
            "--no-color",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.currency.as_deref(), Some("$"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/stock.json")));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["stockroom", "--bogus"]).is_err());
    }
}
