//! MemoryShop CLI - browse the catalog and place orders from a terminal.
//!
//! Commands:
//! - `memshop catalog` - List the catalog by category
//! - `memshop shop` - Interactive shopping session
//! - `memshop order` - Place an order non-interactively
//! - `memshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use memshop_observability::{LogConfig, LogLevel};

use commands::{CatalogArgs, ConfigArgs, OrderArgs, ShopArgs};

/// MemoryShop CLI - RAM modules from your terminal
#[derive(Parser)]
#[command(name = "memshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products by category
    Catalog(CatalogArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Place an order in one go
    Order(OrderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let log_config = effective_log_config(ctx.config.logging, cli.verbose, cli.log_level);
    if let Err(e) = memshop_observability::init(&log_config) {
        ctx.output.warn(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::from_str(s).ok_or_else(|| format!("unknown log level: {}", s))
}

/// Apply command-line overrides to the configured logging section.
///
/// An explicit `--log-level` wins; otherwise `--verbose` raises the level
/// to at least debug.
fn effective_log_config(mut config: LogConfig, verbose: bool, level: Option<LogLevel>) -> LogConfig {
    match level {
        Some(level) => config.level = level,
        None if verbose && config.level > LogLevel::Debug => config.level = LogLevel::Debug,
        None => {}
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LogLevel::Info, false, None, LogLevel::Info)]
    #[case(LogLevel::Info, true, None, LogLevel::Debug)]
    #[case(LogLevel::Trace, true, None, LogLevel::Trace)]
    #[case(LogLevel::Info, true, Some(LogLevel::Error), LogLevel::Error)]
    #[case(LogLevel::Warn, false, Some(LogLevel::Trace), LogLevel::Trace)]
    fn test_effective_log_level(
        #[case] configured: LogLevel,
        #[case] verbose: bool,
        #[case] flag: Option<LogLevel>,
        #[case] expected: LogLevel,
    ) {
        let config = LogConfig {
            level: configured,
            ..LogConfig::default()
        };
        assert_eq!(effective_log_config(config, verbose, flag).level, expected);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("Warning"), Ok(LogLevel::Warn));
        assert!(parse_log_level("loud").unwrap_err().contains("loud"));
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["memshop", "--log-level", "debug", "catalog"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(Cli::try_parse_from(["memshop", "--log-level", "loud", "catalog"]).is_err());
    }
}
