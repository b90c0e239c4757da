//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::StaticConfig;
use crate::errors::Result;

/// shortrack - integer URL shortener and exercise tracker
#[derive(Parser)]
#[command(name = "shortrack")]
#[command(version)]
#[command(about = "Integer-handle URL shortener and exercise tracker HTTP services", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the URL shortener (default)
    Shortener,

    /// Run the exercise tracker
    Tracker,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (prints to stdout when omitted)
        output_path: Option<String>,
    },
}

impl Cli {
    /// 未指定子命令时运行 shortener
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Shortener)
    }
}

/// Generate example configuration file
pub fn config_generate(output_path: Option<&str>) -> Result<()> {
    let Some(path) = output_path else {
        print!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    };

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    StaticConfig::default().save_to_file(path)?;

    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_shortener() {
        let cli = Cli::parse_from(["shortrack"]);
        assert_eq!(cli.command_or_default(), Commands::Shortener);
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["shortrack", "tracker", "--config", "prod.toml"]);
        assert_eq!(cli.config.as_deref(), Some("prod.toml"));
        assert_eq!(cli.command_or_default(), Commands::Tracker);
    }

    #[test]
    fn test_config_generate_writes_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        let path = path.to_str().expect("utf-8 path");

        config_generate(Some(path)).expect("generate should succeed");
        let content = std::fs::read_to_string(path).expect("file should exist");
        assert!(content.contains("[shortener]"));
    }
}
