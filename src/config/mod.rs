pub mod suite_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "Add and multiply numbers, or verify a suite of literal cases")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Print the sum of two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        operands: Vec<String>,
    },
    /// Print the product of two numbers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        operands: Vec<String>,
    },
    /// Run a suite of literal cases (the builtin suite when no file is given)
    Verify {
        #[arg(short, long)]
        suite: Option<String>,
    },
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_negative_operand() {
        let config = CliConfig::try_parse_from(["small-calc", "add", "-1", "1"]).unwrap();
        match config.command {
            Command::Add { operands } => assert_eq!(operands, vec!["-1", "1"]),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let config =
            CliConfig::try_parse_from(["small-calc", "multiply", "2", "3", "--format", "json", "-v"])
                .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_verify() {
        let config = CliConfig::try_parse_from(["small-calc", "verify", "--suite", "cases.toml"]).unwrap();
        match config.command {
            Command::Verify { suite } => assert_eq!(suite.as_deref(), Some("cases.toml")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_operands_reach_validation() {
        let config = CliConfig::try_parse_from(["small-calc", "add", "2"]).unwrap();
        assert!(matches!(config.command, Command::Add { ref operands } if operands.len() == 1));
    }
}
