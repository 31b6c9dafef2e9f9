use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecoroutes",
    version,
    about = "COP16 ecological routes and biodiversity sites console"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive configuration setup
    Init,
    /// Validate config and print the effective values
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_interactive_console() {
        let cli = Cli::try_parse_from(["ecoroutes"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbosity_and_config_flags() {
        let cli = Cli::try_parse_from(["ecoroutes", "-vv", "--config", "cop16.yaml", "check"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cop16.yaml")));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }
}
