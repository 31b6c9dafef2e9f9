mod app;
mod cli;
mod config;
mod error;
mod logic;
mod models;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui::Console;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,ecoroutes=debug",
        _ => "warn,ecoroutes=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check) => check(cli.config.as_ref()),
        None => {
            let config = Config::load(cli.config.as_ref())?;
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout().lock())
                .with_reprompt(config.input.reprompt_on_invalid);

            let mut app = App::new(config);
            app.run(&mut console)
        }
    }
}

fn check(config_override: Option<&PathBuf>) -> Result<()> {
    match Config::find_config_path(config_override)? {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: built-in defaults (no config file found)"),
    }

    let config = Config::load(config_override)?;
    println!();
    print!("{}", config.to_yaml()?);
    println!();
    println!("Configuration OK");
    Ok(())
}
