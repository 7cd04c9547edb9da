use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use screening_cli::cli::{Cli, Command, ConfigAction};
use screening_cli::commands;
use screening_cli::config::{self, LogFormat};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let loaded = config::load_config(&config_path)?;
    let config = loaded.config;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    if let Some(from) = loaded.migrated_from {
        tracing::info!(
            path = %config_path.display(),
            from,
            to = config::CURRENT_VERSION,
            "config migrated"
        );
    }

    let output = match cli.command {
        Command::Evaluate {
            intake,
            template,
            json,
        } => commands::evaluate(&intake, template.as_deref(), json, &config)?,
        Command::Ranges => commands::ranges(),
        Command::Rules => commands::rules(),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config)?,
            ConfigAction::Init => commands::init_config(&config_path)?,
        },
    };

    println!("{}", output.trim_end());
    Ok(())
}
