use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Health screening intake: evaluate lab values and print a report.
#[derive(Parser, Debug)]
#[command(name = "screening", author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an intake file through the workflow and print the report
    Evaluate {
        /// Intake JSON (details, fundus image paths, lab values)
        intake: PathBuf,

        /// Tera template overriding the configured or built-in layout
        #[arg(long)]
        template: Option<PathBuf>,

        /// Print the diagnoses as JSON instead of the rendered report
        #[arg(long)]
        json: bool,
    },

    /// Print the normal-range reference table
    Ranges,

    /// List the condition rules in evaluation order
    Rules,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file if none exists
    Init,
}
