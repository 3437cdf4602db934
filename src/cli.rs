use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nitrosamine-risk")]
#[command(about = "Nitrosamine impurity risk assessment for excipient questionnaires", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess one or more completed questionnaires
    Assess {
        /// Answer files (JSON, or YAML by extension); `-` reads stdin
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the configured format, else terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
