use anyhow::Result;
use clap::Parser;
use nitrosamine_risk::cli::{Cli, Commands};
use nitrosamine_risk::commands::{self, AssessConfig};
use nitrosamine_risk::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Assess {
            paths,
            format,
            output,
            plain,
        } => commands::handle_assess(AssessConfig {
            paths,
            format,
            output,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
