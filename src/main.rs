use anyhow::Result;
use clap::Parser;
use csvgate::cli::{Cli, Commands};
use csvgate::core::FileStatus;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            path,
            format,
            output,
            config,
            empty_row_warn_fraction,
            duplicate_warn_ratio,
            duplicate_scan_cap,
            ignore_patterns,
        } => {
            let evaluate_config = csvgate::commands::evaluate::EvaluateConfig {
                path,
                format,
                output,
                config,
                empty_row_warn_fraction,
                duplicate_warn_ratio,
                duplicate_scan_cap,
                ignore_patterns,
            };
            let run = csvgate::commands::evaluate::evaluate(evaluate_config)?;
            if run.overall_status == FileStatus::Fail {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init { force } => csvgate::commands::init::init_config(force),
    }
}
