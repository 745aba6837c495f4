// Command-line front end over the same workbench controller as the GUI
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use formula_workbench::client::models::options::OptionFields;
use formula_workbench::utils::logger::WorkbenchLogger;
use formula_workbench::{ApiClient, ClientConfig, WorkbenchState};

#[derive(Parser)]
#[command(name = "workbench-cli", about = "Generate and solve CNF formulas through a workbench backend")]
struct Cli {
    /// Backend base URL, overrides WORKBENCH_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Print the built-in sample formula
    Sample,
    /// Ask the backend for a random formula; blank or non-numeric values use the defaults
    Generate {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        vars: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        clauses: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        min_clause: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        max_clause: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        seed: String,
        /// Write the formula here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve a DIMACS file ("-" or nothing reads stdin)
    Solve { path: Option<PathBuf> },
}

fn read_formula(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("cannot read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("cannot read formula from stdin")?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    WorkbenchLogger::init(&config.log_level);
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url)?;
    }

    let mut state = WorkbenchState::new();
    match cli.command {
        CliCommand::Sample => {
            state.load_sample();
            print!("{}", state.formula);
        }
        CliCommand::Generate { vars, clauses, min_clause, max_clause, seed, out } => {
            let client = ApiClient::new(&config)?;
            state.option_fields = OptionFields { vars, clauses, min_clause, max_clause, seed };
            state.generate(&client).await?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &state.formula)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    info!("formula written to {}", path.display());
                }
                None => print!("{}", state.formula),
            }
        }
        CliCommand::Solve { path } => {
            let client = ApiClient::new(&config)?;
            state.set_formula(read_formula(path.as_ref())?);
            state.solve(&client).await?;
            println!("{}", state.output);
            if let Some(verdict) = &state.verdict {
                info!("verdict: {}", verdict);
            }
        }
    }
    Ok(())
}
