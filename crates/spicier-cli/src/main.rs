//! Command-line entry point for Spicier (§6.3).

mod analysis;
mod graphs;
mod output;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use spicier_parser::AnalysisCommand;

#[derive(Parser, Debug)]
#[command(name = "spicier", about = "A small SPICE-style circuit simulator")]
struct Cli {
    /// Path to the netlist file.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Write one PNG per unknown to ./res when running a transient analysis.
    #[arg(long)]
    graphs: bool,

    /// Raise logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let Some(path) = cli.path else {
        // No netlist given: print usage and exit successfully.
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read netlist '{}'", path.display()))?;

    let parsed = spicier_parser::parse(&text)?;
    let netlist = parsed.netlist;

    match parsed.analysis {
        Some(AnalysisCommand::Op) | None => analysis::op::run(&netlist)?,
        Some(AnalysisCommand::Tran { tstep, tstop }) => {
            let params = spicier_solver::TransientParams { tstep, tstop };
            analysis::transient::run(&netlist, params, cli.graphs)?;
        }
    }

    Ok(())
}
