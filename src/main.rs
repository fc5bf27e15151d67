use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tableau_sat::runner::run_file;

/// Decides satisfiability of one formula per line, under the directives on
/// the file's first line.
#[derive(Debug, ClapParser)]
#[command(name = "tableau-sat", about)]
struct Cli {
    /// Path to the input file.
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run_file(&cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
