use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use student_rec::{start_repl, DEFAULT_STORE_FILE};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optionally, sets the student record file to use
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let path = cli.file.unwrap_or(DEFAULT_STORE_FILE.into());

    match start_repl(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
