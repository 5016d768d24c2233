use clap::Parser;
use fitch::Session;
use std::io;
use std::path::PathBuf;

/// Check Fitch-style natural deduction proofs, interactively or from
/// session scripts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Session scripts to run; with no arguments an interactive session
    /// starts on stdin.
    inputs: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.inputs.is_empty() {
        if let Err(err) = Session::new().run() {
            eprintln!("IO error: {err}");
            std::process::exit(1);
        }
        return;
    }

    for path in &args.inputs {
        let script = match std::fs::read_to_string(path) {
            Ok(script) => script,
            Err(err) => {
                eprintln!("failed to read {}: {err}", path.display());
                std::process::exit(1);
            }
        };
        let mut session = Session::new();
        if let Err(err) = session.run_with(script.as_bytes(), io::stdout()) {
            eprintln!("IO error: {err}");
            std::process::exit(1);
        }
    }
}
