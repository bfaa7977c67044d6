use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use log::error;
use mktree_layout::check_layout;

use crate::commands::read_layout;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Layout file to validate (`-` reads from stdin)
    pub layout: PathBuf,
}

pub fn run(args: CheckArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[check] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: CheckArgs) -> Result<ExitCode> {
    let text = read_layout(&args.layout)?;

    match check_layout(&text) {
        Ok(()) => {
            println!("[check] {}: ok", args.layout.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            // An invalid layout is a soft failure, distinct from I/O errors.
            eprintln!("[check] {}: {e}", args.layout.display());
            Ok(ExitCode::from(1))
        }
    }
}
