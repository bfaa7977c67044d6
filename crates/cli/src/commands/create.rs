use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use log::error;
use mktree_fs::create_tree;

use crate::commands::read_layout;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Layout file to materialize (`-` reads from stdin)
    pub layout: PathBuf,

    /// Directory to create the tree under (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub prefix: Option<PathBuf>,
}

pub fn run(args: CreateArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[create] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: CreateArgs) -> Result<ExitCode> {
    let text = read_layout(&args.layout)?;
    create_tree(&text, args.prefix.as_deref())?;
    Ok(ExitCode::SUCCESS)
}
