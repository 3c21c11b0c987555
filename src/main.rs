#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! cmdbq — query YAML CMDB documents from the CLI.

mod cli;
mod cmdb;
mod commands;

use clap::Parser;

use cli::{Cli, OutputCtx};
use cmdb::CmdbError;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.format, cli.cmdb_file.clone());

    match run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), CmdbError> {
    let doc = cmdb::load_document(&cli.cmdb_file)?;
    commands::dispatch(&cli.mode(), &doc, ctx)
}
