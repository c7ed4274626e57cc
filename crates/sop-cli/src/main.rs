//! SOP Factory command-line application
//!
//! Thin front end over `sop_core`: parses arguments, opens the workbench
//! on the snapshot file and dispatches to [`cli::Cli`].

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sop_core::{ListDocuments, StoragePort, WorkbenchBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        storage_file,
        no_color,
        command,
    } = Args::parse();

    let workbench = WorkbenchBuilder::new()
        .with_storage_path(storage_file)
        .build()
        .context("Failed to open SOP storage")?;

    info!("SOP Factory started on {}", workbench.store().port().location());

    let mut cli = Cli::new(workbench, TerminalRenderer::new(!no_color));

    match command {
        Some(List(args)) => cli.list(&args.into()),
        Some(Show(args)) => cli.show(&args.into()),
        Some(New(args)) => cli.create(args),
        Some(Edit(args)) => cli.edit(args),
        Some(Delete(args)) => cli.delete(args.into()),
        Some(Export(args)) => cli.export(args),
        Some(Templates) => cli.templates(),
        Some(Guide) => cli.guide(),
        None => cli.list(&ListDocuments::default()),
    }
}
