use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, Write};

use lined::cli::CliArgs;
use lined::commands;
use lined::model::EditorState;
use lined::runtime;

fn main() -> Result<()> {
    lined::tracing::init();

    let startup = CliArgs::parse().resolve().map_err(|e| anyhow!(e))?;
    tracing::debug!("Startup config: {:?}", startup);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if startup.list_commands {
        commands::write_summary(&mut out).context("Failed to write output")?;
        return Ok(());
    }

    let mut state = EditorState::with_config(&startup.editor);

    if let Some(path) = startup.initial_file {
        runtime::open_initial(&mut state, path, &mut out).context("Failed to write output")?;
        out.flush()?;
    }

    let stdin = io::stdin();
    let outcome = runtime::run(&mut state, stdin.lock(), &mut out, &startup.editor.farewell)
        .context("Editor session failed")?;
    tracing::debug!("Exiting after {:?}", outcome);

    Ok(())
}
