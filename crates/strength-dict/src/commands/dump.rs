//! Dump command: the full namespace as JSON.

use clap::Args;
use tracing::{debug, instrument};

use super::DictionarySelection;

/// Arguments for the `dump` subcommand.
#[derive(Args, Debug, Default)]
pub struct DumpArgs {
    /// Print on a single line instead of pretty-printing.
    #[arg(long)]
    pub compact: bool,
}

/// Print all six assets as one JSON object keyed by export name.
///
/// Always JSON, so the global `--json` flag has no effect here.
#[instrument(name = "cmd_dump", skip_all, fields(compact = args.compact))]
pub fn cmd_dump(args: DumpArgs, selection: &DictionarySelection) -> anyhow::Result<()> {
    debug!("executing dump command");
    let dicts = selection.load()?;
    let json = if args.compact {
        serde_json::to_string(&dicts)?
    } else {
        serde_json::to_string_pretty(&dicts)?
    };
    println!("{json}");
    Ok(())
}
