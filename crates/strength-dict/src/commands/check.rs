//! Check command: verify that every asset loads.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::DictionarySelection;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {}

#[derive(Serialize)]
struct CheckReport {
    ok: bool,
    source: String,
    assets: Vec<CheckedAsset>,
}

#[derive(Serialize)]
struct CheckedAsset {
    name: &'static str,
    entries: usize,
}

/// Load all six assets. A failing asset is reported through the returned error.
#[instrument(name = "cmd_check", skip_all)]
pub fn cmd_check(
    _args: CheckArgs,
    global_json: bool,
    selection: &DictionarySelection,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing check command");
    let dicts = selection.load()?;

    let report = CheckReport {
        ok: true,
        source: selection.source().describe(),
        assets: dicts
            .summary()
            .into_iter()
            .map(|(name, entries)| CheckedAsset {
                name: name.as_str(),
                entries,
            })
            .collect(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for asset in &report.assets {
            println!("{} {} ({} entries)", "ok".green(), asset.name, asset.entries);
        }
        println!(
            "{} {} assets loaded from {}",
            "PASS:".green(),
            report.assets.len(),
            report.source
        );
    }
    Ok(())
}
