//! Show command: print a single asset.

use clap::Args;
use strength_dict_core::{AssetRef, LogicalName};
use tracing::{debug, instrument};

use super::DictionarySelection;

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Asset to print (export name or file stem, e.g. `top10k` or `named-numbers`).
    #[arg(value_enum, ignore_case = true)]
    pub name: LogicalName,
}

/// Print one asset, one entry per line, or as its JSON wire format.
#[instrument(name = "cmd_show", skip_all, fields(asset = %args.name))]
pub fn cmd_show(
    args: ShowArgs,
    global_json: bool,
    selection: &DictionarySelection,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing show command");
    let dicts = selection.load()?;
    let asset = dicts.get(args.name);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&asset)?);
    } else {
        for line in render_lines(asset) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Tab-separated text rendering of an asset.
fn render_lines(asset: AssetRef<'_>) -> Vec<String> {
    match asset {
        AssetRef::NamedNumbers(numbers) => numbers
            .entries()
            .iter()
            .map(|entry| format!("10^{}\t{}", entry.magnitude, entry.name))
            .collect(),
        AssetRef::CharacterSets(sets) => sets
            .iter()
            .map(|set| format!("{}\t{}\t{}", set.name, set.size(), set.characters))
            .collect(),
        AssetRef::Periods(periods) => periods
            .iter()
            .map(|period| format!("{}\t{}", period.name, period.seconds))
            .collect(),
        AssetRef::WordList(words) => words
            .iter()
            .enumerate()
            .map(|(index, word)| format!("{}\t{word}", index + 1))
            .collect(),
        AssetRef::Patterns(patterns) => patterns.iter().map(str::to_string).collect(),
    }
}
