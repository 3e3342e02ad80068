//! List command: the six assets and their sizes.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::DictionarySelection;

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Default)]
pub struct ListArgs {}

#[derive(Serialize)]
struct AssetRow {
    name: &'static str,
    file: &'static str,
    entries: usize,
    description: &'static str,
}

/// Print every logical name with its file name and entry count.
#[instrument(name = "cmd_list", skip_all)]
pub fn cmd_list(
    _args: ListArgs,
    global_json: bool,
    selection: &DictionarySelection,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing list command");
    let dicts = selection.load()?;

    let rows: Vec<AssetRow> = dicts
        .summary()
        .into_iter()
        .map(|(name, entries)| AssetRow {
            name: name.as_str(),
            file: name.file_name(),
            entries,
            description: name.description(),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "{:<14} {:<20} {:>6}  {}",
                row.name.bold(),
                row.file.dimmed(),
                row.entries,
                row.description
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_list_text_succeeds() {
        assert!(cmd_list(ListArgs::default(), false, &DictionarySelection::default()).is_ok());
    }

    #[test]
    fn test_cmd_list_json_succeeds() {
        assert!(cmd_list(ListArgs::default(), true, &DictionarySelection::default()).is_ok());
    }
}
