//! Lookup command: where a password shows up in the dictionaries.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use strength_dict_core::Dictionaries;
use strength_dict_core::dictionaries::PatternMatch;
use tracing::{debug, instrument};

use super::DictionarySelection;

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Password to look up.
    pub word: String,
}

#[derive(Debug, Serialize)]
struct LookupReport<'a> {
    word: &'a str,
    top10_rank: Option<usize>,
    top10k_rank: Option<usize>,
    patterns: Vec<PatternMatch<'a>>,
    character_sets: Vec<&'a str>,
}

fn build_report<'a>(dicts: &'a Dictionaries, word: &'a str) -> LookupReport<'a> {
    let mut character_sets: Vec<&str> = Vec::new();
    for ch in word.chars() {
        let set = dicts
            .character_sets
            .set_of(ch)
            .map_or("other", |set| set.name.as_str());
        if !character_sets.contains(&set) {
            character_sets.push(set);
        }
    }

    LookupReport {
        word,
        top10_rank: dicts.top10.rank(word),
        top10k_rank: dicts.top10k.rank(word),
        patterns: dicts.patterns.find_in(word),
        character_sets,
    }
}

/// Report ranks, pattern matches, and character sets for one password.
#[instrument(name = "cmd_lookup", skip_all)]
pub fn cmd_lookup(
    args: LookupArgs,
    global_json: bool,
    selection: &DictionarySelection,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing lookup command");
    let dicts = selection.load()?;
    let report = build_report(&dicts, &args.word);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match (report.top10_rank, report.top10k_rank) {
        (Some(rank), _) => println!("{} top10 rank {rank}", "COMMON:".red()),
        (None, Some(rank)) => println!("{} top10k rank {rank}", "COMMON:".yellow()),
        (None, None) => println!(
            "{} not in the word lists ({} top10k entries checked)",
            "OK:".green(),
            dicts.top10k.len()
        ),
    }
    for m in &report.patterns {
        println!(
            "{} {} at {}..{}",
            "PATTERN:".yellow(),
            m.pattern,
            m.start,
            m.end
        );
    }
    println!("{}: {}", "Character sets".dimmed(), report.character_sets.join(", "));
    Ok(())
}
