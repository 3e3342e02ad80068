//! strength-dict CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use strength_dict::commands::{self, DictionarySelection};
use strength_dict::{Cli, Commands};
use strength_dict_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = utf8_path(cwd, "current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        loader = loader.with_file(utf8_path(config_path.clone(), "config path")?);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    // --dict-dir is relative to the working directory, config values to their file.
    let dict_dir = match cli.dict_dir {
        Some(dir) => Some(cwd.join(utf8_path(dir, "dictionary directory")?)),
        None => config.resolved_dictionary_dir(&config_sources, &cwd),
    };
    let selection = DictionarySelection {
        dir: dict_dir,
        require_all: cli.require_all || config.require_all,
    };

    let result = match command {
        Commands::List(args) => commands::list::cmd_list(args, cli.json, &selection),
        Commands::Show(args) => commands::show::cmd_show(args, cli.json, &selection),
        Commands::Dump(args) => commands::dump::cmd_dump(args, &selection),
        Commands::Check(args) => commands::check::cmd_check(args, cli.json, &selection),
        Commands::Lookup(args) => commands::lookup::cmd_lookup(args, cli.json, &selection),
        Commands::Info(args) => {
            commands::info::cmd_info(args, cli.json, &config, &config_sources, &selection)
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

fn utf8_path(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path).map_err(|e| {
        anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display())
    })
}
