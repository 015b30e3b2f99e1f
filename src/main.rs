//! fightmove - replay recorded controller input against a move catalog.
//!
//! Prints one line per accepted frame with the special move or standard action
//! it resolved to.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use fightmove::config::{self, ReplayScript};
use fightmove::replay::replay;
use fightmove::{FighterDirection, PlayerId};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug shows matcher decisions)
    env_logger::init();

    let matches = Command::new("fightmove")
        .version(fightmove::VERSION)
        .about("Replay recorded controller input against a special-move catalog")
        .long_about(
            "fightmove feeds a recorded input script through the motion matcher and \
             prints, for every accepted frame, the special move that fired or the \
             standard action derived from the stick and button.",
        )
        .arg(
            Arg::new("script")
                .help("Path to the replay script (TOML with [[frames]])")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("catalog")
                .short('c')
                .long("catalog")
                .help("Move catalog to match against (defaults to the user config dir)"),
        )
        .arg(
            Arg::new("facing")
                .short('f')
                .long("facing")
                .help("Fighter facing (left|right), overriding the script's own"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Refuse catalogs containing moves that can never fire"),
        )
        .arg(
            Arg::new("animation")
                .short('a')
                .long("animation")
                .action(ArgAction::SetTrue)
                .help("Also print the animation commands for each result"),
        )
        .get_matches();

    let script_path = PathBuf::from(
        matches
            .get_one::<String>("script")
            .context("script argument is required")?,
    );
    let catalog_path = match matches.get_one::<String>("catalog") {
        Some(path) => PathBuf::from(path),
        None => config::default_catalog_path()
            .context("no --catalog given and no config directory on this platform")?,
    };

    if !catalog_path.is_file() {
        anyhow::bail!("Catalog file does not exist: {}", catalog_path.display());
    }

    let fight_config = config::load_config(&catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    if matches.get_flag("strict") {
        fight_config.catalog.ensure_valid()?;
    }

    let ReplayScript { facing, frames } = config::load_script(&script_path)
        .with_context(|| format!("loading script {}", script_path.display()))?;
    let facing = match matches.get_one::<String>("facing") {
        Some(value) => value.parse::<FighterDirection>()?,
        None => facing.unwrap_or_default(),
    };

    let catalog = Arc::new(fight_config.catalog);
    let events = replay(&frames, catalog, PlayerId::ONE, facing);

    for event in &events {
        println!(
            "#{:<4} {:>6}ms  {}",
            event.frame,
            event.at.as_millis(),
            event.result
        );
        if matches.get_flag("animation") {
            for command in fight_config.animation.commands_for(&event.result) {
                println!("        {command:?}");
            }
        }
    }

    Ok(())
}
