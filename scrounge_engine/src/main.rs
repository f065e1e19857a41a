#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Scrounge **
//! Survival prototype skeleton: loads the JSON data sets and reports what
//! it found. Game loop subsystems hang off the loaded [`GameData`].

use colored::Colorize;
use log::info;

use anyhow::{Result, bail};
use scrounge_data::validate_defs;
use scrounge_engine::data_paths::data_root;
use scrounge_engine::load_game_data;

fn main() -> Result<()> {
    env_logger::init();

    let root = data_root();
    if !root.is_dir() {
        bail!("data directory not found: {}", root.display());
    }

    info!("Start: loading Scrounge data files...");
    let data = load_game_data();
    info!("Scrounge data loaded.");

    println!("{:^60}", "SCROUNGE: A SURVIVAL PROTOTYPE".bright_yellow().underline());
    println!("\n  items:    {}", data.items.len());
    println!("  monsters: {}", data.monsters.len());
    println!("  recipes:  {}\n", data.recipes.len());

    let problems = validate_defs(&data.items, &data.monsters, &data.recipes);
    if problems.is_empty() {
        println!("{}", "data cross-references check out".green());
    } else {
        println!("{}", format!("{} data problems found:", problems.len()).red());
        for problem in &problems {
            println!("  - {problem}");
        }
    }

    Ok(())
}
