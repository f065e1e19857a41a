//! Loader utilities for building [`GameData`] from the JSON data files.
//!
//! The data files use a restricted JSON-like dialect, parsed with a
//! deliberately forgiving line-oriented extractor rather than a full JSON
//! library. Parsing is best-effort: malformed lines and incomplete records
//! are skipped, and only an unopenable file produces a diagnostic.

pub mod extract;
pub mod items;
pub mod monsters;
pub mod recipes;
pub mod scan;
pub mod track;

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::data_paths::{data_path, data_root};
use crate::world::GameData;
use self::scan::DataError;

/// Result of one best-effort read pass: every record that could be
/// recovered, plus any diagnostics worth surfacing to the operator.
#[derive(Debug)]
pub struct ReadOutcome<T> {
    /// Recovered records, in file encounter order.
    pub records: Vec<T>,
    /// Non-fatal conditions the operator should hear about.
    pub diagnostics: Vec<DataError>,
}

impl<T> Default for ReadOutcome<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl<T> ReadOutcome<T> {
    /// Empty outcome carrying a single open-failure diagnostic.
    pub(crate) fn failed(err: DataError) -> Self {
        Self {
            records: Vec::new(),
            diagnostics: vec![err],
        }
    }
}

/// List the `*.json` files present under the resolved data root.
///
/// A missing or unreadable directory yields an empty list with a `warn!`;
/// loading itself works from fixed file names and does not depend on this
/// listing.
pub fn discover_data_files() -> Vec<PathBuf> {
    let root = data_root();
    let entries = match fs::read_dir(&root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("data directory '{}' not readable: {err}", root.display());
            return Vec::new();
        },
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Load all game data in one pass.
///
/// Never fails: an unreadable file contributes an empty record list and a
/// logged diagnostic, and malformed content within a file is skipped record
/// by record.
pub fn load_game_data() -> GameData {
    for path in discover_data_files() {
        info!("found data file '{}'", path.display());
    }

    let items = items::read_items(&data_path("items.json"));
    let monsters = monsters::read_monsters(&data_path("monsters.json"));
    let recipes = recipes::read_recipes(&data_path("recipes.json"));

    for diag in items
        .diagnostics
        .iter()
        .chain(&monsters.diagnostics)
        .chain(&recipes.diagnostics)
    {
        warn!("{diag}");
    }
    info!("{} items loaded into GameData", items.records.len());
    info!("{} monsters loaded into GameData", monsters.records.len());
    info!("{} recipes loaded into GameData", recipes.records.len());

    GameData {
        items: items.records,
        monsters: monsters.records,
        recipes: recipes.records,
    }
}
