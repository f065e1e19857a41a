#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SCROUNGE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod data_paths;
pub mod loader;
pub mod world;

// Re-exports for convenience
pub use loader::{ReadOutcome, load_game_data};
pub use world::GameData;
