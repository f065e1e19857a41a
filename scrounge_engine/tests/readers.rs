//! Fixture-driven scenarios for the three record readers.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use scrounge_data::ComponentDef;
use scrounge_engine::loader::items::read_items;
use scrounge_engine::loader::monsters::read_monsters;
use scrounge_engine::loader::recipes::read_recipes;

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const MONSTERS: &str = r#"[
  {
    "id": "rat",
    "name": { "str": "Sewer Rat" },
    "hp": 5,
    "melee_dice": 1,
    "melee_dice_sides": 3
  },
  {
    "id": "feral_dog",
    "name": { "str": "Feral Dog" },
    "hp": 14,
    "armor": 1
  }
]
"#;

#[test]
fn monsters_parse_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "monsters.json", MONSTERS);

    let outcome = read_monsters(&path);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.records.len(), 2);

    let rat = &outcome.records[0];
    assert_eq!(rat.id, "rat");
    assert_eq!(rat.name, "Sewer Rat");
    assert_eq!(rat.hp, 5);
    assert_eq!(rat.melee_dice, 1);
    assert_eq!(rat.melee_dice_sides, 3);
    assert_eq!(rat.armor, 0);

    let dog = &outcome.records[1];
    assert_eq!(dog.id, "feral_dog");
    assert_eq!((dog.melee_dice, dog.melee_dice_sides), (0, 0));
    assert_eq!(dog.armor, 1);
}

#[test]
fn one_line_monster_object_parses() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "monsters.json",
        "[\n{\"id\":\"rat\",\"name\":{\"str\":\"Rat\"},\"hp\":5}\n]\n",
    );

    let outcome = read_monsters(&path);
    assert_eq!(outcome.records.len(), 1);
    let rat = &outcome.records[0];
    assert_eq!(rat.id, "rat");
    assert_eq!(rat.name, "Rat");
    assert_eq!(rat.hp, 5);
    assert_eq!(rat.melee_dice, 0);
    assert_eq!(rat.melee_dice_sides, 0);
    assert_eq!(rat.armor, 0);
}

#[test]
fn monster_missing_name_is_dropped() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "monsters.json",
        "[\n  {\n    \"id\": \"ghost\",\n    \"hp\": 3\n  },\n  {\n    \"id\": \"rat\",\n    \"name\": { \"str\": \"Rat\" }\n  }\n]\n",
    );

    let outcome = read_monsters(&path);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].id, "rat");
}

#[test]
fn duplicate_field_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "monsters.json",
        "[\n  {\n    \"id\": \"rat\",\n    \"name\": { \"str\": \"Rat\" },\n    \"hp\": 5,\n    \"hp\": 9\n  }\n]\n",
    );

    let outcome = read_monsters(&path);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].hp, 9);
}

#[test]
fn unparseable_stat_falls_back_to_zero() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "monsters.json",
        "[\n  {\n    \"id\": \"rat\",\n    \"name\": { \"str\": \"Rat\" },\n    \"hp\": lots\n  }\n]\n",
    );

    let outcome = read_monsters(&path);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].hp, 0);
}

#[test]
fn items_commit_when_name_follows_id() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "items.json",
        "[\n  {\n    \"id\": \"plank\",\n    \"name\": { \"str\": \"Wooden Plank\" }\n  },\n  {\n    \"id\": \"rag\",\n    \"name\": { \"str\": \"Dirty Rag\" }\n  }\n]\n",
    );

    let outcome = read_items(&path);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].id, "plank");
    assert_eq!(outcome.records[0].name, "Wooden Plank");
    assert_eq!(outcome.records[1].id, "rag");
}

#[test]
fn item_name_without_preceding_id_is_dropped() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "items.json",
        "\"name\": { \"str\": \"Orphan\" }\n\"id\": \"late\"\n",
    );

    let outcome = read_items(&path);
    assert!(outcome.records.is_empty());
}

#[test]
fn item_reader_tolerates_unindented_and_indented_lines() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "items.json",
        "\"id\": \"plank\"\n        \"name\": { \"str\": \"Wooden Plank\" }\n",
    );

    let outcome = read_items(&path);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].name, "Wooden Plank");
}

const RECIPES: &str = r#"[
  {
    "id": "craft_torch",
    "result": "torch",
    "components": [
      [ [ "pointy_stick", 1 ] ],
      [ [ "rag", 2 ] ],
      [ [ "rag", 2 ] ]
    ]
  }
]
"#;

#[test]
fn recipe_components_accumulate_in_order_with_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "recipes.json", RECIPES);

    let outcome = read_recipes(&path);
    assert_eq!(outcome.records.len(), 1);
    let recipe = &outcome.records[0];
    assert_eq!(recipe.id, "craft_torch");
    assert_eq!(recipe.result, "torch");
    assert_eq!(
        recipe.components,
        vec![
            ComponentDef {
                item: "pointy_stick".into(),
                count: 1
            },
            ComponentDef {
                item: "rag".into(),
                count: 2
            },
            ComponentDef {
                item: "rag".into(),
                count: 2
            },
        ]
    );
}

#[test]
fn recipe_missing_result_is_dropped() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "recipes.json",
        "[\n  {\n    \"id\": \"craft_mystery\",\n    \"components\": [\n      [ [ \"plank\", 2 ] ]\n    ]\n  }\n]\n",
    );

    let outcome = read_recipes(&path);
    assert!(outcome.records.is_empty());
}

#[test]
fn malformed_pair_line_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "recipes.json",
        "[\n  {\n    \"id\": \"craft_torch\",\n    \"result\": \"torch\",\n    \"components\": [\n      [ [ \"rag\" ] ],\n      [ [ \"plank\", 2 ] ]\n    ]\n  }\n]\n",
    );

    let outcome = read_recipes(&path);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(
        outcome.records[0].components,
        vec![ComponentDef {
            item: "plank".into(),
            count: 2
        }]
    );
}

#[test]
fn unopenable_file_yields_empty_outcome_with_diagnostic() {
    let missing = PathBuf::from("definitely/not/here.json");

    let items = read_items(&missing);
    assert!(items.records.is_empty());
    assert_eq!(items.diagnostics.len(), 1);

    let monsters = read_monsters(&missing);
    assert!(monsters.records.is_empty());
    assert_eq!(monsters.diagnostics.len(), 1);

    let recipes = read_recipes(&missing);
    assert!(recipes.records.is_empty());
    assert_eq!(recipes.diagnostics.len(), 1);
}

#[test]
fn reparsing_the_same_file_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "monsters.json", MONSTERS);

    let first = read_monsters(&path);
    let second = read_monsters(&path);
    assert_eq!(first.records, second.records);
}

#[test]
fn fixtures_are_real_json() {
    // The readers never require full JSON, but the data files conventionally
    // are; keep the fixtures honest the way the shipped files are.
    for fixture in [MONSTERS, RECIPES] {
        serde_json::from_str::<serde_json::Value>(fixture).unwrap();
    }
}
