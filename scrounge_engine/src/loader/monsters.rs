//! Reader for monster definitions.

use std::mem;
use std::path::Path;

use scrounge_data::MonsterDef;

use super::ReadOutcome;
use super::extract;
use super::scan::{LineScanner, Trim};
use super::track::ObjectTracker;

/// Read every well-formed monster record from `path`, in file order.
///
/// Records are brace-delimited objects inside the file-level array. A
/// record needs a non-empty `id` and `name.str` to commit; combat stats
/// absent from an object stay 0.
pub fn read_monsters(path: &Path) -> ReadOutcome<MonsterDef> {
    let scanner = match LineScanner::open(path, Trim::Trimmed) {
        Ok(scanner) => scanner,
        Err(err) => return ReadOutcome::failed(err),
    };

    let mut outcome = ReadOutcome::default();
    let mut tracker = ObjectTracker::new();
    let mut partial = MonsterDef::default();
    for line in scanner {
        let was_inside = tracker.inside();
        let boundary = tracker.observe(&line);
        if boundary.entered {
            partial = MonsterDef::default();
        }
        if boundary.entered || was_inside {
            apply_fields(&mut partial, &line);
        }
        if boundary.exited {
            if partial.id.is_empty() || partial.name.is_empty() {
                partial = MonsterDef::default();
            } else {
                outcome.records.push(mem::take(&mut partial));
            }
        }
    }
    outcome
}

/// Overwrite any monster field this line carries (last write wins).
fn apply_fields(partial: &mut MonsterDef, line: &str) {
    if let Some(id) = extract::quoted_value(line, "id") {
        partial.id = id.to_string();
    }
    if let Some(name) = extract::nested_quoted_value(line, "name", "str") {
        partial.name = name.to_string();
    }
    if let Some(hp) = extract::int_value(line, "hp") {
        partial.hp = hp;
    }
    if let Some(dice) = extract::int_value(line, "melee_dice") {
        partial.melee_dice = dice;
    }
    if let Some(sides) = extract::int_value(line, "melee_dice_sides") {
        partial.melee_dice_sides = sides;
    }
    if let Some(armor) = extract::int_value(line, "armor") {
        partial.armor = armor;
    }
}
