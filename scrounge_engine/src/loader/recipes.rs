//! Reader for crafting recipe definitions.

use std::mem;
use std::path::Path;

use scrounge_data::{ComponentDef, RecipeDef};

use super::ReadOutcome;
use super::extract;
use super::scan::{LineScanner, Trim};
use super::track::ObjectTracker;

/// Read every well-formed recipe record from `path`, in file order.
///
/// Records are brace-delimited objects needing non-empty `id` and `result`.
/// Component pair lines accumulate in encounter order for the duration of
/// the record; malformed pair lines add nothing.
pub fn read_recipes(path: &Path) -> ReadOutcome<RecipeDef> {
    let scanner = match LineScanner::open(path, Trim::Trimmed) {
        Ok(scanner) => scanner,
        Err(err) => return ReadOutcome::failed(err),
    };

    let mut outcome = ReadOutcome::default();
    let mut tracker = ObjectTracker::new();
    let mut partial = RecipeDef::default();
    for line in scanner {
        let was_inside = tracker.inside();
        let boundary = tracker.observe(&line);
        if boundary.entered {
            partial = RecipeDef::default();
        }
        if boundary.entered || was_inside {
            apply_fields(&mut partial, &line);
        }
        if boundary.exited {
            if partial.id.is_empty() || partial.result.is_empty() {
                partial = RecipeDef::default();
            } else {
                outcome.records.push(mem::take(&mut partial));
            }
        }
    }
    outcome
}

/// Overwrite scalar recipe fields (last write wins) and append any
/// component pair this line carries.
fn apply_fields(partial: &mut RecipeDef, line: &str) {
    if let Some(id) = extract::quoted_value(line, "id") {
        partial.id = id.to_string();
    }
    if let Some(result) = extract::quoted_value(line, "result") {
        partial.result = result.to_string();
    }
    if let Some((item, count)) = extract::component_pair(line) {
        partial.components.push(ComponentDef { item, count });
    }
}
