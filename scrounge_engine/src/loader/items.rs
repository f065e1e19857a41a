//! Reader for item definitions.
//!
//! The item dialect carries no reliable object markers, so completion is
//! field-driven: a record commits the moment its display name is extracted,
//! which requires `id` to have already appeared within the same logical
//! record. Lines are scanned exactly as read (no trimming).

use std::mem;
use std::path::Path;

use scrounge_data::ItemDef;

use super::ReadOutcome;
use super::extract;
use super::scan::{LineScanner, Trim};

/// Read every well-formed item record from `path`, in file order.
///
/// Best-effort: an unopenable file yields an empty outcome with a
/// diagnostic, and a name with no preceding id is dropped silently.
pub fn read_items(path: &Path) -> ReadOutcome<ItemDef> {
    let scanner = match LineScanner::open(path, Trim::Preserve) {
        Ok(scanner) => scanner,
        Err(err) => return ReadOutcome::failed(err),
    };

    let mut outcome = ReadOutcome::default();
    let mut id = String::new();
    for line in scanner {
        if let Some(value) = extract::quoted_value(&line, "id") {
            id = value.to_string();
        }
        if let Some(name) = extract::nested_quoted_value(&line, "name", "str")
            && !id.is_empty()
        {
            outcome.records.push(ItemDef {
                id: mem::take(&mut id),
                name: name.to_string(),
            });
        }
    }
    outcome
}
