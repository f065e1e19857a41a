use std::collections::HashSet;
use std::fmt;

use crate::{ItemDef, MonsterDef, RecipeDef};

/// Validation finding for duplicate ids or dangling item references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check loaded definitions for duplicate ids and recipe references to
/// unknown items.
///
/// Findings are advisory: the loader reports them to the operator but still
/// serves every record it managed to parse.
///
/// ```
/// use scrounge_data::{ItemDef, RecipeDef, validate_defs};
///
/// let items = vec![ItemDef { id: "plank".into(), name: "Wooden Plank".into() }];
/// let recipes = vec![RecipeDef {
///     id: "craft_plank".into(),
///     result: "plank".into(),
///     components: Vec::new(),
/// }];
/// assert!(validate_defs(&items, &[], &recipes).is_empty());
/// ```
pub fn validate_defs(
    items: &[ItemDef],
    monsters: &[MonsterDef],
    recipes: &[RecipeDef],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut item_ids = HashSet::new();
    let mut monster_ids = HashSet::new();
    let mut recipe_ids = HashSet::new();

    track_ids("item", items.iter().map(|i| i.id.as_str()), &mut item_ids, &mut errors);
    track_ids(
        "monster",
        monsters.iter().map(|m| m.id.as_str()),
        &mut monster_ids,
        &mut errors,
    );
    track_ids(
        "recipe",
        recipes.iter().map(|r| r.id.as_str()),
        &mut recipe_ids,
        &mut errors,
    );

    for recipe in recipes {
        check_ref(
            "item",
            &recipe.result,
            &item_ids,
            format!("recipe '{}' result", recipe.id),
            &mut errors,
        );
        for component in &recipe.components {
            check_ref(
                "item",
                &component.item,
                &item_ids,
                format!("recipe '{}' component", recipe.id),
                &mut errors,
            );
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
