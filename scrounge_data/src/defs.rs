use serde::{Deserialize, Serialize};

/// Stable identifier used across record cross-references.
pub type Id = String;

/// One scavengeable or craftable item definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemDef {
    pub id: Id,
    /// Display name, stored under `name.str` in the source files.
    pub name: String,
}

/// One monster definition with its combat statistics.
///
/// Every numeric stat is optional in the source files and defaults to 0.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MonsterDef {
    pub id: Id,
    /// Display name, stored under `name.str` in the source files.
    pub name: String,
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub melee_dice: i32,
    #[serde(default)]
    pub melee_dice_sides: i32,
    #[serde(default)]
    pub armor: i32,
}

/// One (item, count) requirement within a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ComponentDef {
    pub item: Id,
    pub count: i32,
}

/// One crafting recipe: the item it produces and what it consumes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecipeDef {
    pub id: Id,
    /// Id of the item this recipe produces.
    pub result: Id,
    /// Required components in file order; duplicates are allowed.
    #[serde(default)]
    pub components: Vec<ComponentDef>,
}
