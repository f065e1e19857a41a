//! Aggregate game data handed to the rest of the engine.

use scrounge_data::{ItemDef, MonsterDef, RecipeDef};

/// Every record recovered from the data files, in file order.
///
/// Lookups are linear scans; the data sets are small enough that an index
/// would buy nothing. The collections are read-only from the game loop's
/// perspective: nothing is ever written back to the data files.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub items: Vec<ItemDef>,
    pub monsters: Vec<MonsterDef>,
    pub recipes: Vec<RecipeDef>,
}

impl GameData {
    /// Find an item definition by id.
    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Find a monster definition by id.
    pub fn monster(&self, id: &str) -> Option<&MonsterDef> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    /// Find a recipe definition by id.
    pub fn recipe(&self, id: &str) -> Option<&RecipeDef> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}
