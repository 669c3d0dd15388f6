use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Ingredient,
    CookingStyle,
    Nutrition,
    Region,
    Occasion,
    CookingTime,
    #[default]
    Other,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RecipeStatus {
    #[default]
    Published,
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: TagCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag_ids: BTreeSet<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub status: RecipeStatus,
}

impl Recipe {
    pub fn is_published(&self) -> bool {
        self.status == RecipeStatus::Published
    }

    pub fn has_tag(&self, id: &str) -> bool {
        self.tag_ids.contains(id)
    }

    pub fn has_any_tag(&self, ids: &BTreeSet<String>) -> bool {
        self.tag_ids.iter().any(|id| ids.contains(id))
    }

    /// Number of this recipe's tags found in `ids`.
    pub fn shared_tags(&self, ids: &BTreeSet<String>) -> usize {
        self.tag_ids.intersection(ids).count()
    }
}

/// A recipe a user marked as favorite, carrying the recipe's tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: String,
    pub recipe_id: String,
    #[serde(default)]
    pub tag_ids: BTreeSet<String>,
}
