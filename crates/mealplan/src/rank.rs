use std::{cmp::Reverse, collections::BTreeSet};

use bepviet_shared::recipe::{Favorite, Recipe};

/// Union of the tags carried by the user's favorites.
pub fn preferred_tags(favorites: &[Favorite]) -> BTreeSet<String> {
    favorites
        .iter()
        .flat_map(|favorite| favorite.tag_ids.iter().cloned())
        .collect()
}

/// Orders candidates by how many preferred tags they share, most first.
/// Ties keep their incoming order.
pub fn rank<'a>(mut candidates: Vec<&'a Recipe>, preferred: &BTreeSet<String>) -> Vec<&'a Recipe> {
    if preferred.is_empty() {
        return candidates;
    }

    candidates.sort_by_key(|recipe| Reverse(recipe.shared_tags(preferred)));
    candidates
}
