use std::collections::HashSet;

use bepviet_shared::recipe::Recipe;

use crate::ResolvedConstraints;

/// Published recipes not used yet that pass every hard filter, in catalog order.
pub fn candidates<'a>(
    recipes: &'a [Recipe],
    resolved: &ResolvedConstraints,
    used: &HashSet<String>,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.is_published())
        .filter(|recipe| !used.contains(&recipe.id))
        .filter(|recipe| resolved.admits(recipe))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bepviet_shared::recipe::{Ingredient, RecipeStatus};

    use super::*;

    fn recipe(id: &str, tags: &[&str]) -> Recipe {
        Recipe {
            id: id.to_owned(),
            title: id.to_owned(),
            tag_ids: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![Ingredient {
                name: format!("{id}-ingredient"),
                quantity: "1".to_owned(),
            }],
            status: RecipeStatus::Published,
        }
    }

    #[test]
    fn test_keeps_catalog_order_and_skips_used() {
        let recipes = vec![recipe("a", &[]), recipe("b", &[]), recipe("c", &[])];
        let used = HashSet::from(["b".to_owned()]);

        let ids = candidates(&recipes, &ResolvedConstraints::default(), &used)
            .iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>();

        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_skips_hidden_recipes() {
        let mut hidden = recipe("h", &[]);
        hidden.status = RecipeStatus::Hidden;
        let recipes = vec![hidden, recipe("a", &[])];

        let found = candidates(&recipes, &ResolvedConstraints::default(), &HashSet::new());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");
    }

    #[test]
    fn test_applies_profile_and_exclusions() {
        let recipes = vec![
            recipe("lean", &["protein"]),
            recipe("spicy", &["protein", "spicy"]),
            recipe("plain", &[]),
            recipe("onion", &["protein"]),
        ];
        let resolved = ResolvedConstraints {
            profile_tag_ids: Some(BTreeSet::from(["protein".to_owned()])),
            exclude_tag_ids: BTreeSet::from(["spicy".to_owned()]),
            exclude_ingredient_names: BTreeSet::from(["onion-ingredient".to_owned()]),
            ..Default::default()
        };

        let ids = candidates(&recipes, &resolved, &HashSet::new())
            .iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>();

        assert_eq!(ids, ["lean"]);
    }
}
