use std::collections::HashSet;

use bepviet_shared::recipe::Recipe;

use crate::{Constraints, NutritionGroup, Picker, ResolvedConstraints};

/// Everything a day needs to fill its three meals.
pub struct DayContext<'a> {
    pub constraints: &'a Constraints,
    pub resolved: &'a ResolvedConstraints,
    /// Filtered and ranked for this day.
    pub candidates: &'a [&'a Recipe],
    /// The user's favorites found in the published catalog.
    pub favorites: &'a [&'a Recipe],
    pub catalog: &'a [Recipe],
}

/// Picks breakfast, lunch and dinner. Every pick joins `used` before the next one is made.
pub fn plan_day<P: Picker>(
    ctx: &DayContext<'_>,
    used: &mut HashSet<String>,
    picker: &mut P,
) -> [Option<String>; 3] {
    if ctx.constraints.balance {
        plan_balanced(ctx, used, picker)
    } else {
        plan_unconstrained(ctx, used, picker)
    }
}

fn plan_balanced<P: Picker>(
    ctx: &DayContext<'_>,
    used: &mut HashSet<String>,
    picker: &mut P,
) -> [Option<String>; 3] {
    NutritionGroup::DAY_ORDER.map(|group| {
        let group_tag_ids = ctx.resolved.group_tag_ids(group);

        let recipe = pick_unused(
            ctx.candidates
                .iter()
                .copied()
                .filter(|recipe| recipe.has_any_tag(group_tag_ids)),
            used,
            picker,
        )
        .or_else(|| {
            tracing::debug!(%group, "no candidate in group, trying favorites");

            pick_unused(
                ctx.favorites
                    .iter()
                    .copied()
                    .filter(|recipe| recipe.has_any_tag(group_tag_ids)),
                used,
                picker,
            )
        })
        .or_else(|| {
            tracing::debug!(%group, "no favorite in group, falling back to catalog");

            pick_unused(
                ctx.catalog
                    .iter()
                    .filter(|recipe| recipe.is_published() && !ctx.resolved.is_excluded(recipe)),
                used,
                picker,
            )
        });

        let Some(recipe) = recipe else {
            tracing::warn!(%group, "no recipe left for meal");
            return None;
        };

        used.insert(recipe.id.to_owned());

        Some(recipe.id.to_owned())
    })
}

fn plan_unconstrained<P: Picker>(
    ctx: &DayContext<'_>,
    used: &mut HashSet<String>,
    picker: &mut P,
) -> [Option<String>; 3] {
    let mut picks = Vec::with_capacity(3);
    let mut pool = ctx.candidates.to_vec();

    while picks.len() < 3 {
        let Some(index) = picker.pick_index(pool.len()) else {
            break;
        };

        let recipe = pool.remove(index);
        if ctx.constraints.no_repeat && used.contains(&recipe.id) {
            continue;
        }

        used.insert(recipe.id.to_owned());
        picks.push(recipe.id.to_owned());
    }

    if picks.len() < 3 {
        tracing::debug!(picked = picks.len(), "candidates exhausted, trying favorites");
        top_up(&mut picks, ctx.favorites.iter().copied(), used, picker);
    }

    if picks.len() < 3 {
        tracing::debug!(picked = picks.len(), "favorites exhausted, falling back to catalog");
        top_up(
            &mut picks,
            ctx.catalog.iter().filter(|recipe| recipe.is_published()),
            used,
            picker,
        );
    }

    if picks.len() < 3 {
        tracing::warn!(picked = picks.len(), "no recipe left for some meals");
    }

    let mut slots = [None, None, None];
    for (slot, id) in slots.iter_mut().zip(picks) {
        *slot = Some(id);
    }

    slots
}

fn pick_unused<'a, P: Picker>(
    pool: impl Iterator<Item = &'a Recipe>,
    used: &HashSet<String>,
    picker: &mut P,
) -> Option<&'a Recipe> {
    let pool = pool
        .filter(|recipe| !used.contains(&recipe.id))
        .collect::<Vec<_>>();

    picker.pick(&pool).copied()
}

fn top_up<'a, P: Picker>(
    picks: &mut Vec<String>,
    pool: impl Iterator<Item = &'a Recipe>,
    used: &mut HashSet<String>,
    picker: &mut P,
) {
    let mut pool = pool
        .filter(|recipe| !used.contains(&recipe.id))
        .collect::<Vec<_>>();

    while picks.len() < 3 {
        let Some(index) = picker.pick_index(pool.len()) else {
            break;
        };

        let recipe = pool.remove(index);
        used.insert(recipe.id.to_owned());
        picks.push(recipe.id.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use bepviet_shared::recipe::{Ingredient, RecipeStatus};

    use super::*;
    use crate::{FirstPicker, RandomPicker};

    fn recipe(id: &str, tags: &[&str]) -> Recipe {
        Recipe {
            id: id.to_owned(),
            title: id.to_owned(),
            tag_ids: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![],
            status: RecipeStatus::Published,
        }
    }

    fn groups() -> ResolvedConstraints {
        ResolvedConstraints {
            nutrition_groups: BTreeMap::from([
                (NutritionGroup::Carb, BTreeSet::from(["carb".to_owned()])),
                (NutritionGroup::Meat, BTreeSet::from(["meat".to_owned()])),
                (NutritionGroup::Veggie, BTreeSet::from(["veggie".to_owned()])),
            ]),
            ..Default::default()
        }
    }

    fn balanced() -> Constraints {
        Constraints::default()
    }

    fn unconstrained() -> Constraints {
        Constraints {
            balance: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_balanced_fills_groups_in_meal_order() {
        let catalog = vec![
            recipe("veg", &["veggie"]),
            recipe("beef", &["meat"]),
            recipe("rice", &["carb"]),
        ];
        let candidates = catalog.iter().collect::<Vec<_>>();
        let (constraints, resolved) = (balanced(), groups());
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &candidates,
            favorites: &[],
            catalog: &catalog,
        };
        let mut used = HashSet::new();

        let picks = plan_day(&ctx, &mut used, &mut RandomPicker::seeded(3));

        assert_eq!(
            picks,
            [
                Some("rice".to_owned()),
                Some("beef".to_owned()),
                Some("veg".to_owned())
            ]
        );
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_balanced_falls_back_to_favorites_then_catalog() {
        let catalog = vec![
            recipe("rice", &["carb"]),
            recipe("fav-beef", &["meat"]),
            recipe("plain", &[]),
        ];
        let candidates = vec![&catalog[0]];
        let favorites = vec![&catalog[1]];
        let (constraints, resolved) = (balanced(), groups());
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &candidates,
            favorites: &favorites,
            catalog: &catalog,
        };

        let picks = plan_day(&ctx, &mut HashSet::new(), &mut FirstPicker);

        assert_eq!(
            picks,
            [
                Some("rice".to_owned()),
                Some("fav-beef".to_owned()),
                Some("plain".to_owned())
            ]
        );
    }

    #[test]
    fn test_balanced_last_resort_honors_exclusions() {
        let mut onion = recipe("onion", &[]);
        onion.ingredients.push(Ingredient {
            name: "Hành".to_owned(),
            quantity: "1 củ".to_owned(),
        });
        let catalog = vec![recipe("spicy", &["spicy"]), onion];
        let constraints = balanced();
        let resolved = ResolvedConstraints {
            exclude_tag_ids: BTreeSet::from(["spicy".to_owned()]),
            exclude_ingredient_names: BTreeSet::from(["hành".to_owned()]),
            ..groups()
        };
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &[],
            favorites: &[],
            catalog: &catalog,
        };

        let picks = plan_day(&ctx, &mut HashSet::new(), &mut FirstPicker);

        assert_eq!(picks, [None, None, None]);
    }

    #[test]
    fn test_balanced_skips_used_and_leaves_empty_slots() {
        let catalog = vec![recipe("rice", &["carb"])];
        let candidates = catalog.iter().collect::<Vec<_>>();
        let (constraints, resolved) = (balanced(), groups());
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &candidates,
            favorites: &[],
            catalog: &catalog,
        };
        let mut used = HashSet::from(["rice".to_owned()]);

        let picks = plan_day(&ctx, &mut used, &mut FirstPicker);

        assert_eq!(picks, [None, None, None]);
    }

    #[test]
    fn test_unconstrained_draws_in_order_then_tops_up() {
        let catalog = vec![
            recipe("a", &[]),
            recipe("b", &[]),
            recipe("fav", &[]),
            recipe("spicy", &["spicy"]),
        ];
        let candidates = vec![&catalog[0], &catalog[1]];
        let favorites = vec![&catalog[2]];
        let constraints = unconstrained();
        let resolved = ResolvedConstraints {
            exclude_tag_ids: BTreeSet::from(["spicy".to_owned()]),
            ..groups()
        };
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &candidates,
            favorites: &favorites,
            catalog: &catalog,
        };

        let picks = plan_day(&ctx, &mut HashSet::new(), &mut FirstPicker);

        assert_eq!(
            picks,
            [Some("a".to_owned()), Some("b".to_owned()), Some("fav".to_owned())]
        );
    }

    #[test]
    fn test_unconstrained_last_resort_ignores_exclusions() {
        let catalog = vec![recipe("spicy", &["spicy"])];
        let constraints = unconstrained();
        let resolved = ResolvedConstraints {
            exclude_tag_ids: BTreeSet::from(["spicy".to_owned()]),
            ..groups()
        };
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &[],
            favorites: &[],
            catalog: &catalog,
        };

        let picks = plan_day(&ctx, &mut HashSet::new(), &mut FirstPicker);

        assert_eq!(picks, [Some("spicy".to_owned()), None, None]);
    }

    #[test]
    fn test_unconstrained_no_repeat_skips_used_candidates() {
        let catalog = vec![recipe("a", &[]), recipe("b", &[])];
        let candidates = catalog.iter().collect::<Vec<_>>();
        let constraints = Constraints {
            no_repeat: true,
            ..unconstrained()
        };
        let resolved = groups();
        let ctx = DayContext {
            constraints: &constraints,
            resolved: &resolved,
            candidates: &candidates,
            favorites: &[],
            catalog: &catalog,
        };
        let mut used = HashSet::from(["a".to_owned()]);

        let picks = plan_day(&ctx, &mut used, &mut FirstPicker);

        assert_eq!(picks, [Some("b".to_owned()), None, None]);
    }
}
