use std::collections::{BTreeMap, BTreeSet, HashMap};

use bepviet_shared::{
    mealplan::PlanType,
    recipe::{Recipe, Tag},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
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
pub enum Profile {
    Gym,
    Sick,
    Elder,
    Child,
}

impl Profile {
    /// Tag names a recipe may carry to suit the profile. One match is enough.
    pub fn tag_names(&self) -> &'static [&'static str] {
        match self {
            Profile::Gym => &["Nhiều protein", "Tăng cơ"],
            Profile::Sick => &["Dễ tiêu", "Thanh đạm"],
            Profile::Elder => &["Mềm", "Ít dầu mỡ"],
            Profile::Child => &["Cho trẻ em", "Ít cay"],
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NutritionGroup {
    Carb,
    Meat,
    Veggie,
}

impl NutritionGroup {
    /// Fill order of a balanced day: breakfast, lunch, dinner.
    pub const DAY_ORDER: [NutritionGroup; 3] = [
        NutritionGroup::Carb,
        NutritionGroup::Meat,
        NutritionGroup::Veggie,
    ];

    pub fn tag_names(&self) -> &'static [&'static str] {
        match self {
            NutritionGroup::Carb => &["Giàu tinh bột", "Ít tinh bột"],
            NutritionGroup::Meat => &["Bò", "Lợn", "Gà", "Hải sản", "Trứng", "Cá"],
            NutritionGroup::Veggie => &["Rau xanh", "Củ", "Trái cây"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Constraints {
    pub profile: Option<Profile>,
    pub balance: bool,
    pub no_repeat: bool,
    #[validate(length(max = 100))]
    pub max_cook_time: Option<String>,
    #[validate(length(max = 50))]
    pub exclude_tags: Vec<String>,
    #[validate(length(max = 50))]
    pub exclude_ingredients: Vec<String>,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub save: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            profile: None,
            balance: true,
            no_repeat: false,
            max_cook_time: None,
            exclude_tags: vec![],
            exclude_ingredients: vec![],
            plan_type: PlanType::Daily,
            save: false,
        }
    }
}

/// Constraints with every tag name turned into tag ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedConstraints {
    /// `None` without a profile. An empty set means the profile admits nothing.
    pub profile_tag_ids: Option<BTreeSet<String>>,
    pub exclude_tag_ids: BTreeSet<String>,
    /// Lowercased.
    pub exclude_ingredient_names: BTreeSet<String>,
    pub cook_time_tag_id: Option<String>,
    pub nutrition_groups: BTreeMap<NutritionGroup, BTreeSet<String>>,
}

static NO_TAGS: BTreeSet<String> = BTreeSet::new();

impl ResolvedConstraints {
    pub fn group_tag_ids(&self, group: NutritionGroup) -> &BTreeSet<String> {
        self.nutrition_groups.get(&group).unwrap_or(&NO_TAGS)
    }

    /// True when the recipe carries an excluded tag or an excluded ingredient.
    pub fn is_excluded(&self, recipe: &Recipe) -> bool {
        if recipe.has_any_tag(&self.exclude_tag_ids) {
            return true;
        }

        if self.exclude_ingredient_names.is_empty() {
            return false;
        }

        recipe.ingredients.iter().any(|ingredient| {
            self.exclude_ingredient_names
                .contains(&ingredient.name.to_lowercase())
        })
    }

    /// Every hard filter: profile, exclusions and cook time.
    pub fn admits(&self, recipe: &Recipe) -> bool {
        if let Some(profile_tag_ids) = &self.profile_tag_ids
            && !recipe.has_any_tag(profile_tag_ids)
        {
            return false;
        }

        if let Some(cook_time_tag_id) = &self.cook_time_tag_id
            && !recipe.has_tag(cook_time_tag_id)
        {
            return false;
        }

        !self.is_excluded(recipe)
    }
}

/// Case-insensitive tag name lookup. The first tag wins when names collide.
pub struct TagIndex<'a> {
    ids: HashMap<String, &'a str>,
}

impl<'a> TagIndex<'a> {
    pub fn new(tags: &'a [Tag]) -> Self {
        let mut ids = HashMap::with_capacity(tags.len());
        for tag in tags {
            ids.entry(tag.name.to_lowercase())
                .or_insert(tag.id.as_str());
        }

        Self { ids }
    }

    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        self.ids.get(&name.to_lowercase()).copied()
    }

    /// Ids of the names that resolve. Unknown names are skipped.
    pub fn resolve_all<I, S>(&self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.resolve(name.as_ref()))
            .map(str::to_owned)
            .collect()
    }
}

pub fn resolve(constraints: &Constraints, tags: &[Tag]) -> ResolvedConstraints {
    let index = TagIndex::new(tags);

    let nutrition_groups = NutritionGroup::VARIANTS
        .iter()
        .map(|group| (*group, index.resolve_all(group.tag_names())))
        .collect();

    let resolved = ResolvedConstraints {
        profile_tag_ids: constraints
            .profile
            .map(|profile| index.resolve_all(profile.tag_names())),
        exclude_tag_ids: index.resolve_all(&constraints.exclude_tags),
        exclude_ingredient_names: constraints
            .exclude_ingredients
            .iter()
            .map(|name| name.to_lowercase())
            .collect(),
        cook_time_tag_id: constraints
            .max_cook_time
            .as_deref()
            .and_then(|name| index.resolve(name))
            .map(str::to_owned),
        nutrition_groups,
    };

    tracing::debug!(
        profile_tags = ?resolved.profile_tag_ids,
        exclude_tags = resolved.exclude_tag_ids.len(),
        exclude_ingredients = resolved.exclude_ingredient_names.len(),
        cook_time = ?resolved.cook_time_tag_id,
        "constraints resolved"
    );

    resolved
}
