use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

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
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
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
pub enum PlanType {
    #[default]
    Daily,
    Weekly,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_time: MealTime,
    pub recipe_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    #[serde(rename = "type", default)]
    pub plan_type: PlanType,
    #[serde(with = "crate::serde_date")]
    pub date: Date,
    pub meals: Vec<Meal>,
}

impl MealPlan {
    /// Builds the three meals of a day from picks given in breakfast, lunch, dinner order.
    pub fn new(
        user_id: impl Into<String>,
        plan_type: PlanType,
        date: Date,
        picks: [Option<String>; 3],
    ) -> Self {
        let meals = MealTime::VARIANTS
            .iter()
            .zip(picks)
            .map(|(meal_time, recipe_id)| Meal {
                meal_time: *meal_time,
                recipe_id,
            })
            .collect();

        Self {
            id: None,
            user_id: user_id.into(),
            plan_type,
            date,
            meals,
        }
    }

    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.meals.iter().filter_map(|m| m.recipe_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_keeps_meal_order() {
        let plan = MealPlan::new(
            "john",
            PlanType::Daily,
            date!(2025 - 01 - 20),
            [Some("a".to_owned()), None, Some("c".to_owned())],
        );

        let times = plan.meals.iter().map(|m| m.meal_time).collect::<Vec<_>>();
        assert_eq!(times, [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner]);
        assert_eq!(plan.recipe_ids().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn test_json_shape() {
        let plan = MealPlan::new(
            "john",
            PlanType::Weekly,
            date!(2025 - 01 - 20),
            [Some("a".to_owned()), None, None],
        );

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["type"], "weekly");
        assert_eq!(value["date"], "2025-01-20");
        assert_eq!(value["meals"][0]["meal_time"], "breakfast");
        assert_eq!(value["meals"][1]["recipe_id"], serde_json::Value::Null);
        assert!(value.get("id").is_none());

        let back: MealPlan = serde_json::from_value(value).unwrap();
        assert_eq!(back, plan);
    }
}
