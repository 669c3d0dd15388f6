mod favorite;
mod meal_plan;
mod meal_plan_meal;
mod recipe;
mod recipe_ingredient;
mod recipe_tag;
mod tag;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "bepviet",
    "m0001",
    vec_box![],
    vec_box![
        tag::CreateTable,
        tag::CreateNameIdx,
        recipe::CreateTable,
        recipe::CreateStatusIdx,
        recipe_tag::CreateTable,
        recipe_tag::CreateTagIdx,
        recipe_ingredient::CreateTable,
        favorite::CreateTable,
        meal_plan::CreateTable,
        meal_plan::CreateUserIdx,
        meal_plan_meal::CreateTable,
    ]
);
