use std::{path::PathBuf, str::FromStr};

use bepviet_mealplan::InMemoryCatalog;
use bepviet_shared::{
    State,
    recipe::{Favorite, Ingredient, Recipe, RecipeStatus, Tag, TagCategory},
};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    bepviet_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State {
        read_db: pool.clone(),
        write_db: pool,
    })
}

#[allow(dead_code)]
pub async fn setup_seeded_state(path: PathBuf, catalog: &InMemoryCatalog) -> anyhow::Result<State> {
    let state = setup_test_state(path).await?;
    bepviet_mealplan::sqlite::import(&state.write_db, catalog).await?;

    Ok(state)
}

#[allow(dead_code)]
pub fn tag(id: &str, name: &str, category: TagCategory) -> Tag {
    Tag {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
    }
}

#[allow(dead_code)]
pub fn recipe(id: &str, tags: &[&str], ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: format!("Món {id}"),
        tag_ids: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: ingredients
            .iter()
            .map(|name| Ingredient {
                name: name.to_string(),
                quantity: "100g".to_owned(),
            })
            .collect(),
        status: RecipeStatus::Published,
    }
}

#[allow(dead_code)]
pub fn favorite(user_id: &str, recipe: &Recipe) -> Favorite {
    Favorite {
        user_id: user_id.to_owned(),
        recipe_id: recipe.id.to_owned(),
        tag_ids: recipe.tag_ids.clone(),
    }
}

/// Nutrition, profile and misc tags with their real names.
#[allow(dead_code)]
pub fn tags() -> Vec<Tag> {
    vec![
        tag("tag-rice", "Giàu tinh bột", TagCategory::Nutrition),
        tag("tag-lowcarb", "Ít tinh bột", TagCategory::Nutrition),
        tag("tag-beef", "Bò", TagCategory::Ingredient),
        tag("tag-pork", "Lợn", TagCategory::Ingredient),
        tag("tag-fish", "Cá", TagCategory::Ingredient),
        tag("tag-greens", "Rau xanh", TagCategory::Ingredient),
        tag("tag-fruit", "Trái cây", TagCategory::Ingredient),
        tag("tag-protein", "Nhiều protein", TagCategory::Nutrition),
        tag("tag-spicy", "Cay", TagCategory::CookingStyle),
        tag("tag-north", "Miền Bắc", TagCategory::Region),
        tag("tag-quick", "Dưới 30 phút", TagCategory::CookingTime),
    ]
}

/// One recipe per nutrition group, plus nothing else.
#[allow(dead_code)]
pub fn three_groups() -> InMemoryCatalog {
    InMemoryCatalog {
        tags: tags(),
        recipes: vec![
            recipe("canh-rau", &["tag-greens"], &["Rau muống"]),
            recipe("bo-luc-lac", &["tag-beef"], &["Thịt bò", "Hành tây"]),
            recipe("com-chien", &["tag-rice"], &["Cơm", "Trứng"]),
        ],
        favorites: vec![],
    }
}

/// A few recipes per group with mixed extra tags.
#[allow(dead_code)]
pub fn kitchen() -> InMemoryCatalog {
    let recipes = vec![
        recipe("pho-bo", &["tag-beef", "tag-north"], &["Bánh phở", "Thịt bò"]),
        recipe("bun-cha", &["tag-pork", "tag-north"], &["Bún", "Thịt lợn"]),
        recipe("ca-kho", &["tag-fish", "tag-protein"], &["Cá basa", "Nước mắm"]),
        recipe("bo-xao-ot", &["tag-beef", "tag-spicy", "tag-quick"], &["Thịt bò", "Ớt"]),
        recipe("com-tam", &["tag-rice", "tag-pork"], &["Cơm tấm", "Sườn"]),
        recipe("xoi-xeo", &["tag-rice", "tag-north"], &["Gạo nếp", "Đậu xanh"]),
        recipe("banh-mi", &["tag-rice", "tag-quick"], &["Bánh mì", "Pate"]),
        recipe("goi-cuon", &["tag-lowcarb", "tag-greens"], &["Bánh tráng", "Tôm"]),
        recipe("rau-muong-xao", &["tag-greens", "tag-quick"], &["Rau muống", "Tỏi"]),
        recipe("canh-chua", &["tag-greens", "tag-fish", "tag-spicy"], &["Cá", "Me"]),
        recipe("sinh-to-bo", &["tag-fruit"], &["Bơ", "Sữa đặc"]),
        recipe("che-chuoi", &["tag-fruit", "tag-quick"], &["Chuối", "Nước cốt dừa"]),
    ];

    let favorites = vec![
        favorite("john", &recipes[0]),
        favorite("john", &recipes[5]),
        favorite("albert", &recipes[3]),
    ];

    InMemoryCatalog {
        tags: tags(),
        recipes,
        favorites,
    }
}
