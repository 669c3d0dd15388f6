use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Tag {
    Table,
    Id,
    Name,
    Category,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Title,
    Status,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeTag {
    Table,
    RecipeId,
    TagId,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    Position,
    Name,
    Quantity,
}

#[derive(Iden, Clone)]
pub enum Favorite {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    UserId,
    PlanType,
    Date,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlanMeal {
    Table,
    MealPlanId,
    Position,
    MealTime,
    RecipeId,
}
