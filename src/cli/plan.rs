use anyhow::Result;
use bepviet_mealplan::{Constraints, Planner, Profile, RandomPicker, RecommendInput, sqlite};
use bepviet_shared::mealplan::{MealPlan, PlanType};

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// User the plans are built for
    #[arg(long)]
    pub user: String,

    /// Number of days to plan (defaults to planner.default_days)
    #[arg(long)]
    pub days: Option<u16>,

    /// gym, sick, elder or child
    #[arg(long)]
    pub profile: Option<Profile>,

    /// Tag name to avoid, repeatable
    #[arg(long = "exclude-tag")]
    pub exclude_tags: Vec<String>,

    /// Ingredient name to avoid, repeatable
    #[arg(long = "exclude-ingredient")]
    pub exclude_ingredients: Vec<String>,

    /// Cooking time tag name recipes must carry
    #[arg(long)]
    pub max_cook_time: Option<String>,

    /// Draw freely instead of one carb, meat and veggie dish per day
    #[arg(long)]
    pub no_balance: bool,

    #[arg(long)]
    pub no_repeat: bool,

    #[arg(long = "type", default_value = "daily")]
    pub plan_type: PlanType,

    /// Persist the plans
    #[arg(long)]
    pub save: bool,

    /// First day, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub start: Option<String>,

    /// Seed for reproducible plans
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlanArgs {
    fn input(self, default_days: u16) -> RecommendInput {
        RecommendInput {
            user_id: self.user,
            days: self.days.unwrap_or(default_days),
            constraints: Constraints {
                profile: self.profile,
                balance: !self.no_balance,
                no_repeat: self.no_repeat,
                max_cook_time: self.max_cook_time,
                exclude_tags: self.exclude_tags,
                exclude_ingredients: self.exclude_ingredients,
                plan_type: self.plan_type,
                save: self.save,
            },
        }
    }
}

pub async fn plan(config: &crate::config::Config, args: PlanArgs) -> Result<Vec<MealPlan>> {
    let start = match &args.start {
        Some(value) => bepviet_shared::parse_date(value)?,
        None => bepviet_shared::today(),
    };

    let mut picker = match args.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let planner = Planner::new(
        sqlite::SqliteCatalog(pool.clone()),
        sqlite::SqliteMealPlanStore(pool.clone()),
    );

    let plans = planner
        .recommend(args.input(config.planner.default_days), start, &mut picker)
        .await;
    pool.close().await;

    Ok(plans?)
}
