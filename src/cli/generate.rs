use anyhow::Result;
use clap::Args;
use viralcarrot_recipe::GenerateInput;
use viralcarrot_shared::recipe::Filters;

/// One-off generation from the command line
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Main food, e.g. "chicken"
    pub main_food: String,

    /// Supporting ingredient (repeatable)
    #[arg(long = "ingredient", short = 'i')]
    pub ingredients: Vec<String>,

    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub meal_type: Option<String>,

    /// 15, 30 or 60 minutes
    #[arg(long)]
    pub cooking_time: Option<String>,

    #[arg(long)]
    pub dietary_style: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl From<GenerateArgs> for GenerateInput {
    fn from(args: GenerateArgs) -> Self {
        GenerateInput {
            main_food: args.main_food,
            ingredients: args.ingredients,
            filters: Filters {
                cooking_time: args.cooking_time,
                cuisine: args.cuisine,
                meal_type: args.meal_type,
                dietary_style: args.dietary_style,
            },
            page: args.page,
        }
    }
}

/// Runs the generate flow once and prints the ranked page as JSON.
pub async fn generate(config: crate::config::Config, args: GenerateArgs) -> Result<()> {
    let discovery = crate::build_discovery(&config)?;
    let page = discovery.generate(args.into()).await?;

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
