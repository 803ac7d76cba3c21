use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use diet_planner_rs::catalog::FoodCatalog;
use diet_planner_rs::cli::{Cli, Command};
use diet_planner_rs::error::{PlannerError, Result};
use diet_planner_rs::interface::{complete_profile, display_food_list, display_plan};
use diet_planner_rs::metabolism::suggest_activity_level;
use diet_planner_rs::models::MealSlot;
use diet_planner_rs::planner::plan_meals;
use diet_planner_rs::predictor::TargetModelSet;
use diet_planner_rs::server::{self, AppState};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        if let PlannerError::InvalidActivityLevel(input) = &e {
            if let Some(suggestion) = suggest_activity_level(input) {
                eprintln!("Did you mean '{}'?", suggestion);
            }
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
        } => cmd_plan(
            &cli.catalog,
            cli.models_dir.as_deref(),
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
        ),
        Command::Serve { bind } => cmd_serve(&cli.catalog, cli.models_dir.as_deref(), &bind).await,
        Command::Foods { slot } => cmd_foods(&cli.catalog, slot.as_deref()),
    }
}

fn load_models(models_dir: Option<&str>) -> Result<TargetModelSet> {
    match models_dir {
        Some(dir) => TargetModelSet::load_dir(dir),
        None => Ok(TargetModelSet::fitted()),
    }
}

/// Compute metrics, daily targets and a plan for one profile.
fn cmd_plan(
    catalog_path: &str,
    models_dir: Option<&str>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<f64>,
    gender: Option<String>,
    activity_level: Option<String>,
) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", catalog_path);
        eprintln!("Pass --catalog or place food1.csv in the current directory.");
        return Ok(());
    }

    let catalog = FoodCatalog::from_csv_path(path)?;
    println!("Loaded {} foods", catalog.len());
    println!();

    let models = load_models(models_dir)?;
    let profile = complete_profile(weight_kg, height_cm, age, gender, activity_level)?;

    println!();
    println!(
        "Planning for {:.0} kg / {:.0} cm / age {:.0}, {}, {}",
        profile.weight_kg, profile.height_cm, profile.age, profile.gender, profile.activity
    );

    let metrics = profile.metrics();
    let daily = models.daily_targets(&profile, &metrics);
    let reports = plan_meals(&catalog, &daily);

    display_plan(&metrics, &daily, &reports);

    Ok(())
}

/// Serve the JSON API.
async fn cmd_serve(catalog_path: &str, models_dir: Option<&str>, bind: &str) -> Result<()> {
    let catalog = FoodCatalog::from_csv_path(catalog_path)?;
    let models = load_models(models_dir)?;
    let state = AppState::new(catalog, models);

    server::run(bind, state).await
}

/// List catalog foods.
fn cmd_foods(catalog_path: &str, slot: Option<&str>) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", catalog_path);
        return Ok(());
    }

    let catalog = FoodCatalog::from_csv_path(path)?;

    match slot {
        Some(raw) => {
            let slot: MealSlot = raw.parse()?;
            display_food_list(&catalog.slot_candidates(slot), slot.label());
        }
        None => {
            let all: Vec<&_> = catalog.foods().iter().collect();
            display_food_list(&all, "All foods");
        }
    }

    Ok(())
}
