use clap::{Parser, Subcommand};

/// DietPlanner: derives daily macro targets from body metrics and
/// assembles a per-meal food plan from a catalog.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, default_value = "food1.csv")]
    pub catalog: String,

    /// Directory holding model coefficient JSON files (the built-in
    /// fitted models are used when omitted).
    #[arg(long)]
    pub models_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute metrics, daily targets and a meal plan for one profile.
    Plan {
        /// Body weight in kilograms.
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Height in centimeters.
        #[arg(long)]
        height_cm: Option<f64>,

        /// Age in years.
        #[arg(long)]
        age: Option<f64>,

        /// 'male' or 'female'.
        #[arg(long)]
        gender: Option<String>,

        /// One of: sedentary, lightly active, moderately active,
        /// very active, extra active.
        #[arg(long)]
        activity_level: Option<String>,
    },

    /// Run the HTTP API.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "0.0.0.0:5000")]
        bind: String,
    },

    /// List catalog foods, optionally for one meal slot.
    Foods {
        /// Breakfast, Lunch, Dinner or Snacks.
        #[arg(long)]
        slot: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            weight_kg: None,
            height_cm: None,
            age: None,
            gender: None,
            activity_level: None,
        }
    }
}
