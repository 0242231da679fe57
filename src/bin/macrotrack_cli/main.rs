// ABOUTME: Macrotrack CLI - calculate nutrition programs and track intake from the terminal
// ABOUTME: Handles program calculation, target persistence, macro adjustment, and daily progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calculate a program without saving it
//! macrotrack-cli program --sex male --age 30 --height 175 --weight 75 --activity moderately-active
//!
//! # Calculate and save the goal macros as daily targets
//! macrotrack-cli apply --sex female --age 41 --height 165 --weight 68 --goal moderate-deficit --meals 4
//!
//! # Run a saved questionnaire and save the result
//! macrotrack-cli questionnaire --answers answers.json --save
//!
//! # Show saved targets, split per meal
//! macrotrack-cli targets --per-meal
//!
//! # Move protein to 40% and rebalance fat and carbs
//! macrotrack-cli adjust --protein 30 --fat 30 --carbs 40 --macro protein --percent 40
//!
//! # Compare a day's food log with saved targets
//! macrotrack-cli progress --log 2025-03-14.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand, ValueEnum};
use macrotrack::config::environment::{AppConfig, LogLevel};
use macrotrack::config::intelligence::IntelligenceConfig;
use macrotrack::errors::{AppResult, ErrorResponse};
use macrotrack::logging::LoggingConfig;
use macrotrack::models::{
    ActivityLevel, DietType, Macro, MacroPercentages, NutritionalGoal, Occupation, ProfileInput,
    Sex,
};
use macrotrack::settings::FileSettingsStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::helpers::input::print_json;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "macrotrack-cli",
    about = "Nutrition program calculator and intake tracker",
    long_about = "Calculate daily calorie and macro targets from a short profile, save them, and compare logged food against them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file override (default: MACROTRACK_SETTINGS_PATH or the platform config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate a nutrition program and print it
    Program {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Calculate a nutrition program and save its goal macros as daily targets
    Apply {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Meals per day (1-8)
        #[arg(long)]
        meals: Option<u8>,
    },

    /// Validate questionnaire answers from a JSON file and calculate the program
    Questionnaire {
        /// Path to the answers JSON file
        #[arg(long)]
        answers: PathBuf,

        /// Save the goal macros as daily targets
        #[arg(long)]
        save: bool,
    },

    /// Show saved daily targets
    Targets {
        /// Also show targets divided across meals
        #[arg(long)]
        per_meal: bool,
    },

    /// Change one macro percentage and rebalance the other two
    Adjust {
        /// Current protein percent
        #[arg(long)]
        protein: i32,

        /// Current fat percent
        #[arg(long)]
        fat: i32,

        /// Current carbohydrate percent
        #[arg(long)]
        carbs: i32,

        /// Macro being changed
        #[arg(long = "macro", value_enum)]
        changed: MacroArg,

        /// New percent for the changed macro (clamped to 0-100)
        #[arg(long)]
        percent: i32,
    },

    /// Compare a daily food log with saved targets
    Progress {
        /// Path to the daily log JSON file
        #[arg(long)]
        log: PathBuf,
    },
}

/// Profile flags shared by `program` and `apply`
#[derive(Args)]
struct ProfileArgs {
    /// Biological sex (male, female)
    #[arg(long)]
    sex: Sex,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Current weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Training activity (sedentary, lightly-active, moderately-active, very-active, extra-active)
    #[arg(long)]
    activity: Option<ActivityLevel>,

    /// Job activity (sedentary-job, standing-job, physical-job)
    #[arg(long)]
    occupation: Option<Occupation>,

    /// Diet style (balanced, high-protein, low-carb, keto, mediterranean, vegetarian, vegan)
    #[arg(long)]
    diet: Option<DietType>,

    /// Program type (clean-bulk, lean-bulk, recomposition, maintenance, mild-deficit, moderate-deficit, aggressive-deficit)
    #[arg(long)]
    goal: Option<NutritionalGoal>,
}

impl ProfileArgs {
    fn into_profile(self) -> ProfileInput {
        let mut profile = ProfileInput::new(self.sex, self.age, self.height, self.weight);
        profile.activity_level = self.activity;
        profile.occupation = self.occupation;
        profile.diet_type = self.diet;
        profile.nutritional_goal = self.goal;
        profile
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MacroArg {
    Protein,
    Fat,
    Carbs,
}

impl From<MacroArg> for Macro {
    fn from(arg: MacroArg) -> Self {
        match arg {
            MacroArg::Protein => Self::Protein,
            MacroArg::Fat => Self::Fat,
            MacroArg::Carbs => Self::Carbs,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let exit_code = if error.code.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            };
            if json {
                if let Err(print_error) = print_json(&ErrorResponse::from(error)) {
                    eprintln!("Error: {print_error}");
                }
            } else {
                eprintln!("Error: {error}");
            }
            exit_code
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?;

    let mut logging = LoggingConfig::from_env(config.log_level);
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    let settings_path = cli.settings.unwrap_or(config.settings_path);
    debug!(path = %settings_path.display(), "Using settings file");

    let store = FileSettingsStore::new(settings_path);
    let nutrition = &IntelligenceConfig::global().nutrition;

    match cli.command {
        Command::Program { profile } => {
            commands::program::show(&profile.into_profile(), nutrition, cli.json)?;
        }
        Command::Apply { profile, meals } => {
            commands::program::apply(
                &store,
                &profile.into_profile(),
                nutrition,
                meals.unwrap_or(config.default_meals_per_day),
                cli.json,
            )
            .await?;
        }
        Command::Questionnaire { answers, save } => {
            commands::program::questionnaire(&store, &answers, nutrition, save, cli.json).await?;
        }
        Command::Targets { per_meal } => {
            commands::targets::show(&store, per_meal, cli.json).await?;
        }
        Command::Adjust {
            protein,
            fat,
            carbs,
            changed,
            percent,
        } => {
            commands::targets::adjust(
                MacroPercentages::new(protein, fat, carbs),
                changed.into(),
                percent,
                cli.json,
            )?;
        }
        Command::Progress { log } => {
            commands::progress::show(&store, &log, cli.json).await?;
        }
    }

    Ok(())
}
