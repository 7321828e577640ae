use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use fitness_tracker::session::{self, Session};
use fitness_tracker::{ProfileForm, TrackerConfig, UserProfile, WorkoutForm};

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Record workouts and keep them in a plain text file")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Workout file (defaults to $FITNESS_TRACKER_DATA or workouts.txt)
    #[arg(long, short = 'f', global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Add a workout to the workout file
    Add {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Workout date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Exercise type, e.g. "Running"
        #[arg(long)]
        exercise: String,

        /// Duration in minutes
        #[arg(long)]
        duration: String,

        /// Calories burned
        #[arg(long)]
        calories: String,
    },

    /// Print every workout in the workout file
    List,

    /// Write the workout file as a JSON document
    ExportJson {
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Append the workouts of a JSON document to the workout file
    ImportJson {
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
    },

    /// Start an interactive session
    Shell,
}

#[derive(Args)]
struct ProfileArgs {
    /// Your name
    #[arg(long)]
    name: String,

    /// Your age in years
    #[arg(long)]
    age: String,

    /// Your weight
    #[arg(long)]
    weight: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TrackerConfig::from_env()
        .with_data_file(cli.file)
        .with_verbose(cli.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(io::stderr)
        .init();
    debug!(data_file = %config.data_file.display(), "configuration loaded");

    match cli.command {
        Command::Add {
            profile,
            date,
            exercise,
            duration,
            calories,
        } => {
            let profile = ProfileForm {
                name: profile.name,
                age: profile.age,
                weight: profile.weight,
            };
            let workout = WorkoutForm {
                date: date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string()),
                exercise_type: exercise,
                duration,
                calories_burned: calories,
            };

            let user = session::append_to_file(&config.data_file, &profile, &workout)
                .with_context(|| format!("adding to {}", config.data_file.display()))?;
            if let Some(added) = user.workouts().last() {
                println!("{added}");
            }
            info!(user = %user.name, total = user.len(), "workout added");
        }
        Command::List => {
            let mut user = file_profile();
            session::load_existing(&mut user, &config.data_file)?;
            println!("{}", user.list_workouts());
        }
        Command::ExportJson { output } => {
            let mut user = file_profile();
            session::load_existing(&mut user, &config.data_file)?;
            user.export_json(&output)?;
            println!("Exported {} workouts to {}", user.len(), output.display());
        }
        Command::ImportJson { input } => {
            let mut user = file_profile();
            session::load_existing(&mut user, &config.data_file)?;
            let before = user.len();
            user.import_json(&input)?;
            session::save_profile(&user, &config.data_file)?;
            println!(
                "Imported {} workouts into {}",
                user.len() - before,
                config.data_file.display()
            );
        }
        Command::Shell => {
            println!("Fitness Tracker. Type 'help' for a list of commands.");
            let stdin = io::stdin();
            let mut shell = Session::new(io::stdout(), &config.data_file).with_prompt("> ");
            shell.run(stdin.lock())?;
        }
    }

    Ok(())
}

/// Profile used by one-shot commands that only touch the file; identity is
/// never stored with the workouts.
fn file_profile() -> UserProfile {
    UserProfile::new("", 0, 0.0)
}
