/// Main entry point for the daytrack CLI
///
/// Sets up logging, parses command line arguments, opens the key-value store
/// and dispatches one tracker operation per invocation. The CLI is the thin
/// collaborator the core was designed for: it passes simple values in and
/// prints whatever the core returns.

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use daytrack::{Category, TrackerConfig, TrackerCore, TrackerEvent};

/// Get the default database path with a fallback strategy
fn default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let candidates = [
        dirs::home_dir().map(|mut p| {
            p.push(".daytrack");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("daytrack");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".daytrack");
            p
        }),
    ];

    for dir in candidates.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            let mut db_path = dir.clone();
            db_path.push("tracker.db");
            return Ok(db_path);
        }
    }

    let mut temp_path = std::env::temp_dir();
    temp_path.push("daytrack");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("tracker.db");
    tracing::warn!("using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the daytrack CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tracker database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a measurement (water in ml, calories in kcal, weight in kg)
    Record {
        category: Category,
        amount: f64,
        /// Optional label, e.g. the food item for a calorie entry
        #[arg(long)]
        label: Option<String>,
    },
    /// Show today's total for a category
    Today { category: Category },
    /// Show archived daily totals for a category
    History { category: Category },
    /// Show unlocked and locked achievements
    Achievements,
    /// Show or update profile weight/height and the derived BMI
    Profile {
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    /// Archive the current day and start from zero
    ResetDay { category: Category },
    /// Zero a category's lifetime achievement counter
    ResetProgress { category: Category },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(format!("daytrack={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };
    info!("using database at: {}", db_path.display());

    let mut core = TrackerCore::open(db_path, TrackerConfig::default())?;
    core.subscribe(|event| {
        if let TrackerEvent::AchievementUnlocked { title, .. } = event {
            println!("Achievement unlocked: {}", title);
        }
    });

    let now = Local::now().naive_local();

    match args.command {
        Command::Record {
            category,
            amount,
            label,
        } => {
            let snap = core.record_sample(category, amount, label, now)?;
            print_snapshot(&snap);
        }
        Command::Today { category } => {
            let snap = core.today(category, now)?;
            print_snapshot(&snap);
        }
        Command::History { category } => {
            let entries = core.history(category);
            if entries.is_empty() {
                println!("No {} history yet", category.display_name().to_lowercase());
            }
            for entry in entries {
                println!("{}  {:.1} {}", entry.date, entry.total, category.unit());
            }
        }
        Command::Achievements => {
            println!("Unlocked:");
            for (def, date) in core.achievements().unlocked() {
                match date {
                    Some(d) => println!("  {} ({})", def.title, d.format("%d.%m.%Y")),
                    None => println!("  {}", def.title),
                }
            }
            println!("Locked:");
            for def in core.achievements().locked() {
                println!(
                    "  {} — {:.0}/{:.0}",
                    def.title,
                    core.achievements().progress(def.category),
                    def.target_value
                );
            }
        }
        Command::Profile { weight, height } => {
            if let (Some(w), Some(h)) = (weight, height) {
                core.set_profile(w, h)?;
            }
            let report = core.bmi_report()?;
            println!(
                "{:.1} kg, {:.1} cm — BMI {:.1} ({})",
                report.weight_kg,
                report.height_cm,
                report.bmi,
                report.class.label()
            );
        }
        Command::ResetDay { category } => {
            core.reset_day(category, now)?;
            println!("{} day reset", category.display_name());
        }
        Command::ResetProgress { category } => {
            core.reset_progress(category)?;
            println!("{} progress counter reset", category.display_name());
        }
    }

    core.flush()?;
    Ok(())
}

fn print_snapshot(snap: &daytrack::DailySnapshot) {
    let unit = snap.category.unit();
    println!(
        "{} {}: {:.1} {}",
        snap.record.date,
        snap.category.display_name(),
        snap.record.total,
        unit
    );
    if let (Some(goal), Some(remaining)) = (snap.goal, snap.remaining) {
        println!("Goal: {:.0} {}  Remaining: {:.0} {}", goal, unit, remaining, unit);
    }
}
