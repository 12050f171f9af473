use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use aureo::output::{self, ScoreReport};
use aureo::scoring::{self, Gender, MeasurementSnapshot, WeightProgress};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 2;
const EXIT_INVALID_INPUT: i32 = 3;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the latest weight and measurements from the config file (default if no subcommand)
    Score {
        /// Override the gender stored in the profile
        #[arg(short, long)]
        gender: Option<Gender>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Score measurements given on the command line
    Calc(CalcArgs),
    /// Show every rank tier with its threshold and color
    Ranks {
        #[arg(short, long, default_value = "male")]
        gender: Gender,
    },
}

#[derive(Args, Debug)]
struct CalcArgs {
    #[arg(short, long)]
    gender: Gender,
    /// Age in years
    #[arg(long)]
    age: f64,
    /// Height in cm
    #[arg(long)]
    height: f64,
    /// Weight in kg
    #[arg(long)]
    weight: f64,
    /// Circumferences in cm
    #[arg(long)]
    waist: f64,
    #[arg(long)]
    shoulders: f64,
    #[arg(long)]
    chest: f64,
    #[arg(long)]
    biceps: f64,
    #[arg(long)]
    thigh: f64,
    #[arg(long)]
    calf: f64,
    #[arg(long)]
    hip: Option<f64>,

    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl CalcArgs {
    fn snapshot(&self) -> MeasurementSnapshot {
        MeasurementSnapshot {
            gender: self.gender,
            age_years: self.age,
            height_cm: self.height,
            weight_kg: self.weight,
            waist_cm: self.waist,
            shoulder_cm: self.shoulders,
            chest_cm: self.chest,
            biceps_cm: self.biceps,
            thigh_cm: self.thigh,
            calf_cm: self.calf,
            hip_cm: self.hip,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "aureo")]
#[command(about = "Body-composition score (Aureo Index) with rank tiers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/aureo/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    aureo::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Score {
        gender: None,
        format: OutputFormat::Text,
    });

    match command {
        Commands::Score { gender, format } => {
            let config_path = cli.config.map(PathBuf::from);
            let config = match aureo::config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let Some(gender) = gender.or(config.profile.gender) else {
                eprintln!("No gender given. Pass --gender or set profile.gender in the config file.");
                std::process::exit(EXIT_CONFIG);
            };

            let today = chrono::Local::now().date_naive();
            let snapshot = match scoring::assemble_snapshot(
                &config.profile,
                &config.weights,
                &config.measurements,
                gender,
                today,
            ) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Cannot build measurement snapshot: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let progress = scoring::weight_progress(&config.profile, &config.weights);
            print_score(&snapshot, progress, format);
        }
        Commands::Calc(args) => {
            print_score(&args.snapshot(), None, args.format);
        }
        Commands::Ranks { gender } => {
            println!(
                "{}",
                output::format_rank_table(gender, output::should_use_colors())
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_score(
    snapshot: &MeasurementSnapshot,
    progress: Option<WeightProgress>,
    format: OutputFormat,
) {
    let result = match scoring::calculate_score(snapshot) {
        Ok(r) => r,
        Err(scoring::MeasurementError::Invalid(errors)) => {
            eprintln!("Measurement errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_INVALID_INPUT);
        }
    };

    let report = ScoreReport::new(snapshot, result).with_weight_progress(progress);
    match format {
        OutputFormat::Text => {
            println!(
                "{}",
                output::format_report(&report, output::should_use_colors())
            );
        }
        OutputFormat::Json => match output::format_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
    }
}
