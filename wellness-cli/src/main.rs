use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod food_cmd;
mod logging;
mod plan_cmd;
mod profile_cmd;
mod report;
mod state;
mod track_cmd;

use food_cmd::FoodCommand;
use plan_cmd::WorkoutArgs;
use profile_cmd::ProfileArgs;
use state::Session;
use track_cmd::{CheckinArgs, WaterCommand};

#[derive(Parser, Debug)]
#[command(
    name = "wellness",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WELLNESS_BUILD_SHA"), ")"),
    about = "Workout and diet plans, daily check-ins, water and food tracking"
)]
struct Cli {
    /// Act as this user (default: [user] username from config.toml)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Data directory (default: ~/.wellness)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print plans and summaries as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging when RUST_LOG is unset
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create, replace or show the user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Weekly workout plan; flags update the saved preference
    Workout(WorkoutArgs),

    /// Daily meal plan for the saved profile
    Diet,

    /// Food catalog, portion calculator and food log
    Food {
        #[command(subcommand)]
        command: FoodCommand,
    },

    /// Daily water goal and intake
    Water {
        #[command(subcommand)]
        command: WaterCommand,
    },

    /// Record today's habits (unset flags count as missed)
    Checkin(CheckinArgs),

    /// Today's compliance score
    Score,

    /// Compliance trend across all check-ins
    Trend,

    /// Manage config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Compute baseline calories and save the profile
    Set(ProfileArgs),
    Show,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let session = Session::open(cli.data_dir, cli.user)?;
    let json = cli.json;

    match cli.command {
        Command::Profile { command } => match command {
            ProfileCommand::Set(args) => profile_cmd::set(&session, args)?,
            ProfileCommand::Show => profile_cmd::show(&session)?,
        },
        Command::Workout(args) => plan_cmd::workout(&session, args, json)?,
        Command::Diet => plan_cmd::diet(&session, json)?,
        Command::Food { command } => food_cmd::run(&session, command, json)?,
        Command::Water { command } => track_cmd::water(&session, command)?,
        Command::Checkin(args) => track_cmd::checkin(&session, args)?,
        Command::Score => track_cmd::score(&session)?,
        Command::Trend => track_cmd::trend(&session, json)?,
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(&session.data_dir)?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path(&session.data_dir).display());
                print!("{}", toml::to_string_pretty(&session.config)?);
            }
        },
    }

    Ok(())
}
