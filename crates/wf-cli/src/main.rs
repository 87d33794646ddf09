//! CLI frontend for the Wayfarer text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use wf_engine::GameConfig;

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer — a small text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game on stdin/stdout
    Play {
        /// World blueprint (JSON); defaults to the built-in world
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Prompt printed before each line of input
        #[arg(long, default_value = "> ")]
        prompt: String,

        /// Do not list the available commands every turn
        #[arg(long)]
        quiet_commands: bool,

        /// Also remove traded-away items from the inventory
        #[arg(long)]
        honor_inventory_removals: bool,
    },

    /// Validate a world blueprint
    Check {
        /// World blueprint (JSON); defaults to the built-in world
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List the sections of a world
    List {
        /// World blueprint (JSON); defaults to the built-in world
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Show one section in detail
    Show {
        /// Section name
        name: String,

        /// World blueprint (JSON); defaults to the built-in world
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            world,
            prompt,
            quiet_commands,
            honor_inventory_removals,
        } => {
            let config = GameConfig::new()
                .with_prompt(prompt)
                .with_show_commands(!quiet_commands)
                .with_honor_inventory_removals(honor_inventory_removals);
            commands::play::run(world.as_deref(), config)
        }
        Commands::Check { world } => commands::check::run(world.as_deref()),
        Commands::List { world } => commands::list::run(world.as_deref()),
        Commands::Show { name, world } => commands::show::run(world.as_deref(), &name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
