// ===== castleforge/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for the run's single pseudorandom source. Fixing it makes
    /// the whole run reproducible.
    #[arg(global = true, short = 'S', long)]
    seed: Option<u64>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve strategies with the genetic search.
    Search(cmd::search::SearchArgs),
    /// Hill-climb a single strategy to a local optimum.
    Descent(cmd::descent::DescentArgs),
    /// Rate one explicit strategy: exact count, rarity, panel score.
    Rate(cmd::rate::RateArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let mut rng = match cli.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let outcome = match cli.command {
        Commands::Search(args) => cmd::search::run(args, &mut rng),
        Commands::Descent(args) => cmd::descent::run(args, &mut rng),
        Commands::Rate(args) => cmd::rate::run(args, &mut rng),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
