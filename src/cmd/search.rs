use crate::cmd::{build_trainer, TrainerKind};
use crate::reports;
use castleforge::config::Config;
use castleforge::optimizer::{Evolver, EvolverOptions};
use castleforge::CfResult;
use clap::Args;
use fastrand::Rng;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Fitness provider to train against.
    #[arg(short, long, value_enum, default_value_t = TrainerKind::Panel)]
    pub trainer: TrainerKind,

    /// Stop on stagnation (after the configured retries) instead of
    /// running a fixed number of generations.
    #[arg(long, default_value_t = false)]
    pub retry: bool,

    /// Emit the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SearchArgs, rng: &mut Rng) -> CfResult<()> {
    let cfg = &args.config;

    if !args.json {
        println!(
            "⚔️  Evolving {} strategies ({} units over {} fronts, {} trainer)",
            cfg.search.pool_size, cfg.game.population, cfg.game.fronts, args.trainer
        );
    }

    let trainer = build_trainer(args.trainer, cfg, rng)?;
    let evolver = Evolver::new(&trainer, EvolverOptions::from(cfg));

    let outcome = if args.retry {
        evolver.run_until_stagnant(cfg.search.retries, rng)?
    } else {
        evolver.run_generations(cfg.search.generations, rng)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("\n=== 🏆 FINAL RESULT ===");
    reports::print_strategy_grid("BEST", &outcome.best);
    reports::print_trajectory(&outcome.scores);
    if let Some(last) = outcome.scores.last() {
        println!("Best fitness after {} generations: {:.3}", outcome.scores.len(), last);
    }
    Ok(())
}
