use crate::cmd::{build_trainer, TrainerKind};
use crate::reports;
use castleforge::config::Config;
use castleforge::optimizer::descent;
use castleforge::CfResult;
use clap::Args;
use fastrand::Rng;

#[derive(Args, Debug, Clone)]
pub struct DescentArgs {
    #[command(flatten)]
    pub config: Config,

    /// Fitness provider to climb against.
    #[arg(short, long, value_enum, default_value_t = TrainerKind::Minimizer)]
    pub trainer: TrainerKind,

    /// Independent climbs; the best local optimum wins.
    #[arg(short, long, default_value_t = 1)]
    pub attempts: usize,

    /// Emit the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: DescentArgs, rng: &mut Rng) -> CfResult<()> {
    let cfg = &args.config;
    let trainer = build_trainer(args.trainer, cfg, rng)?;

    let outcome = descent::descend_best_of(
        &trainer,
        args.attempts,
        cfg.game.population,
        cfg.game.fronts,
        rng,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("=== 🏆 FINAL RESULT ===");
    reports::print_strategy_grid("LOCAL OPTIMUM", &outcome.best);
    reports::print_trajectory(&outcome.scores);
    Ok(())
}
