use crate::reports;
use castleforge::battle::score_against_panel;
use castleforge::config::Config;
use castleforge::counting::count_equal_or_better;
use castleforge::strategy::{self, Strategy};
use castleforge::{CastleForgeError, CfResult};
use clap::Args;
use fastrand::Rng;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Units per front, comma separated, e.g. "25,0,10,5,0,10,10,0,20,20".
    #[arg(short, long)]
    pub strategy: String,

    /// Emit the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RateReport {
    strategy: Strategy,
    equal_or_better: u64,
    rarity: f64,
    panel_score: u32,
    panel_size: usize,
}

fn parse_strategy(input: &str) -> CfResult<Strategy> {
    let units = input
        .split(',')
        .map(|part| {
            part.trim().parse::<u32>().map_err(|_| {
                CastleForgeError::Validation(format!("'{}' is not a non-negative integer", part))
            })
        })
        .collect::<CfResult<Vec<u32>>>()?;

    if units.is_empty() {
        return Err(CastleForgeError::Validation(
            "a strategy needs at least one front".to_string(),
        ));
    }
    let population = units.iter().sum();
    Strategy::from_units(units, population)
}

pub fn run(args: RateArgs, rng: &mut Rng) -> CfResult<()> {
    let strategy = parse_strategy(&args.strategy)?;
    let population = strategy.population();
    let fronts = strategy.len();

    let equal_or_better = count_equal_or_better(&strategy);
    let baseline = count_equal_or_better(&strategy::worst_strategy(population, fronts)?);
    let rarity = baseline as f64 / equal_or_better as f64;

    let panel_size = args.config.panel.panel_size;
    let panel = strategy::random_pool(panel_size, population, fronts, rng)?;
    let panel_score = score_against_panel(&panel, &strategy)?;

    let report = RateReport {
        strategy,
        equal_or_better,
        rarity,
        panel_score,
        panel_size,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_strategy_grid("RATED", &report.strategy);
    reports::print_rate_report(
        report.equal_or_better,
        report.rarity,
        report.panel_score,
        report.panel_size,
    );
    Ok(())
}
