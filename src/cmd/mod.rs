pub mod descent;
pub mod rate;
pub mod search;

use castleforge::config::Config;
use castleforge::trainer::Trainer;
use castleforge::CfResult;
use clap::ValueEnum;
use fastrand::Rng;
use strum_macros::Display;

/// Fitness provider selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TrainerKind {
    /// Static panel of random opponents.
    Panel,
    /// Panel of opponents hardened by hill climbing.
    Crazy,
    /// Rarity of the strategy among all same-shape strategies.
    Minimizer,
    /// The evolving pool scores itself.
    SelfTrained,
}

pub fn build_trainer(kind: TrainerKind, cfg: &Config, rng: &mut Rng) -> CfResult<Trainer> {
    match kind {
        TrainerKind::Panel => Trainer::panel(
            cfg.panel.panel_size,
            cfg.game.population,
            cfg.game.fronts,
            rng,
        ),
        TrainerKind::Crazy => Trainer::hardened_panel(
            cfg.panel.crazy_panel_size,
            cfg.panel.crazy_min_fitness,
            cfg.game.population,
            cfg.game.fronts,
            rng,
        ),
        TrainerKind::Minimizer => Trainer::minimizer(cfg.game.population, cfg.game.fronts),
        TrainerKind::SelfTrained => Ok(Trainer::self_trained()),
    }
}
