//! Fitness providers: pure functions mapping a strategy (and
//! optionally a reference pool) to a scalar score, higher is better.

use crate::battle::score_against_panel;
use crate::counting::count_equal_or_better;
use crate::optimizer::descent;
use crate::strategy::{self, Strategy};
use crate::CfResult;
use fastrand::Rng;

/// A fitness function over strategies, carrying whatever configuration
/// it was built with. Trainers never mutate the strategies they score.
pub enum Trainer {
    /// Tournament points against a fixed opponent panel.
    Panel { panel: Vec<Strategy> },
    /// Rarity ratio: how few same-shape strategies equal-or-beat this
    /// one, normalized by the weakest possible shape.
    Minimizer { baseline: u64 },
    /// Tournament points against the live evolving pool itself.
    SelfTrained,
}

impl Trainer {
    /// Fix a static panel of `size` random opponents.
    pub fn panel(size: usize, population: u32, fronts: usize, rng: &mut Rng) -> CfResult<Self> {
        Ok(Trainer::Panel {
            panel: strategy::random_pool(size, population, fronts, rng)?,
        })
    }

    /// Build a panel of deliberately strong opponents: random
    /// strategies hill-climbed against the minimizer trainer until
    /// each reaches `min_fitness` or a local optimum.
    pub fn hardened_panel(
        size: usize,
        min_fitness: f64,
        population: u32,
        fronts: usize,
        rng: &mut Rng,
    ) -> CfResult<Self> {
        let minimizer = Trainer::minimizer(population, fronts)?;
        let raw = strategy::random_pool(size, population, fronts, rng)?;
        let panel = raw
            .into_iter()
            .map(|s| descent::climb_to(s, &minimizer, min_fitness))
            .collect::<CfResult<Vec<_>>>()?;
        Ok(Trainer::Panel { panel })
    }

    /// Rarity trainer. The baseline is the count for the allocation
    /// that piles the whole population on the lowest-weight front,
    /// which every same-shape strategy equals or beats.
    pub fn minimizer(population: u32, fronts: usize) -> CfResult<Self> {
        let worst = strategy::worst_strategy(population, fronts)?;
        Ok(Trainer::Minimizer {
            baseline: count_equal_or_better(&worst),
        })
    }

    pub fn self_trained() -> Self {
        Trainer::SelfTrained
    }

    /// Score `strategy`. `pool` is the live reference population; only
    /// the self-trained variant reads it.
    pub fn evaluate(&self, strategy: &Strategy, pool: &[Strategy]) -> CfResult<f64> {
        match self {
            Trainer::Panel { panel } => Ok(f64::from(score_against_panel(panel, strategy)?)),
            Trainer::Minimizer { baseline } => {
                Ok(*baseline as f64 / count_equal_or_better(strategy) as f64)
            }
            Trainer::SelfTrained => Ok(f64::from(score_against_panel(pool, strategy)?)),
        }
    }
}
