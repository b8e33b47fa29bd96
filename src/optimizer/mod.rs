// ===== castleforge/src/optimizer/mod.rs =====
pub mod descent;
pub mod mutation;

use crate::config::Config;
use crate::strategy::{self, Strategy};
use crate::trainer::Trainer;
use crate::{CastleForgeError, CfResult};
use fastrand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Result of a search run: the best strategy found and the best
/// fitness recorded per generation (or per sweep, for descent), for
/// convergence inspection.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub best: Strategy,
    pub scores: Vec<f64>,
}

pub struct EvolverOptions {
    pub pool_size: usize,
    pub keep_percent: usize,
    pub max_mutations: u32,
    pub population: u32,
    pub fronts: usize,
}

impl From<&Config> for EvolverOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            pool_size: cfg.search.pool_size,
            keep_percent: cfg.search.keep_percent,
            max_mutations: cfg.search.max_mutations,
            population: cfg.game.population,
            fronts: cfg.game.fronts,
        }
    }
}

/// Population-based genetic search: evaluate, keep the fittest slice
/// as parents, refill the pool with mutated crossover children.
pub struct Evolver<'a> {
    trainer: &'a Trainer,
    options: EvolverOptions,
}

impl<'a> Evolver<'a> {
    pub fn new(trainer: &'a Trainer, options: EvolverOptions) -> Self {
        Self { trainer, options }
    }

    /// Run for a fixed number of generations over a fresh random pool.
    pub fn run_generations(&self, generations: usize, rng: &mut Rng) -> CfResult<SearchOutcome> {
        let pool = self.random_pool(rng)?;
        self.run_generations_from(pool, generations, rng)
    }

    /// Run for a fixed number of generations over a caller-supplied
    /// initial pool. Returns the best member of the final generation
    /// by trainer score.
    pub fn run_generations_from(
        &self,
        mut pool: Vec<Strategy>,
        generations: usize,
        rng: &mut Rng,
    ) -> CfResult<SearchOutcome> {
        self.check_pool(&pool)?;

        let mut scores = Vec::with_capacity(generations);
        for generation in 0..generations {
            let (next, gen_best) = self.next_generation(pool, rng)?;
            pool = next;
            debug!(generation, best = gen_best, "generation evaluated");
            scores.push(gen_best);
        }

        Ok(SearchOutcome {
            best: self.best_of(&pool)?,
            scores,
        })
    }

    /// Run until the best-observed fitness fails to strictly improve
    /// for `retries` consecutive generations, over a fresh random pool.
    pub fn run_until_stagnant(&self, retries: usize, rng: &mut Rng) -> CfResult<SearchOutcome> {
        let pool = self.random_pool(rng)?;
        self.run_until_stagnant_from(pool, retries, rng)
    }

    /// Stagnation-terminated run over a caller-supplied pool. The
    /// recorded trajectory is the monotone best-so-far, so it never
    /// regresses when a generation underperforms.
    pub fn run_until_stagnant_from(
        &self,
        mut pool: Vec<Strategy>,
        retries: usize,
        rng: &mut Rng,
    ) -> CfResult<SearchOutcome> {
        self.check_pool(&pool)?;

        let mut scores = Vec::new();
        let mut best_so_far = f64::NEG_INFINITY;
        let mut failures = 0;

        while failures < retries {
            let (next, gen_best) = self.next_generation(pool, rng)?;
            pool = next;

            if gen_best > best_so_far {
                best_so_far = gen_best;
                failures = 0;
            } else {
                failures += 1;
            }
            debug!(best = best_so_far, failures, "generation evaluated");
            scores.push(best_so_far);
        }

        Ok(SearchOutcome {
            best: self.best_of(&pool)?,
            scores,
        })
    }

    fn random_pool(&self, rng: &mut Rng) -> CfResult<Vec<Strategy>> {
        strategy::random_pool(
            self.options.pool_size,
            self.options.population,
            self.options.fronts,
            rng,
        )
    }

    fn check_pool(&self, pool: &[Strategy]) -> CfResult<()> {
        if pool.is_empty() {
            return Err(CastleForgeError::Config(
                "the evolving pool must contain at least one strategy".to_string(),
            ));
        }
        Ok(())
    }

    /// Fitness of every member against the current pool. Trainers are
    /// pure, so the parallel map is deterministic.
    fn evaluate_pool(&self, pool: &[Strategy]) -> CfResult<Vec<f64>> {
        pool.par_iter()
            .map(|s| self.trainer.evaluate(s, pool))
            .collect()
    }

    /// Breed the next generation and report this generation's best
    /// fitness. The top slice survives unchanged as parents; every
    /// other slot is refilled with a mutated crossover child of two
    /// parents drawn uniformly with replacement.
    fn next_generation(&self, pool: Vec<Strategy>, rng: &mut Rng) -> CfResult<(Vec<Strategy>, f64)> {
        let fitness = self.evaluate_pool(&pool)?;
        let gen_best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // Stable sort: equal fitness keeps original pool order.
        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));

        let keep = (pool.len() * self.options.keep_percent / 100).max(1);
        let parents: Vec<Strategy> = order
            .iter()
            .take(keep)
            .map(|&i| pool[i].clone())
            .collect();

        let mut next = parents.clone();
        while next.len() < pool.len() {
            let father = &parents[rng.usize(0..parents.len())];
            let mother = &parents[rng.usize(0..parents.len())];
            let child = mutation::cross(father, mother, self.options.population, rng)?;
            next.push(mutation::mutate(&child, self.options.max_mutations, rng));
        }

        Ok((next, gen_best))
    }

    /// Best member of `pool` by trainer score, first on ties.
    fn best_of(&self, pool: &[Strategy]) -> CfResult<Strategy> {
        let fitness = self.evaluate_pool(pool)?;
        let mut best = 0;
        for i in 1..pool.len() {
            if fitness[i] > fitness[best] {
                best = i;
            }
        }
        Ok(pool[best].clone())
    }
}
