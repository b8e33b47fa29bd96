//! Random variation operators for the genetic search: single-unit
//! transfer mutation and front-wise crossover with total repair.

use crate::strategy::{normalize, Strategy};
use crate::{CastleForgeError, CfResult};
use fastrand::Rng;

/// Derive a mutated copy of `strategy`.
///
/// Draws a mutation count uniformly from `0..=max_mutations` and
/// applies that many single-unit transfers between random fronts. A
/// transfer whose source and destination collide, or whose source
/// front is empty, is a no-op. The input is never modified; the output
/// is always a fresh copy (possibly value-equal to the input).
pub fn mutate(strategy: &Strategy, max_mutations: u32, rng: &mut Rng) -> Strategy {
    let mut units = strategy.units().to_vec();
    if units.is_empty() {
        return Strategy::from_units_unchecked(units);
    }

    let num_mutations = rng.u32(0..=max_mutations);
    for _ in 0..num_mutations {
        let from = rng.usize(0..units.len());
        let to = rng.usize(0..units.len());
        if from == to || units[from] == 0 {
            continue;
        }
        units[from] -= 1;
        units[to] += 1;
    }
    Strategy::from_units_unchecked(units)
}

/// Recombine two parents front by front.
///
/// Each front independently takes parent A's or parent B's raw value
/// with probability 1/2; the resulting vector rarely sums to the
/// required population, so it is repaired through [`normalize`].
pub fn cross(a: &Strategy, b: &Strategy, population: u32, rng: &mut Rng) -> CfResult<Strategy> {
    if a.len() != b.len() {
        return Err(CastleForgeError::Validation(format!(
            "cannot cross strategies of different shapes ({} vs {} fronts)",
            a.len(),
            b.len()
        )));
    }

    let raw: Vec<f64> = a
        .units()
        .iter()
        .zip(b.units())
        .map(|(ua, ub)| f64::from(if rng.bool() { *ua } else { *ub }))
        .collect();
    normalize(population, &raw, rng)
}
