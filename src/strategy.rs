//! Allocation model: integer strategies distributing a fixed
//! population of units across weighted fronts.

use crate::{CastleForgeError, CfResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// One side's allocation: `units[i]` soldiers committed to front `i`.
///
/// Invariant: the entries always sum to the population the strategy
/// was built for. Every operation that derives a new strategy works on
/// a fresh copy; nothing mutates a `Strategy` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strategy {
    units: Vec<u32>,
}

impl Strategy {
    /// Build a strategy from an explicit unit vector, checking it
    /// carries exactly `population` units.
    pub fn from_units(units: Vec<u32>, population: u32) -> CfResult<Self> {
        let total: u32 = units.iter().sum();
        if total != population {
            return Err(CastleForgeError::Validation(format!(
                "strategy sums to {} units, expected {}",
                total, population
            )));
        }
        Ok(Self { units })
    }

    /// Draw a random strategy: one uniform weight per front, repaired
    /// into integers by [`normalize`]. The all-zero draw (possible in
    /// principle, since `rng.f64()` can return 0.0) is absorbed by the
    /// uniform fallback inside `normalize`, so this never fails for
    /// `fronts >= 1`.
    pub fn random(population: u32, fronts: usize, rng: &mut Rng) -> CfResult<Self> {
        let weights: Vec<f64> = (0..fronts).map(|_| rng.f64()).collect();
        normalize(population, &weights, rng)
    }

    pub fn units(&self) -> &[u32] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Total units committed across all fronts.
    pub fn population(&self) -> u32 {
        self.units.iter().sum()
    }

    pub(crate) fn from_units_unchecked(units: Vec<u32>) -> Self {
        Self { units }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, u) in self.units.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", u)?;
        }
        write!(f, "]")
    }
}

/// Spread `total` units across slots proportionally to `weights`.
///
/// Each slot receives its floor share; the leftover units are placed
/// by drawing gap slots (one per unit of floor/ceil ambiguity)
/// uniformly without replacement. The result sums to `total` exactly
/// and every slot stays within `[floor(ratio*w), ceil(ratio*w)]` for
/// `ratio = total / sum(weights)`.
///
/// An all-zero weight vector is treated as uniform weights. An empty
/// or negative/non-finite weight vector is a precondition violation.
pub fn normalize(total: u32, weights: &[f64], rng: &mut Rng) -> CfResult<Strategy> {
    if weights.is_empty() {
        return Err(CastleForgeError::Validation(
            "cannot normalize an empty weight vector".to_string(),
        ));
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(CastleForgeError::Validation(
            "weights must be finite and non-negative".to_string(),
        ));
    }

    let strength: f64 = weights.iter().sum();
    let uniform = strength == 0.0;
    let ratio = f64::from(total) / if uniform { weights.len() as f64 } else { strength };

    let mut units = Vec::with_capacity(weights.len());
    let mut gaps = Vec::new();
    let mut assigned: u32 = 0;

    for (slot, &w) in weights.iter().enumerate() {
        let target = if uniform { ratio } else { ratio * w };
        let inf = target.floor() as u32;
        let sup = target.ceil() as u32;

        units.push(inf);
        assigned += inf;
        for _ in inf..sup {
            gaps.push(slot);
        }
    }

    // Place the rounding remainder one unit at a time, drawing gap
    // slots without replacement.
    while assigned < total {
        if gaps.is_empty() {
            return Err(CastleForgeError::Validation(format!(
                "normalization stalled at {} of {} units",
                assigned, total
            )));
        }
        let pick = rng.usize(0..gaps.len());
        units[gaps.swap_remove(pick)] += 1;
        assigned += 1;
    }

    if assigned != total {
        return Err(CastleForgeError::Validation(format!(
            "normalization overshot: {} units assigned for a total of {}",
            assigned, total
        )));
    }

    Ok(Strategy { units })
}

/// Generate `count` independent random strategies of the same shape.
pub fn random_pool(
    count: usize,
    population: u32,
    fronts: usize,
    rng: &mut Rng,
) -> CfResult<Vec<Strategy>> {
    (0..count)
        .map(|_| Strategy::random(population, fronts, rng))
        .collect()
}

/// The provably weakest shape: everything on the lowest-weight front.
pub fn worst_strategy(population: u32, fronts: usize) -> CfResult<Strategy> {
    if fronts == 0 {
        return Err(CastleForgeError::Validation(
            "a strategy needs at least one front".to_string(),
        ));
    }
    let mut units = vec![0; fronts];
    units[0] = population;
    Ok(Strategy { units })
}
