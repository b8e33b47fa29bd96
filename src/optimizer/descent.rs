//! Local search: steepest-ascent hill climbing over single-unit
//! transfers between fronts.

use crate::optimizer::SearchOutcome;
use crate::strategy::Strategy;
use crate::trainer::Trainer;
use crate::CfResult;
use fastrand::Rng;

/// One full sweep from `base`: try every ordered pair of distinct
/// fronts `(i, j)` with a non-empty source `i`, moving one unit from
/// `i` to `j`, and return the best strictly-improving neighbour over
/// `score`, if any.
fn sweep(
    base: &Strategy,
    score: f64,
    trainer: &Trainer,
    pool: &[Strategy],
) -> CfResult<Option<(Strategy, f64)>> {
    let units = base.units();
    let mut best: Option<(Strategy, f64)> = None;
    let mut best_score = score;

    for from in 0..units.len() {
        if units[from] == 0 {
            continue;
        }
        for to in 0..units.len() {
            if from == to {
                continue;
            }
            let mut probe = units.to_vec();
            probe[from] -= 1;
            probe[to] += 1;
            let candidate = Strategy::from_units_unchecked(probe);
            let candidate_score = trainer.evaluate(&candidate, pool)?;
            if candidate_score > best_score {
                best_score = candidate_score;
                best = Some((candidate, candidate_score));
            }
        }
    }
    Ok(best)
}

/// Hill-climb from a fresh random strategy until no single-unit
/// transfer improves the trainer's score (a local optimum).
///
/// Returns the final strategy and the fitness recorded at the start of
/// each sweep, the last entry being the local optimum's score. The
/// trainer is evaluated with an empty reference pool, so a
/// self-trained trainer degenerates to a flat score here.
pub fn descend(
    trainer: &Trainer,
    population: u32,
    fronts: usize,
    rng: &mut Rng,
) -> CfResult<SearchOutcome> {
    let mut current = Strategy::random(population, fronts, rng)?;
    let mut score = trainer.evaluate(&current, &[])?;
    let mut scores = Vec::new();

    loop {
        scores.push(score);
        match sweep(&current, score, trainer, &[])? {
            Some((next, next_score)) => {
                current = next;
                score = next_score;
            }
            None => break,
        }
    }

    Ok(SearchOutcome {
        best: current,
        scores,
    })
}

fn final_score(outcome: &SearchOutcome) -> f64 {
    outcome.scores.last().copied().unwrap_or(f64::NEG_INFINITY)
}

/// Run `attempts` independent climbs and keep the one ending at the
/// best local optimum. Always climbs at least once, so the result is
/// never empty.
pub fn descend_best_of(
    trainer: &Trainer,
    attempts: usize,
    population: u32,
    fronts: usize,
    rng: &mut Rng,
) -> CfResult<SearchOutcome> {
    let mut best = descend(trainer, population, fronts, rng)?;
    tracing::debug!(attempt = 1, score = final_score(&best), "climb reached a local optimum");

    for attempt in 2..=attempts {
        let outcome = descend(trainer, population, fronts, rng)?;
        tracing::debug!(attempt, score = final_score(&outcome), "climb reached a local optimum");
        if final_score(&outcome) > final_score(&best) {
            best = outcome;
        }
    }
    Ok(best)
}

/// Climb from `start` until the trainer's score reaches `min_fitness`.
/// Stops early at a local optimum, so an unreachable threshold still
/// terminates. Used to harden panel opponents.
pub(crate) fn climb_to(start: Strategy, trainer: &Trainer, min_fitness: f64) -> CfResult<Strategy> {
    let mut current = start;
    let mut score = trainer.evaluate(&current, &[])?;

    while score < min_fitness {
        match sweep(&current, score, trainer, &[])? {
            Some((next, next_score)) => {
                current = next;
                score = next_score;
            }
            None => break,
        }
    }
    Ok(current)
}
