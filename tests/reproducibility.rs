// ===== castleforge/tests/reproducibility.rs =====
// A fixed seed must pin down the entire run: trainer panel, initial
// pool, breeding and the reported trajectory.

use castleforge::optimizer::{descent, Evolver, EvolverOptions};
use castleforge::trainer::Trainer;

fn options() -> EvolverOptions {
    EvolverOptions {
        pool_size: 20,
        keep_percent: 10,
        max_mutations: 2,
        population: 20,
        fronts: 5,
    }
}

fn seeded_search(seed: u64) -> (Vec<u32>, Vec<f64>) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let trainer = Trainer::panel(50, 20, 5, &mut rng).unwrap();
    let evolver = Evolver::new(&trainer, options());
    let outcome = evolver.run_generations(10, &mut rng).unwrap();
    (outcome.best.units().to_vec(), outcome.scores)
}

#[test]
fn seeded_searches_are_identical() {
    let (best_a, scores_a) = seeded_search(424242);
    let (best_b, scores_b) = seeded_search(424242);
    assert_eq!(best_a, best_b);
    assert_eq!(scores_a, scores_b);
}

#[test]
fn different_seeds_usually_diverge() {
    let (_, scores_a) = seeded_search(1);
    let (_, scores_b) = seeded_search(2);
    // Not a hard guarantee, but with 10 generations of independent
    // randomness an identical trajectory would point at a seeding bug.
    assert_ne!(scores_a, scores_b);
}

#[test]
fn seeded_descent_is_identical() {
    let run = |seed: u64| {
        let mut rng = fastrand::Rng::with_seed(seed);
        let trainer = Trainer::minimizer(20, 5).unwrap();
        let outcome = descent::descend(&trainer, 20, 5, &mut rng).unwrap();
        (outcome.best.units().to_vec(), outcome.scores)
    };
    assert_eq!(run(7), run(7));
}
