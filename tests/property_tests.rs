use castleforge::battle::{battle, score_battle, Outcome};
use castleforge::optimizer::mutation;
use castleforge::strategy::normalize;
use proptest::prelude::*;

// proptest's Strategy trait clashes with the crate's Strategy type, so
// the latter is only referenced by path here.
fn strat(units: Vec<u32>) -> castleforge::strategy::Strategy {
    let population = units.iter().sum();
    castleforge::strategy::Strategy::from_units(units, population).unwrap()
}

fn arb_units() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..50, 1..12)
}

// Two sides of one battle must share a front count, so draw the length
// once and derive both vectors from it.
fn arb_unit_pair() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    (1usize..12).prop_flat_map(|fronts| {
        (
            proptest::collection::vec(0u32..50, fronts),
            proptest::collection::vec(0u32..50, fronts),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn normalize_total_and_bound_invariants(
        total in 0u32..250,
        weights in proptest::collection::vec(0.0f64..100.0, 1..12),
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let out = normalize(total, &weights, &mut rng).unwrap();

        prop_assert_eq!(out.len(), weights.len());
        prop_assert_eq!(out.population(), total);

        let strength: f64 = weights.iter().sum();
        let uniform = strength == 0.0;
        let ratio = f64::from(total) / if uniform { weights.len() as f64 } else { strength };
        for (i, &u) in out.units().iter().enumerate() {
            let target = if uniform { ratio } else { ratio * weights[i] };
            prop_assert!(target.floor() as u32 <= u);
            prop_assert!(u <= target.ceil() as u32);
        }
    }

    #[test]
    fn random_strategies_satisfy_the_shape_invariant(
        population in 0u32..300,
        fronts in 1usize..15,
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let out = castleforge::strategy::Strategy::random(population, fronts, &mut rng).unwrap();
        prop_assert_eq!(out.len(), fronts);
        prop_assert_eq!(out.population(), population);
    }

    #[test]
    fn battles_are_antisymmetric((a, b) in arb_unit_pair()) {
        let (sa, sb) = (strat(a), strat(b));
        let forward = battle(&sa, &sb).unwrap();
        let backward = battle(&sb, &sa).unwrap();
        let expected = match forward {
            Outcome::PlayerOne => Outcome::PlayerTwo,
            Outcome::PlayerTwo => Outcome::PlayerOne,
            Outcome::Draw => Outcome::Draw,
        };
        prop_assert_eq!(backward, expected);
    }

    #[test]
    fn score_pairs_are_win_loss_or_shared_draw((a, b) in arb_unit_pair()) {
        let pair = score_battle(&strat(a), &strat(b)).unwrap();
        prop_assert!(pair == (3, 0) || pair == (0, 3) || pair == (1, 1));
    }

    #[test]
    fn mutation_preserves_shape(
        units in arb_units(),
        max_mutations in 0u32..5,
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let original = strat(units);
        let mutated = mutation::mutate(&original, max_mutations, &mut rng);
        prop_assert_eq!(mutated.len(), original.len());
        prop_assert_eq!(mutated.population(), original.population());
    }

    #[test]
    fn crossover_children_satisfy_the_shape_invariant(
        (a, b) in arb_unit_pair(),
        population in 1u32..200,
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let child = mutation::cross(&strat(a), &strat(b), population, &mut rng).unwrap();
        prop_assert_eq!(child.population(), population);
    }
}
