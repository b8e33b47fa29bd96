//! Strength counter: exact memoized count of how many same-shape
//! strategies equal-or-beat a given strategy.
//!
//! The count is a monotone rarity measure. A strategy nobody can match
//! counts 1 (only itself); a strategy many allocations dominate counts
//! large. Fronts are processed from the highest-weighted down, and the
//! target starts at `N*(N+1)/2`, half the doubled points available
//! across all fronts, i.e. the draw-or-better line.

use crate::strategy::Strategy;

/// Memo table over `(fronts_left, pop_left, target)` states, stored as
/// one flat arena rather than nested maps. `u64::MAX` marks an
/// unvisited state. Rebuilt for every top-level count; never shared
/// across input strategies.
struct MemoTable {
    counts: Vec<u64>,
    pop_stride: usize,
    target_stride: usize,
}

impl MemoTable {
    fn new(fronts: usize, population: u32, max_target: u32) -> Self {
        let target_stride = max_target as usize + 1;
        let pop_stride = population as usize * target_stride;
        Self {
            counts: vec![u64::MAX; fronts * pop_stride],
            pop_stride,
            target_stride,
        }
    }

    // Valid for fronts_left >= 1 and pop_left >= 1 only; smaller
    // states are resolved by the base cases before any lookup.
    fn index(&self, fronts_left: usize, pop_left: u32, target: u32) -> usize {
        (fronts_left - 1) * self.pop_stride
            + (pop_left as usize - 1) * self.target_stride
            + target as usize
    }

    fn get(&self, fronts_left: usize, pop_left: u32, target: u32) -> Option<u64> {
        let stored = self.counts[self.index(fronts_left, pop_left, target)];
        (stored != u64::MAX).then_some(stored)
    }

    fn set(&mut self, fronts_left: usize, pop_left: u32, target: u32, count: u64) {
        let idx = self.index(fronts_left, pop_left, target);
        self.counts[idx] = count;
    }
}

/// Count the same-shape, same-population strategies whose weighted
/// score against `strategy` reaches the draw-or-better line, the
/// strategy itself included. Exact, not heuristic.
///
/// Runs in `O(fronts * population^2 * max_target)` time over
/// `O(fronts * population * max_target)` memoized states; without the
/// memo the recursion is exponential.
pub fn count_equal_or_better(strategy: &Strategy) -> u64 {
    let fronts = strategy.len();
    let population = strategy.population();
    let max_target = (fronts * (fronts + 1) / 2) as u32;

    let mut memo = MemoTable::new(fronts, population, max_target);
    count_from(strategy.units(), &mut memo, fronts, population, max_target)
}

fn count_from(
    bids: &[u32],
    memo: &mut MemoTable,
    fronts_left: usize,
    pop_left: u32,
    target: u32,
) -> u64 {
    if fronts_left == 0 {
        return u64::from(target == 0);
    }
    if fronts_left == 1 {
        // Last (lowest-weight) front: all remaining units land here.
        // Weight is 1, so 2 points means strictly beating the
        // reference bid and 1 point means matching it.
        return if target == 0 {
            1
        } else if target > 2 {
            0
        } else if target == 2 {
            u64::from(pop_left > bids[0])
        } else {
            u64::from(pop_left >= bids[0])
        };
    }

    // The remaining fronts cannot yield more than fronts_left *
    // (fronts_left + 1) doubled points even by winning them all.
    let available = (fronts_left * (fronts_left + 1)) as u32;
    if available < target {
        return 0;
    }
    if pop_left == 0 {
        // Only the all-zero completion remains, and the prune above
        // already ruled out unreachable targets.
        return 1;
    }

    if let Some(count) = memo.get(fronts_left, pop_left, target) {
        return count;
    }

    let front = fronts_left - 1;
    let ask = bids[front];
    let weight = fronts_left as u32;

    let mut count: u64 = 0;
    for bid in 0..=pop_left {
        let earned = if bid < ask {
            0
        } else if bid == ask {
            weight
        } else {
            2 * weight
        };
        count += count_from(
            bids,
            memo,
            front,
            pop_left - bid,
            target.saturating_sub(earned),
        );
    }

    memo.set(fronts_left, pop_left, target, count);
    count
}
