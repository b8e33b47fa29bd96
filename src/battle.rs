//! Contest engine: head-to-head battles between two strategies and
//! tournament scoring against opponent panels.

use crate::strategy::Strategy;
use crate::{CastleForgeError, CfResult};
use strum_macros::Display;

/// Tournament points for winning a battle.
pub const WIN_POINTS: u32 = 3;
/// Tournament points each side takes from a drawn battle.
pub const DRAW_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    PlayerOne,
    PlayerTwo,
    Draw,
}

/// Fight two strategies front by front.
///
/// Strictly more units on front `i` earns that side `2*(i+1)` weighted
/// points; an equal commitment earns `i+1` to both sides. Whoever
/// accumulates the higher weighted total wins. A win is therefore
/// worth exactly twice a mutual tie on the same front, a convention
/// all downstream scoring relies on.
pub fn battle(a: &Strategy, b: &Strategy) -> CfResult<Outcome> {
    if a.len() != b.len() {
        return Err(CastleForgeError::Validation(format!(
            "cannot battle strategies of different shapes ({} vs {} fronts)",
            a.len(),
            b.len()
        )));
    }

    let mut score_a: u32 = 0;
    let mut score_b: u32 = 0;
    for (i, (ua, ub)) in a.units().iter().zip(b.units()).enumerate() {
        let weight = (i + 1) as u32;
        match ua.cmp(ub) {
            std::cmp::Ordering::Greater => score_a += 2 * weight,
            std::cmp::Ordering::Less => score_b += 2 * weight,
            std::cmp::Ordering::Equal => {
                score_a += weight;
                score_b += weight;
            }
        }
    }

    Ok(match score_a.cmp(&score_b) {
        std::cmp::Ordering::Greater => Outcome::PlayerOne,
        std::cmp::Ordering::Less => Outcome::PlayerTwo,
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}

/// Tournament points earned by `(a, b)` for one battle:
/// win = 3, draw = 1 each, loss = 0.
pub fn score_battle(a: &Strategy, b: &Strategy) -> CfResult<(u32, u32)> {
    Ok(match battle(a, b)? {
        Outcome::PlayerOne => (WIN_POINTS, 0),
        Outcome::PlayerTwo => (0, WIN_POINTS),
        Outcome::Draw => (DRAW_POINTS, DRAW_POINTS),
    })
}

/// Sum of `strategy`'s tournament points against every panel member.
///
/// A panel member that is the very same object as `strategy` (pointer
/// identity, not value equality) is skipped, so a strategy's own
/// presence in a panel never rewards it against itself.
pub fn score_against_panel(panel: &[Strategy], strategy: &Strategy) -> CfResult<u32> {
    let mut total = 0;
    for opponent in panel {
        if std::ptr::eq(opponent, strategy) {
            continue;
        }
        total += score_battle(strategy, opponent)?.0;
    }
    Ok(total)
}
