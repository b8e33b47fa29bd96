use castleforge::battle::{
    battle, score_against_panel, score_battle, Outcome, DRAW_POINTS, WIN_POINTS,
};
use castleforge::strategy::Strategy;
use rstest::rstest;

fn s(units: &[u32]) -> Strategy {
    Strategy::from_units(units.to_vec(), units.iter().sum()).unwrap()
}

#[rstest]
#[case(&[], &[], Outcome::Draw)]
#[case(&[1, 1, 1, 5], &[1, 1, 5, 1], Outcome::PlayerOne)]
#[case(&[0, 0, 0, 0, 10], &[1, 1, 1, 1, 6], Outcome::PlayerTwo)]
#[case(&[0, 1, 0, 1], &[0, 1, 0, 1], Outcome::Draw)]
#[case(&[1, 51, 2, 36, 42], &[1, 51, 2, 36, 42], Outcome::Draw)]
#[case(&[0, 0, 2], &[1, 1, 0], Outcome::Draw)]
#[case(&[1, 1, 1], &[0, 1, 1], Outcome::PlayerOne)]
#[case(&[1, 1, 0], &[0, 0, 1], Outcome::Draw)]
fn battle_outcomes(#[case] a: &[u32], #[case] b: &[u32], #[case] expected: Outcome) {
    assert_eq!(battle(&s(a), &s(b)).unwrap(), expected);
}

#[rstest]
#[case(&[], &[], Outcome::Draw)]
#[case(&[1, 1, 1, 5], &[1, 1, 5, 1], Outcome::PlayerTwo)]
#[case(&[0, 0, 0, 0, 10], &[1, 1, 1, 1, 6], Outcome::PlayerOne)]
fn battle_is_antisymmetric(#[case] a: &[u32], #[case] b: &[u32], #[case] reversed: Outcome) {
    assert_eq!(battle(&s(b), &s(a)).unwrap(), reversed);
}

#[test]
fn battle_rejects_mismatched_shapes() {
    assert!(battle(&s(&[1, 2]), &s(&[1, 1, 1])).is_err());
}

#[test]
fn score_battle_awards_tournament_points() {
    assert_eq!(score_battle(&s(&[3, 0, 0]), &s(&[1, 1, 1])).unwrap(), (0, WIN_POINTS));
    assert_eq!(score_battle(&s(&[1, 1, 1]), &s(&[3, 0, 0])).unwrap(), (WIN_POINTS, 0));
    assert_eq!(
        score_battle(&s(&[1, 1, 1]), &s(&[1, 1, 1])).unwrap(),
        (DRAW_POINTS, DRAW_POINTS)
    );
}

#[test]
fn empty_panel_scores_zero() {
    assert_eq!(score_against_panel(&[], &s(&[1, 1, 1])).unwrap(), 0);
}

#[test]
fn panel_score_sums_wins_and_draws() {
    let panel = vec![s(&[3, 0, 0]), s(&[0, 3, 0]), s(&[0, 0, 3]), s(&[0, 1, 2])];
    // Two wins, one draw, one loss.
    assert_eq!(
        score_against_panel(&panel, &s(&[1, 1, 1])).unwrap(),
        WIN_POINTS + WIN_POINTS + DRAW_POINTS
    );
}

#[test]
fn own_presence_in_panel_is_skipped() {
    let panel = vec![
        s(&[1, 1, 1]),
        s(&[3, 0, 0]),
        s(&[0, 3, 0]),
        s(&[0, 0, 3]),
        s(&[0, 1, 2]),
    ];
    // The first member is the rated strategy itself; only identity is
    // skipped, a value-equal copy would still be fought.
    assert_eq!(
        score_against_panel(&panel, &panel[0]).unwrap(),
        WIN_POINTS + WIN_POINTS + DRAW_POINTS
    );

    let copy = s(&[1, 1, 1]);
    assert_eq!(
        score_against_panel(&panel, &copy).unwrap(),
        DRAW_POINTS + WIN_POINTS + WIN_POINTS + DRAW_POINTS
    );
}
