use crate::domain::scoring::{apply_round, round_points, score_delta};
use crate::domain::state::GameState;

fn three_players() -> GameState {
    GameState::new(vec!["A".into(), "B".into(), "C".into()])
}

#[test]
fn exact_bid_earns_base_plus_ten_per_trick() {
    assert_eq!(score_delta(0, 0), 20);
    assert_eq!(score_delta(1, 1), 30);
    assert_eq!(score_delta(3, 3), 50);
    assert_eq!(score_delta(20, 20), 220);
}

#[test]
fn missed_bid_costs_ten_per_trick_either_direction() {
    assert_eq!(score_delta(2, 0), -20);
    assert_eq!(score_delta(0, 2), -20);
    assert_eq!(score_delta(5, 1), -40);
    assert_eq!(score_delta(1, 5), -40);
}

#[test]
fn round_points_are_index_aligned() {
    assert_eq!(round_points(&[1, 0, 2], &[1, 1, 0]), vec![30, -10, -20]);
}

#[test]
fn first_round_literal_scenario() {
    // players A, B, C; round 1; bids [1,0,0], tricks [1,0,0]
    let mut state = three_players();
    apply_round(&mut state, vec![1, 0, 0], vec![1, 0, 0]);

    assert_eq!(state.scores, vec![30, 20, 20]);
    assert_eq!(state.current_round, 2);
    assert_eq!(state.current_dealer_index, 1);
    assert_eq!(state.round_results.len(), 1);
    assert_eq!(state.round_results[0].points, vec![30, 20, 20]);
}

#[test]
fn points_equal_score_change() {
    let mut state = three_players();
    apply_round(&mut state, vec![1, 0, 0], vec![0, 1, 0]);
    apply_round(&mut state, vec![2, 0, 1], vec![2, 0, 0]);

    assert_eq!(state.round_results[0].points, vec![-10, -10, 20]);
    assert_eq!(state.round_results[1].points, vec![40, 20, -10]);
    assert_eq!(state.scores, vec![30, 10, 10]);
}

#[test]
fn final_round_does_not_advance_round_or_dealer() {
    let mut state = three_players();
    state.current_round = state.total_rounds;
    state.current_dealer_index = 1;
    // Pretend the earlier rounds were played so the game is not complete yet
    for _ in 1..state.total_rounds {
        state.round_results.push(crate::domain::state::RoundResult {
            bids: vec![0, 0, 0],
            tricks: vec![0, 0, 0],
            points: vec![0, 0, 0],
        });
    }

    let round = state.current_round;
    let mut bids = vec![0u8; 3];
    bids[0] = round;
    apply_round(&mut state, bids.clone(), bids);

    assert_eq!(state.current_round, round);
    assert_eq!(state.current_dealer_index, 1);
    assert_eq!(state.round_results.len(), usize::from(state.total_rounds));
    assert!(state.is_complete());
}

#[test]
fn scoring_applies_once_only_after_completion() {
    let mut state = three_players();
    state.total_rounds = 1;
    apply_round(&mut state, vec![1, 0, 0], vec![1, 0, 0]);
    let after_first = state.clone();

    // Second call on a completed game must be a no-op
    apply_round(&mut state, vec![0, 1, 0], vec![0, 1, 0]);
    assert_eq!(state, after_first);
}

#[test]
fn short_entry_keeps_one_score_per_player() {
    let mut state = three_players();
    apply_round(&mut state, vec![1], vec![1]);

    assert_eq!(state.scores, vec![30, 0, 0]);
    assert_eq!(state.round_results[0].points, vec![30, 0, 0]);
}
