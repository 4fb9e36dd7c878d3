use crate::domain::rules::total_rounds_for;
use crate::domain::state::{next_seat, seat_offset, GamePhase, GameState, RoundResult};
use crate::errors::domain::ValidationKind;

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

#[test]
fn fresh_state_defaults() {
    for n in 3..=6 {
        let state = GameState::new(roster(n));
        assert_eq!(state.scores, vec![0; n]);
        assert_eq!(state.current_round, 1);
        assert_eq!(state.current_dealer_index, 0);
        assert!(state.round_results.is_empty());
        assert_eq!(Some(state.total_rounds), total_rounds_for(n));
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.dealer(), Some("P0"));
        assert!(state.check_invariants().is_ok());
    }
}

#[test]
fn serializes_with_storage_field_names() {
    let state = GameState::new(roster(3));
    let json = serde_json::to_value(&state).expect("serialize");
    let mut keys: Vec<&str> = json
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "currentDealerIndex",
            "currentRound",
            "players",
            "roundResults",
            "scores",
            "totalRounds"
        ]
    );
}

#[test]
fn missing_dealer_index_defaults_to_zero() {
    let json = r#"{
        "players": ["A", "B", "C"],
        "scores": [30, 20, 20],
        "currentRound": 2,
        "roundResults": [{"bids": [1,0,0], "tricks": [1,0,0], "points": [30,20,20]}],
        "totalRounds": 20
    }"#;
    let state: GameState = serde_json::from_str(json).expect("older payload parses");
    assert_eq!(state.current_dealer_index, 0);
    assert_eq!(state.scores, vec![30, 20, 20]);
}

#[test]
fn seat_math_wraps_both_directions() {
    assert_eq!(next_seat(2, 3), 0);
    assert_eq!(seat_offset(0, -1, 5), 4);
    assert_eq!(seat_offset(4, 7, 6), 5);
}

#[test]
fn seat_math_on_an_empty_table_stays_put() {
    assert_eq!(next_seat(0, 0), 0);
    assert_eq!(seat_offset(2, -3, 0), 2);
}

#[test]
fn invariants_reject_misaligned_scores() {
    let mut state = GameState::new(roster(3));
    state.scores.push(0);
    let err = state.check_invariants().expect_err("extra score");
    assert_eq!(err.kind(), &ValidationKind::Invariant);
}

#[test]
fn invariants_reject_dealer_outside_roster() {
    let mut state = GameState::new(roster(4));
    state.current_dealer_index = 4;
    assert!(state.check_invariants().is_err());
}

#[test]
fn invariants_reject_round_beyond_total() {
    let mut state = GameState::new(roster(6));
    state.current_round = 11;
    assert!(state.check_invariants().is_err());
}

#[test]
fn invariants_reject_history_out_of_step_with_round() {
    let mut state = GameState::new(roster(3));
    state.current_round = 3;
    state.round_results.push(RoundResult {
        bids: vec![0, 0, 1],
        tricks: vec![0, 0, 1],
        points: vec![20, 20, 30],
    });
    state.scores = vec![20, 20, 30];
    assert!(state.check_invariants().is_err());
}

#[test]
fn invariants_reject_scores_that_do_not_sum_from_history() {
    let mut state = GameState::new(roster(3));
    state.current_round = 2;
    state.round_results.push(RoundResult {
        bids: vec![0, 0, 1],
        tricks: vec![0, 0, 1],
        points: vec![20, 20, 30],
    });
    state.scores = vec![20, 20, 999];
    assert!(state.check_invariants().is_err());
}
