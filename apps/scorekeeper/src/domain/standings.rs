//! Read models derived from `GameState` for leaderboards and history tables.

use serde::Serialize;

use crate::domain::state::{GameState, Seat};

/// One leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based position; tied scores keep seating order.
    pub rank: usize,
    pub seat: Seat,
    pub name: String,
    pub score: i32,
}

/// One player's cell in a history row: `points (bid/tricks)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryCell {
    pub points: i32,
    pub bid: u8,
    pub tricks: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// 1-based round number.
    pub round: u8,
    pub cells: Vec<HistoryCell>,
}

/// Players ordered by score, highest first.
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut lines: Vec<Standing> = state
        .players
        .iter()
        .zip(&state.scores)
        .enumerate()
        .map(|(seat, (name, &score))| Standing {
            rank: 0,
            seat,
            name: name.clone(),
            score,
        })
        .collect();

    // sort_by is stable, so ties stay in seat order
    lines.sort_by(|a, b| b.score.cmp(&a.score));
    for (idx, line) in lines.iter_mut().enumerate() {
        line.rank = idx + 1;
    }
    lines
}

/// First seat holding the top score.
pub fn leader(state: &GameState) -> Option<Seat> {
    let top = state.scores.iter().max()?;
    state.scores.iter().position(|score| score == top)
}

/// Every seat sharing the top score.
pub fn winners(state: &GameState) -> Vec<Seat> {
    let Some(&top) = state.scores.iter().max() else {
        return Vec::new();
    };
    state
        .scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score == top)
        .map(|(seat, _)| seat)
        .collect()
}

/// Per-round rows for the history table.
pub fn history(state: &GameState) -> Vec<HistoryRow> {
    state
        .round_results
        .iter()
        .zip(1u8..=u8::MAX)
        .map(|(result, round)| HistoryRow {
            round,
            cells: result
                .points
                .iter()
                .zip(&result.bids)
                .zip(&result.tricks)
                .map(|((&points, &bid), &tricks)| HistoryCell {
                    points,
                    bid,
                    tricks,
                })
                .collect(),
        })
        .collect()
}
