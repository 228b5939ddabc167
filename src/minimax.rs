use log::{debug, trace};

use crate::board::{Board, Mark};

pub const DEPTH_LIMIT: u32 = 3;

pub struct Minimax {
    depth_limit: u32,
}

impl Minimax {
    pub fn new(depth_limit: u32) -> Self {
        Self { depth_limit }
    }

    // Best move for `player` over the empty cells in scan order; on a tie
    // the first candidate found wins. Returns None only on a full board,
    // which callers are expected to rule out beforehand.
    pub fn select_move(&self, board: &Board, player: Mark) -> Option<(usize, usize)> {
        let mut best_move = None;
        let mut best_score = i32::MIN;
        for (row, col) in board.empty_cells() {
            let mut next = board.clone();
            next.place(row, col, player).unwrap();
            let score = self.score(
                &next,
                player.other(),
                self.depth_limit.saturating_sub(1),
                false,
            );
            trace!("candidate ({}, {}) scores {}", row, col, score);
            if score > best_score {
                best_score = score;
                best_move = Some((row, col));
            }
        }
        if let Some((row, col)) = best_move {
            debug!("picked ({}, {}) with score {}", row, col, best_score);
        }
        best_move
    }

    // `to_move` places the next mark; it alternates together with the
    // maximizing flag as the recursion descends
    fn score(&self, board: &Board, to_move: Mark, depth: u32, maximizing: bool) -> i32 {
        if depth == 0 || board.is_terminal() {
            return evaluate(board);
        }
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for (row, col) in board.empty_cells() {
            let mut next = board.clone();
            next.place(row, col, to_move).unwrap();
            let score = self.score(&next, to_move.other(), depth - 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEPTH_LIMIT)
    }
}

// The computer always plays O, so O owning a line is a win for the
// maximizer. Depth cutoffs and draws both land on 0.
fn evaluate(board: &Board) -> i32 {
    if board.has_won(Mark::O) {
        1
    } else if board.has_won(Mark::X) {
        -1
    } else {
        0
    }
}
