use log::debug;

use crate::board::{Board, Mark, Outcome, GRID_SIZE};

// Owns the live board and the turn order. The search engine never touches
// this state; it works on clones handed out through `board()`.
pub struct Session {
    board: Board,
    current: Mark,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
        }
    }

    // A selection on a filled cell, outside the grid, or after the game
    // has ended is ignored, like a click on a dead button
    pub fn cell_selected(&mut self, row: usize, col: usize) {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            debug!("ignoring selection off the grid: ({}, {})", row, col);
            return;
        }
        if self.board.is_terminal() {
            debug!("ignoring selection, the game is over");
            return;
        }
        match self.board.place(row, col, self.current) {
            Ok(()) => self.current = self.current.other(),
            Err(err) => debug!("ignoring selection: {}", err),
        }
    }

    pub fn new_game(&mut self) {
        debug!("starting a new game");
        self.board = Board::new();
        self.current = Mark::X;
    }

    pub fn status(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }
}
