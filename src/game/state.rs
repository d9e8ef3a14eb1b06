use tracing::{debug, info};

use crate::game::board::{Board, Cell};
use crate::game::piece::{Piece, PieceType};
use crate::game::rng::PieceSource;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Owns the grid, the falling piece and the game status. Every mutation goes
/// through the methods below; once the game is over they all become no-ops
/// except [`Game::reset`].
pub struct Game {
    board: Board,
    current_piece: Piece,
    game_state: GameStatus,
    source: Box<dyn PieceSource>,
}

/// Spawn column: horizontally centered, counting from the piece origin.
pub fn spawn_column(width: usize) -> i32 {
    width as i32 / 2 - 1
}

impl Game {
    pub fn new(width: usize, height: usize, source: Box<dyn PieceSource>) -> Self {
        Self::from_board(Board::new(width, height), source)
    }

    /// Starts play on an existing grid. The first piece spawns immediately and
    /// may end the game on the spot if the spawn area is blocked.
    pub fn from_board(board: Board, mut source: Box<dyn PieceSource>) -> Self {
        let first = source.next_piece();
        let mut game = Self {
            current_piece: Piece::new(first, spawn_column(board.width()), 0),
            board,
            game_state: GameStatus::Running,
            source,
        };
        game.check_spawn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current_piece
    }

    pub fn status(&self) -> GameStatus {
        self.game_state
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state == GameStatus::GameOver
    }

    pub fn spawn_piece(&mut self) {
        if self.is_game_over() {
            return;
        }

        let piece_type = self.source.next_piece();
        self.current_piece = Piece::new(piece_type, spawn_column(self.board.width()), 0);
        self.check_spawn();
    }

    // The piece is left where it spawned so the final frame shows the overlap
    fn check_spawn(&mut self) {
        debug!(piece = ?self.current_piece.piece_type, x = self.current_piece.x, "spawned piece");
        if !self.is_valid_move() {
            self.game_state = GameStatus::GameOver;
            info!(filled = self.board.filled_count(), "spawn blocked, game over");
        }
    }

    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        piece
            .get_blocks()
            .iter()
            .all(|&(x, y)| self.board.is_free(x, y))
    }

    pub fn is_valid_move(&self) -> bool {
        self.is_valid_position(&self.current_piece)
    }

    /// Shifts the piece by (dx, dy) if the target is valid. Returns whether it moved.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_game_over() {
            return false;
        }

        let moved = self.current_piece.shifted(dx, dy);
        if self.is_valid_position(&moved) {
            self.current_piece = moved;
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(1, 0)
    }

    /// One row of gravity. A piece that cannot fall locks in place, full rows
    /// clear and the next piece spawns; returns false in that case.
    pub fn move_down(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        if self.move_piece(0, 1) {
            return true;
        }

        self.lock_piece();
        false
    }

    /// Quarter turn in place. An invalid result leaves the piece as it was.
    pub fn rotate_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let rotated = self.current_piece.rotated();
        if self.is_valid_position(&rotated) {
            self.current_piece = rotated;
            true
        } else {
            debug!(piece = ?self.current_piece.piece_type, "rotation blocked");
            false
        }
    }

    fn lock_piece(&mut self) {
        let cell = Cell::Filled(self.current_piece.piece_type);
        for (x, y) in self.current_piece.get_blocks() {
            self.board.set(x, y, cell);
        }
        debug!(piece = ?self.current_piece.piece_type, x = self.current_piece.x, y = self.current_piece.y, "locked piece");

        self.clear_lines();
        self.spawn_piece();
    }

    pub fn clear_lines(&mut self) -> usize {
        if self.is_game_over() {
            return 0;
        }

        let lines = self.board.clear_lines();
        if lines > 0 {
            info!(lines, "cleared lines");
        }
        lines
    }

    /// Empties the grid and starts a fresh game, whatever the current status.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.width(), self.board.height());
        self.game_state = GameStatus::Running;
        self.spawn_piece();
        info!("game reset");
    }

    pub fn piece_type(&self) -> PieceType {
        self.current_piece.piece_type
    }
}
