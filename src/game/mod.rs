pub mod board;
pub mod command;
pub mod piece;
pub mod rng;
pub mod state;

pub use board::{Board, Cell};
pub use command::Command;
pub use piece::{Piece, PieceType};
pub use rng::{PieceSource, RandomSource, SequenceSource};
pub use state::{Game, GameStatus};
