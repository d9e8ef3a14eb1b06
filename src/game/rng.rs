//! Piece selection sources.
//!
//! The engine draws every new piece through [`PieceSource`], so play uses a
//! uniform random source while tests replay a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::piece::PieceType;

pub trait PieceSource {
    fn next_piece(&mut self) -> PieceType;
}

/// Uniform choice over the seven catalog types.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same piece sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource for RandomSource {
    fn next_piece(&mut self) -> PieceType {
        PieceType::from_index(self.rng.gen_range(0..PieceType::ALL.len()))
    }
}

/// Replays a fixed list of types, cycling when it runs out.
/// An empty list cycles through the catalog in order.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    pieces: Vec<PieceType>,
    index: usize,
}

impl SequenceSource {
    pub fn new(pieces: &[PieceType]) -> Self {
        let pieces = if pieces.is_empty() {
            PieceType::ALL.to_vec()
        } else {
            pieces.to_vec()
        };
        Self { pieces, index: 0 }
    }

    pub fn repeat(piece_type: PieceType) -> Self {
        Self::new(&[piece_type])
    }
}

impl PieceSource for SequenceSource {
    fn next_piece(&mut self) -> PieceType {
        let piece = self.pieces[self.index % self.pieces.len()];
        self.index += 1;
        piece
    }
}
