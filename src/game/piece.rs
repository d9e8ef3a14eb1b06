use ratatui::style::Color;

/// Four (dx, dy) offsets from a piece origin. y grows downward.
pub type Offsets = [(i32, i32); 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    I, O, L, J, T, S, Z
}

const SHAPES: [Offsets; 7] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)], // I
    [(0, 0), (1, 0), (0, 1), (1, 1)], // O
    [(2, 0), (0, 1), (1, 1), (2, 1)], // L
    [(0, 0), (0, 1), (1, 1), (2, 1)], // J
    [(1, 0), (0, 1), (1, 1), (2, 1)], // T
    [(1, 0), (2, 0), (0, 1), (1, 1)], // S
    [(0, 0), (1, 0), (1, 1), (2, 1)], // Z
];

const COLORS: [Color; 7] = [
    Color::Cyan,
    Color::Yellow,
    Color::Rgb(255, 165, 0),
    Color::Blue,
    Color::Magenta,
    Color::Green,
    Color::Red,
];

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::L, PieceType::J,
        PieceType::T, PieceType::S, PieceType::Z,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps out-of-range indices, so any integer selects a valid type.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn shape(self) -> Offsets {
        SHAPES[self.index()]
    }

    pub fn color(self) -> Color {
        COLORS[self.index()]
    }
}

/// The falling piece: a private copy of a catalog shape placed at an origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub offsets: Offsets,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(piece_type: PieceType, x: i32, y: i32) -> Self {
        Self {
            piece_type,
            offsets: piece_type.shape(),
            x,
            y,
        }
    }

    pub fn color(&self) -> Color {
        self.piece_type.color()
    }

    /// Quarter turn about the origin: (dx, dy) -> (-dy, dx).
    pub fn rotated(&self) -> Self {
        let mut rotated = self.clone();
        for offset in rotated.offsets.iter_mut() {
            *offset = (-offset.1, offset.0);
        }
        rotated
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Absolute grid coordinates of the four cells.
    pub fn get_blocks(&self) -> [(i32, i32); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shapes_have_four_distinct_cells() {
        for piece_type in PieceType::ALL {
            let shape = piece_type.shape();
            for (i, a) in shape.iter().enumerate() {
                for b in &shape[i + 1..] {
                    assert_ne!(a, b, "{:?} repeats a cell", piece_type);
                }
            }
        }
    }

    #[test]
    fn index_round_trips_and_wraps() {
        for (i, piece_type) in PieceType::ALL.iter().enumerate() {
            assert_eq!(piece_type.index(), i);
            assert_eq!(PieceType::from_index(i), *piece_type);
        }
        assert_eq!(PieceType::from_index(7), PieceType::I);
        assert_eq!(PieceType::from_index(13), PieceType::Z);
    }

    #[test]
    fn colors_are_one_per_type() {
        for (i, a) in PieceType::ALL.iter().enumerate() {
            for b in &PieceType::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn new_piece_copies_catalog_offsets() {
        let piece = Piece::new(PieceType::T, 6, 0);
        assert_eq!(piece.offsets, PieceType::T.shape());
        assert_eq!(piece.get_blocks(), [(7, 0), (6, 1), (7, 1), (8, 1)]);
    }

    #[test]
    fn rotation_maps_offsets_a_quarter_turn() {
        let piece = Piece::new(PieceType::I, 5, 5);
        let rotated = piece.rotated();
        assert_eq!(rotated.offsets, [(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!((rotated.x, rotated.y), (5, 5));
    }

    #[test]
    fn four_rotations_restore_offsets() {
        for piece_type in PieceType::ALL {
            let piece = Piece::new(piece_type, 3, 3);
            let full_turn = piece.rotated().rotated().rotated().rotated();
            assert_eq!(full_turn, piece);
        }
    }

    #[test]
    fn rotation_does_not_touch_catalog() {
        let _ = Piece::new(PieceType::S, 0, 0).rotated();
        assert_eq!(PieceType::S.shape(), [(1, 0), (2, 0), (0, 1), (1, 1)]);
    }
}
