use crate::game::piece::PieceType;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceType),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Integer encoding: 0 for empty, type index + 1 for a locked block.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(piece_type) => piece_type.index() as u8 + 1,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            v if (v as usize) <= PieceType::ALL.len() => {
                Some(Cell::Filled(PieceType::from_index(v as usize - 1)))
            }
            _ => None,
        }
    }
}

/// Row-major grid of locked cells. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// `None` when (x, y) is off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns false, leaving the board untouched, when (x, y) is off the board.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Cell::Empty)
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Drops every full row, shifting the rows above it down and backfilling
    /// the top with empty rows. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut write_row = self.height;

        // Walk upward, copying each surviving row to the lowest free slot
        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                continue;
            }
            write_row -= 1;
            if read_row != write_row {
                self.cells
                    .copy_within(read_row * width..(read_row + 1) * width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(Cell::Empty);
        write_row
    }
}
