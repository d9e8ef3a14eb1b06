pub const BOARD_WIDTH: usize = 15;
pub const BOARD_HEIGHT: usize = 25;

// Gravity tick interval (in milliseconds)
pub const TICK_INTERVAL: u64 = 500;

// Smallest board on which every piece can spawn and a row can clear
pub const MIN_BOARD_WIDTH: usize = 6;
pub const MIN_BOARD_HEIGHT: usize = 4;
