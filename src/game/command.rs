use crate::game::state::Game;

/// Everything the outside world can ask of a running game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Tick,
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

impl Game {
    pub fn on_tick(&mut self) {
        self.move_down();
    }

    pub fn on_move_left(&mut self) {
        self.move_left();
    }

    pub fn on_move_right(&mut self) {
        self.move_right();
    }

    pub fn on_rotate(&mut self) {
        self.rotate_piece();
    }

    pub fn on_soft_drop(&mut self) {
        self.move_down();
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Tick => self.on_tick(),
            Command::MoveLeft => self.on_move_left(),
            Command::MoveRight => self.on_move_right(),
            Command::Rotate => self.on_rotate(),
            Command::SoftDrop => self.on_soft_drop(),
        }
    }
}
