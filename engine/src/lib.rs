mod board;
mod bot_controller;
mod config;
mod game_state;
pub mod logger;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::calculate_move;
pub use config::{
    ConfigContentProvider, ConfigManager, EngineConfig, FileContentConfigProvider, Validate,
};
pub use game_state::GameSession;
pub use logger::init_logger;
pub use session_rng::SessionRng;
pub use settings::{GameMode, GameSettings};
pub use types::{
    Cell, Difficulty, FirstMover, GameStatus, IllegalMove, Mark, NoLegalMove, Position,
    WinningLine,
};
pub use win_detector::{check_win, game_status, winning_line};
