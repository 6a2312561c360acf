use crate::board::Board;
use crate::bot_controller::calculate_move;
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::{GameMode, GameSettings};
use crate::types::{Difficulty, FirstMover, GameStatus, Mark, Position};

// One game, owned by the caller. The session tracks whose turn it is;
// the board itself does not.
pub struct GameSession {
    settings: GameSettings,
    board: Board,
    current_mark: Mark,
    bot: Option<(Mark, Difficulty)>,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, SessionRng::from_random())
    }

    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, SessionRng::new(seed))
    }

    fn with_rng(settings: GameSettings, mut rng: SessionRng) -> Self {
        let bot = resolve_bot(&settings.mode, &mut rng);
        Self {
            settings,
            board: Board::new(),
            current_mark: Mark::X,
            bot,
            rng,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn bot_mark(&self) -> Option<Mark> {
        self.bot.map(|(mark, _)| mark)
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.bot_mark() == Some(self.current_mark) && self.status() == GameStatus::InProgress
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("It is the bot's turn".to_string());
        }
        self.board
            .place(pos, self.current_mark)
            .map_err(|e| e.to_string())?;
        self.finish_move();
        Ok(())
    }

    pub fn play_bot_turn(&mut self) -> Result<Position, String> {
        let Some((bot_mark, difficulty)) = self.bot else {
            return Err("No bot in a pass-and-play game".to_string());
        };
        if self.status().is_terminal() {
            return Err("Game is already over".to_string());
        }
        if bot_mark != self.current_mark {
            return Err("It is not the bot's turn".to_string());
        }

        let pos = calculate_move(difficulty, &self.board, bot_mark, &mut self.rng)
            .map_err(|e| e.to_string())?;
        self.board.place(pos, bot_mark).map_err(|e| e.to_string())?;
        log!("Bot ({}) placed at ({}, {})", bot_mark, pos.row, pos.col);
        self.finish_move();
        Ok(pos)
    }

    fn finish_move(&mut self) {
        match self.status() {
            GameStatus::InProgress => {
                self.current_mark = self.current_mark.opponent();
            }
            GameStatus::Won(line) => {
                log!(
                    "{} wins, line ({}, {}) to ({}, {})",
                    line.mark,
                    line.start.row,
                    line.start.col,
                    line.end.row,
                    line.end.col
                );
            }
            GameStatus::Draw => {
                log!("Game ended in a draw");
            }
        }
    }

    // The first-mover coin is flipped again when the mode asks for it.
    pub fn restart(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.bot = resolve_bot(&self.settings.mode, &mut self.rng);
    }
}

fn resolve_bot(mode: &GameMode, rng: &mut SessionRng) -> Option<(Mark, Difficulty)> {
    match mode {
        GameMode::PassAndPlay => None,
        GameMode::VersusBot {
            difficulty,
            first_mover,
        } => {
            let bot_mark = match first_mover {
                FirstMover::Human => Mark::O,
                FirstMover::Bot => Mark::X,
                FirstMover::Random => {
                    if rng.random_bool() {
                        Mark::X
                    } else {
                        Mark::O
                    }
                }
            };
            Some((bot_mark, *difficulty))
        }
    }
}
