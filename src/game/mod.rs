pub mod apple;
pub mod snake;
pub mod types;

use macroquad::rand::gen_range;
use tracing::{debug, info};

use crate::config::{MAX_SPAWN_ATTEMPTS, TICKS_PER_MOVE};
use crate::highscore::{HighScore, HighScoreStore};
use crate::input::Command;

pub use apple::Apple;
pub use snake::Snake;
pub use types::{Direction, Grid, Position};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfCollision,
    /// No free cell left for an apple.
    BoardFull,
}

/// All game and session state. Input, simulation and rendering each take it by reference.
pub struct Game {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    apple: Option<Apple>,
    session: SessionState,
    frame_counter: u32,
    ticks_per_move: u32,
    high_score: HighScore,
    store: HighScoreStore,
}

impl Game {
    pub fn new(grid: Grid, store: HighScoreStore) -> Self {
        let high_score = HighScore::new(store.load());
        let center = grid.center();
        let mut game = Self {
            grid,
            snake: Snake::new(center),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            apple: None,
            session: SessionState::NotStarted,
            frame_counter: 0,
            ticks_per_move: TICKS_PER_MOVE,
            high_score,
            store,
        };
        game.reset();
        game
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center());
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.spawn_apple();
        self.session = SessionState::NotStarted;
        self.frame_counter = 0;
    }

    /// Places a new apple on a free cell. Returns false when the snake covers the whole grid.
    pub fn spawn_apple(&mut self) -> bool {
        let cell = self.random_free_cell().or_else(|| self.first_free_cell());
        self.apple = cell.map(Apple::new);
        self.apple.is_some()
    }

    fn random_free_cell(&self) -> Option<Position> {
        if self.grid.cell_count() == 0 {
            return None;
        }
        (0..MAX_SPAWN_ATTEMPTS)
            .map(|_| {
                Position::new(
                    gen_range(0, self.grid.width),
                    gen_range(0, self.grid.height),
                )
            })
            .find(|p| !self.snake.occupies(*p))
    }

    fn first_free_cell(&self) -> Option<Position> {
        self.grid.cells().find(|p| !self.snake.occupies(*p))
    }

    /// Called once per rendered frame; moves the snake every `ticks_per_move` running frames.
    pub fn step(&mut self) {
        if self.session != SessionState::Running {
            return;
        }
        self.frame_counter += 1;
        if self.frame_counter < self.ticks_per_move {
            return;
        }
        self.frame_counter = 0;
        self.advance();
    }

    fn advance(&mut self) {
        self.direction = self.pending_direction;
        let next = self.snake.head().step(self.direction);

        if !self.grid.contains(next) {
            self.end_game(DeathCause::Wall);
            return;
        }
        if self.snake.occupies(next) {
            self.end_game(DeathCause::SelfCollision);
            return;
        }

        self.snake.push_head(next);
        if self.apple.is_some_and(|a| a.pos == next) {
            debug!(score = self.score(), "apple eaten");
            if !self.spawn_apple() {
                self.end_game(DeathCause::BoardFull);
            }
        } else {
            self.snake.drop_tail();
        }
    }

    fn end_game(&mut self, cause: DeathCause) {
        self.session = SessionState::GameOver;
        let score = self.score();
        info!(score, ?cause, "game over");
        if self.high_score.submit(score) {
            info!(high_score = score, "new high score");
            self.store.save(score);
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => {
                // Guard against the direction of the last move, not a pending turn.
                if !direction.is_opposite(self.direction) {
                    self.pending_direction = direction;
                }
            }
            Command::Action => {
                let next = match self.session {
                    SessionState::NotStarted => SessionState::Running,
                    SessionState::GameOver => {
                        self.reset();
                        SessionState::Running
                    }
                    SessionState::Running => SessionState::Paused,
                    SessionState::Paused => SessionState::Running,
                };
                debug!(from = ?self.session, to = ?next, "session transition");
                self.session = next;
            }
        }
    }

    /// Writes the current best to disk; used on quit.
    pub fn persist_high_score(&self) {
        self.store.save(self.high_score.get());
    }

    pub fn advance_apple_phase(&mut self) {
        if let Some(apple) = self.apple.as_mut() {
            apple.advance_phase();
        }
    }

    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.get()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn apple(&self) -> Option<&Apple> {
        self.apple.as_ref()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn ticks_per_move(&self) -> u32 {
        self.ticks_per_move
    }

    #[cfg(test)]
    fn place(&mut self, segments: &[Position], apple: Option<Position>) {
        self.snake = Snake::from_segments(segments);
        self.apple = apple.map(Apple::new);
    }

    #[cfg(test)]
    fn tick(&mut self) {
        for _ in 0..self.ticks_per_move {
            self.step();
        }
    }
}
