use std::thread;
use std::time::{Duration, Instant};

use macroquad::prelude::*;
use tracing::info;

use crate::config::{FPS, GRID_H, GRID_W, HIGHSCORE_FILE, SCREEN_H, SCREEN_W, WINDOW_TITLE};
use crate::game::{Game, Grid};
use crate::highscore::HighScoreStore;
use crate::input::poll_commands;
use crate::render::draw_frame;

pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_W,
        window_height: SCREEN_H,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

pub fn target_frame_duration(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

pub fn compute_cap_sleep(elapsed: Duration, target: Duration) -> Duration {
    target.saturating_sub(elapsed)
}

/// Sleeps off whatever is left of the frame budget.
pub struct FrameLimiter {
    target: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self { target: target_frame_duration(fps), last: Instant::now() }
    }

    pub fn wait(&mut self) {
        let sleep = compute_cap_sleep(self.last.elapsed(), self.target);
        if sleep > Duration::ZERO {
            thread::sleep(sleep);
        }
        self.last = Instant::now();
    }
}

pub async fn run() {
    prevent_quit();

    let grid = Grid::new(GRID_W, GRID_H);
    let mut game = Game::new(grid, HighScoreStore::new(HIGHSCORE_FILE));
    let mut limiter = FrameLimiter::new(FPS);
    info!(
        grid_w = grid.width,
        grid_h = grid.height,
        high_score = game.high_score(),
        fps = FPS,
        "startup"
    );

    loop {
        if is_quit_requested() {
            info!(high_score = game.high_score(), "shutdown_requested");
            game.persist_high_score();
            break;
        }

        for command in poll_commands() {
            game.handle_command(command);
        }
        game.step();
        draw_frame(&mut game);

        limiter.wait();
        next_frame().await;
    }
}
