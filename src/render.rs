//! Frame drawing. Reads the game state and only touches the apple's pulse phase.

use macroquad::prelude::*;

use crate::config::{
    ACCENT, APPLE_COLOR, APPLE_PULSE_AMPLITUDE, BG_BOTTOM, BG_TOP, CAPTION_FONT_SIZE, CELL,
    CHECKER_TINT, HUD_FONT_SIZE, OVERLAY_COLOR, SCREEN_H, SCREEN_W, SNAKE_COLOR, SNAKE_HEAD,
    TEXT_COLOR,
};
use crate::game::{Apple, Game, Grid, Position, SessionState, Snake};

const SEGMENT_CORNER: f32 = 4.0;
const GLOW_LAYERS: i32 = 2;

pub fn draw_frame(game: &mut Game) {
    game.advance_apple_phase();

    draw_background();
    draw_checkerboard(game.grid());
    draw_snake(game.snake());
    if let Some(apple) = game.apple() {
        draw_apple(apple);
    }
    draw_hud(game.score(), game.high_score());
    if let Some(caption) = overlay_caption(game.session()) {
        draw_overlay(caption);
    }
}

/// Linear blend from `BG_TOP` at row 0 to `BG_BOTTOM` at `height`.
pub fn gradient_color(y: f32, height: f32) -> Color {
    let t = (y / height).clamp(0.0, 1.0);
    Color::new(
        BG_TOP.r * (1.0 - t) + BG_BOTTOM.r * t,
        BG_TOP.g * (1.0 - t) + BG_BOTTOM.g * t,
        BG_TOP.b * (1.0 - t) + BG_BOTTOM.b * t,
        1.0,
    )
}

pub fn is_checker_cell(p: Position) -> bool {
    (p.x + p.y) % 2 == 0
}

pub fn apple_radius(phase: f32) -> f32 {
    ((CELL / 2 - 2) as f32 + phase.sin() * APPLE_PULSE_AMPLITUDE).trunc()
}

pub fn overlay_caption(session: SessionState) -> Option<&'static str> {
    match session {
        SessionState::NotStarted => Some("Press SPACE to Start"),
        SessionState::Paused => Some("PAUSED"),
        SessionState::GameOver => Some("GAME OVER"),
        SessionState::Running => None,
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EyeLayout {
    pub left: Vec2,
    pub right: Vec2,
    pub eye_radius: f32,
    pub pupil_radius: f32,
}

/// Eye placement for a head whose cell starts at pixel `(px, py)`.
pub fn eye_layout(px: i32, py: i32) -> EyeLayout {
    let eye_radius = CELL / 6;
    let y = py + CELL / 3;
    EyeLayout {
        left: vec2((px + CELL / 3) as f32, y as f32),
        right: vec2((px + CELL * 2 / 3 - eye_radius) as f32, y as f32),
        eye_radius: eye_radius as f32,
        pupil_radius: (CELL / 12) as f32,
    }
}

fn cell_origin(p: Position) -> (i32, i32) {
    (p.x * CELL, p.y * CELL)
}

fn draw_background() {
    for y in 0..SCREEN_H {
        let color = gradient_color(y as f32, SCREEN_H as f32);
        draw_rectangle(0.0, y as f32, SCREEN_W as f32, 1.0, color);
    }
}

fn draw_checkerboard(grid: Grid) {
    for cell in grid.cells().filter(|c| is_checker_cell(*c)) {
        let (px, py) = cell_origin(cell);
        draw_rectangle(px as f32, py as f32, CELL as f32, CELL as f32, CHECKER_TINT);
    }
}

fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w * 0.5).min(h * 0.5);
    draw_rectangle(x + r, y, w - 2.0 * r, h, color);
    draw_rectangle(x, y + r, r, h - 2.0 * r, color);
    draw_rectangle(x + w - r, y + r, r, h - 2.0 * r, color);
    for (cx, cy) in [
        (x + r, y + r),
        (x + w - r, y + r),
        (x + r, y + h - r),
        (x + w - r, y + h - r),
    ] {
        draw_circle(cx, cy, r, color);
    }
}

fn draw_snake(snake: &Snake) {
    // tail first so the head ends up on top
    let segments: Vec<Position> = snake.segments().collect();
    for (i, seg) in segments.iter().enumerate().rev() {
        let (px, py) = cell_origin(*seg);
        if i == 0 {
            draw_head(px, py);
        } else {
            draw_rounded_rect(px as f32, py as f32, CELL as f32, CELL as f32, SEGMENT_CORNER, SNAKE_COLOR);
        }
    }
}

fn draw_head(px: i32, py: i32) {
    let cx = (px + CELL / 2) as f32;
    let cy = (py + CELL / 2) as f32;
    for j in (1..=GLOW_LAYERS).rev() {
        let size = (CELL + j * 2) as f32;
        let alpha = (255 - 90 * j).max(0) as f32 / 255.0;
        let glow = Color::new(SNAKE_HEAD.r, SNAKE_HEAD.g, SNAKE_HEAD.b, alpha);
        draw_circle(cx, cy, size * 0.5, glow);
    }
    draw_rounded_rect(px as f32, py as f32, CELL as f32, CELL as f32, SEGMENT_CORNER, SNAKE_HEAD);

    let eyes = eye_layout(px, py);
    for eye in [eyes.left, eyes.right] {
        draw_circle(eye.x, eye.y, eyes.eye_radius, WHITE);
        draw_circle(eye.x, eye.y, eyes.pupil_radius, BLACK);
    }
}

fn draw_apple(apple: &Apple) {
    let (px, py) = cell_origin(apple.pos);
    let cx = (px + CELL / 2) as f32;
    let cy = (py + CELL / 2) as f32;
    let r = apple_radius(apple.phase);
    draw_circle(cx, cy, r, APPLE_COLOR);
    let offset = (r / 3.0).floor();
    draw_circle(cx - offset, cy - offset, (r / 6.0).floor().max(1.0), WHITE);
}

fn draw_hud(score: u32, high_score: u32) {
    let baseline = HUD_FONT_SIZE * 0.8;
    draw_text(&format!("Score: {}", score), 8.0, 8.0 + baseline, HUD_FONT_SIZE, TEXT_COLOR);
    draw_text(&format!("High: {}", high_score), 8.0, 32.0 + baseline, HUD_FONT_SIZE, TEXT_COLOR);
}

fn draw_overlay(caption: &str) {
    draw_rectangle(0.0, 0.0, SCREEN_W as f32, SCREEN_H as f32, OVERLAY_COLOR);
    let dims = measure_text(caption, None, CAPTION_FONT_SIZE, 1.0);
    let x = (SCREEN_W as f32 - dims.width) * 0.5;
    let top = (SCREEN_H / 2 - 24) as f32;
    draw_text(caption, x, top + dims.offset_y, CAPTION_FONT_SIZE as f32, ACCENT);
}
