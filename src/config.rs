use macroquad::prelude::Color;

// Grid and screen
pub const CELL: i32 = 24;
pub const GRID_W: i32 = 28;
pub const GRID_H: i32 = 20;
pub const SCREEN_W: i32 = GRID_W * CELL;
pub const SCREEN_H: i32 = GRID_H * CELL;

pub const FPS: u32 = 60;
/// Rendered frames per grid move.
pub const TICKS_PER_MOVE: u32 = 8;
/// Random samples tried before falling back to a scan for a free cell.
pub const MAX_SPAWN_ATTEMPTS: u32 = 1024;

pub const WINDOW_TITLE: &str = "Snake - Graphic Edition";
pub const HIGHSCORE_FILE: &str = "highscore.txt";

// Fonts
pub const HUD_FONT_SIZE: f32 = 20.0;
pub const CAPTION_FONT_SIZE: u16 = 48;

// Apple pulse
pub const APPLE_PHASE_STEP: f32 = 0.05;
pub const APPLE_PULSE_AMPLITUDE: f32 = 3.0;

// Palette
pub const BG_TOP: Color = rgb(30, 30, 30);
pub const BG_BOTTOM: Color = rgb(50, 50, 50);
pub const SNAKE_COLOR: Color = rgb(50, 200, 50);
pub const SNAKE_HEAD: Color = rgb(120, 255, 120);
pub const APPLE_COLOR: Color = rgb(255, 220, 60);
pub const TEXT_COLOR: Color = rgb(230, 230, 230);
pub const ACCENT: Color = rgb(200, 200, 255);
pub const CHECKER_TINT: Color = Color::new(0.0, 0.0, 0.0, 0.12);
pub const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 160.0 / 255.0);

// Color::from_rgba is not const
const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}
