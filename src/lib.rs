pub mod app;
pub mod config;
pub mod game;
pub mod highscore;
pub mod input;
pub mod render;
