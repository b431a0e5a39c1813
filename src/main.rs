use macroquad::prelude::Conf;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn window_conf() -> Conf {
    snake_glow::app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    snake_glow::app::run().await;
}
