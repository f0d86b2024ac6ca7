//! Main application entry point.

use chromawheel_app::{App, DemoConfig};

fn main() {
    env_logger::init();
    log::info!("Starting Chromawheel");

    let config = DemoConfig::from_args(std::env::args());
    if let Err(e) = App::new(config).run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
