#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod infrastructure;
mod presentation;

use iced::{application, Size};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    infrastructure::LogHandle::new(global_constants::LOG_TAG_MAIN)
        .info(format!("Starting {}", global_constants::APPLICATION_TITLE));

    application(
        app::VideoSearchApp::build,
        app::VideoSearchApp::handle_update,
        app::VideoSearchApp::render_view,
    )
    .title(app::VideoSearchApp::window_title)
    .window_size(Size::new(900.0, 780.0))
    .run()
}
