//! Simple - a minimalist animated splash screen.
//!
//! One window, one view: title, subtitle, and a toggle button over a
//! background texture, with an ease-out entrance and a spring press.

use iced::window;
use iced::Size;
use log::info;

use simple_splash::{DisplayProfile, SplashApp};

fn main() -> iced::Result {
    let dev_mode = std::env::args().any(|arg| arg == "--dev" || arg == "-d");

    // Initialize logger with wgpu noise filtered out
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if dev_mode { "debug" } else { "info" }),
    )
    .filter_module("wgpu_hal", log::LevelFilter::Error)
    .filter_module("wgpu_core", log::LevelFilter::Error)
    .filter_module("naga", log::LevelFilter::Error)
    .init();

    let profile = DisplayProfile::from_args(std::env::args());
    info!("Simple starting, profile {profile}, dev mode: {dev_mode}");

    let (width, height) = profile.dimensions();
    let window_settings = window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(width, height)),
        max_size: Some(Size::new(width, height)),
        position: window::Position::Centered,
        resizable: false,
        decorations: true,
        visible: true,
        level: window::Level::Normal,
        ..Default::default()
    };

    iced::application(SplashApp::title, SplashApp::update, SplashApp::view)
        .subscription(SplashApp::subscription)
        .theme(SplashApp::theme)
        .window(window_settings)
        .run_with(move || SplashApp::new(profile))
}
