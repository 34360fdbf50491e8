#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default)]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use druid::AppLauncher;
use env_logger::{Builder, Env};
use webapi::WebApi;

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
};

const ENV_LOG: &str = "TOUR_LOG";
const ENV_LOG_STYLE: &str = "TOUR_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration
    let config = Config::load().unwrap_or_default();
    if config.offline {
        log::info!("offline mode, images and map tiles will not be fetched");
    }

    WebApi::new(
        Config::proxy().as_deref(),
        config.image_cache_size,
        config.offline,
    )
    .install_as_global();

    let window = ui::main_window(&config);
    let launched = AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(Delegate::new())
        .launch(AppState::default());
    if let Err(err) = launched {
        log::error!("failed to launch the application: {}", err);
    }
}
