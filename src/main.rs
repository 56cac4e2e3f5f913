mod backend;
mod frontend;
mod utils;

use crate::backend::utils::config::{AppConfig, ConfigManager};
use crate::frontend::app::{App, Setup};
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use env_logger::Env;

/// Data directory and config for a normal desktop run.
fn load_setup() -> anyhow::Result<Setup> {
    let data_dir = utils::dirs::app_dir().context("Could not determine data directory")?;
    let config = ConfigManager::load(&data_dir)
        .with_context(|| format!("Could not load config from {}", data_dir.display()))?
        .into_config();

    Ok(Setup {
        config,
        data_dir,
        persist_preferences: true,
    })
}

fn main() {
    // Logging setup
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let setup = load_setup().unwrap_or_else(|e| {
        log::warn!("{e:#}; running with defaults and no saved preferences");
        Setup {
            config: AppConfig::default(),
            data_dir: std::env::temp_dir().join("CampusPortal"),
            persist_preferences: false,
        }
    });

    let size = LogicalSize::new(setup.config.ui.window_width, setup.config.ui.window_height);
    frontend::app::install(setup);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Campus Portal")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
