//! NewsLens — Dioxus-powered analyze page with a sliding history drawer.

use std::sync::Mutex;

use dioxus::prelude::*;
use tracing::error;

mod app;
mod search;
mod sidebar;
mod state;

use app::App;
use state::StartupState;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<StartupState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("newslens_core=info".parse().unwrap())
                .add_directive("newslens_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load config + history at startup (blocking), store in Mutex until the first render
    let initial_state = match StartupState::from_cwd() {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Could not load project");
            std::process::exit(1);
        }
    };
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((17, 24, 39, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("NewsLens")
                            .with_inner_size(LogicalSize::new(1200.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
