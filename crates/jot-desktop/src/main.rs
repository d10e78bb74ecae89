//! Jot Desktop Application
//!
//! A small desktop client for a notes REST backend.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod services;
mod state;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jot_core=debug".parse().unwrap())
                .add_directive("jot_desktop=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Jot...");

    let window = WindowBuilder::new().with_title("Jot");
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
