//! GitBrowser Widgets — the Favorites grid and Shields stat home-screen widgets.
//!
//! This library crate exposes all modules for use by the widget host binary and integration tests.

pub mod app;
pub mod platform;
pub mod providers;
pub mod rpc_handler;
pub mod services;
pub mod types;
pub mod widgets;
