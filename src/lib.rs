//! ctfdash: a terminal dashboard for the ICEDTEA CTF event bot.
//!
//! The crate is split the same way the screens are: `api` talks to the bot's
//! REST backend, `services` runs those calls off the UI thread, `state` holds
//! one state machine per section, `handlers` maps keys onto state changes and
//! `ui` draws the whole thing with ratatui.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod services;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
