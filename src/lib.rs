//! Foody - a terminal client for TheMealDB recipe API
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod logging;
pub mod models;
pub mod state;
pub mod ui;
