pub mod api;
pub mod background;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod formatting;
pub mod layout_constants;
pub mod model;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;

#[cfg(any(test, feature = "development"))]
pub mod fixtures;
