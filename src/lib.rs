pub mod catalog;
pub mod config;
pub mod format;
pub mod models;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;
