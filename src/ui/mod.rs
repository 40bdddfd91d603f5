//! GUI module for Blind Omok
//!
//! This module provides a native Rust GUI using egui/eframe. Stones show up
//! as anonymous gray discs until the game ends.

mod app;
mod board_view;
mod theme;

pub use app::OmokApp;
