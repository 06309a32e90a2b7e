//! Terminal User Interface module.
//!
//! This module provides the TUI for the news client, including:
//! - Main event loop (`run`)
//! - Input handling for pages, overlays, and forms
//! - Rendering for home, article, category, and admin pages
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop, terminal management, task spawning
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Page rendering dispatch
//! - `helpers` - Shared utility functions
//! - `home` - Front page widget
//! - `article` - Article detail widget
//! - `category` - Category page widget
//! - `admin` - Admin table and edit form widgets
//! - `modals` - Search, auth, and bookmarks overlays
//! - `status` - Status bar widget

mod admin;
mod article;
mod category;
mod events;
mod helpers;
mod home;
mod input;
mod loop_runner;
mod modals;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
