//! Terminal client for an independent news publication.
//!
//! The crate is split into a state core (store, session, router, theme) and
//! a ratatui front end driven by a `tokio::select!` event loop. Simulated
//! network latency (search, sign-in, newsletter) runs on spawned tasks that
//! are cancellable by aborting their handles.

pub mod app;
pub mod auth;
pub mod config;
pub mod route;
pub mod search;
pub mod session;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;
