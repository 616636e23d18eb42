//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Wires config, the host window and the view manager together.

mod core;
mod dispatch;
mod event_handler;
mod host;
mod init;
mod keys;
mod polling;
mod shutdown;
mod title;
mod types;

pub use core::ClassdockApp;
