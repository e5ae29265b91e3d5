//! Hot-seat terminal client for grid combat.
//!
//! Both players share one [`runtime::GameSession`] and type commands into the
//! same terminal. The binary in `main.rs` only wires stdin to [`app::App`].
pub mod app;
pub mod command;
pub mod config;
pub mod logging;
pub mod render;

pub use app::{App, Flow};
pub use command::{Command, ParseCommandError};
pub use config::ClientConfig;
