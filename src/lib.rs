//! Snakefall - a tick-based Snake simulation with a terminal frontend
//!
//! The `game` module is the deterministic simulation core and carries no I/O
//! dependency; `input`, `render`, `metrics` and `modes` are the thin
//! presentation adapters around it.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
