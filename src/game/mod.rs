//! Core game logic module
//!
//! Deterministic tick-based Snake simulation with no I/O or rendering
//! dependencies. Input is buffered through `Snake::set_direction` and the
//! driver applies exactly one `GameEngine::step` per tick.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use collision::Rect;
pub use config::GameConfig;
pub use direction::{Axis, Direction};
pub use engine::{GameEngine, StepResult};
pub use food::{FoodSpawner, NoSpaceError};
pub use grid::Grid;
pub use state::{CollisionType, GameState, Position, Segment, Snake, FROZEN};
