use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Simulation ticks per second (game speed, independent of render rate)
    pub ticks_per_second: u32,
    /// Number of food items kept on the grid at once
    pub food_count: usize,
    /// Delay between death and automatic reset, in milliseconds
    pub reset_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            ticks_per_second: 8,
            food_count: 1,
            reset_delay_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(5)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30)
    }
}
