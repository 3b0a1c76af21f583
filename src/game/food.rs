use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use super::grid::Grid;
use super::state::Position;

/// The grid has no free cell left to place food on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free cell left to spawn food")]
pub struct NoSpaceError;

/// Picks food cells uniformly at random from the free cells of the grid.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded spawner for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one free cell: every grid cell minus the snake-occupied cells and
    /// the food already on the board. Pure selection; the caller registers
    /// the returned cell.
    pub fn spawn(
        &mut self,
        grid: &Grid,
        occupied: &[Position],
        existing_food: &[Position],
    ) -> Result<Position, NoSpaceError> {
        let free: Vec<Position> = grid
            .cells()
            .filter(|c| !occupied.contains(c) && !existing_food.contains(c))
            .collect();
        free.choose(&mut self.rng).copied().ok_or(NoSpaceError)
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
