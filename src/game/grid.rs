use super::state::Position;

/// The finite N x N coordinate space the game is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i32 && pos.y >= 0 && pos.y < self.size as i32
    }

    /// Iterate over every cell of the grid
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Center cell, used as the spawn point on reset
    pub fn center(&self) -> Position {
        let mid = (self.size / 2) as i32;
        Position::new(mid, mid)
    }
}
