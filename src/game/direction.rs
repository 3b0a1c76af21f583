/// Direction the snake is heading.
///
/// `None` means no direction has been assigned yet (only valid before the
/// first move). `Falling` is the terminal visual state entered when the snake
/// leaves the grid; it is never a movable direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    None,
    Falling,
}

/// Movement axis of a cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Returns true for the four movable directions.
    pub fn is_cardinal(&self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Right | Direction::Down | Direction::Left
        )
    }

    /// The axis this direction moves along, if it moves at all.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Direction::Up | Direction::Down => Some(Axis::Vertical),
            Direction::Left | Direction::Right => Some(Axis::Horizontal),
            Direction::None | Direction::Falling => None,
        }
    }

    /// True when both directions move and their axes differ.
    ///
    /// This is the turn filter: a snake heading along one axis may only turn
    /// onto the other axis, which rules out 180-degree reversals and
    /// same-direction no-ops in one test.
    pub fn is_perpendicular_to(&self, other: Direction) -> bool {
        match (self.axis(), other.axis()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::None | Direction::Falling => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert!(Direction::Up.is_cardinal());
        assert!(Direction::Left.is_cardinal());
        assert!(!Direction::None.is_cardinal());
        assert!(!Direction::Falling.is_cardinal());
    }

    #[test]
    fn test_perpendicular() {
        assert!(Direction::Up.is_perpendicular_to(Direction::Left));
        assert!(Direction::Up.is_perpendicular_to(Direction::Right));
        assert!(Direction::Right.is_perpendicular_to(Direction::Down));

        // Same axis is not a turn
        assert!(!Direction::Up.is_perpendicular_to(Direction::Down));
        assert!(!Direction::Up.is_perpendicular_to(Direction::Up));
        assert!(!Direction::Left.is_perpendicular_to(Direction::Right));
    }

    #[test]
    fn test_non_moving_directions_never_perpendicular() {
        assert!(!Direction::None.is_perpendicular_to(Direction::Up));
        assert!(!Direction::Up.is_perpendicular_to(Direction::None));
        assert!(!Direction::Falling.is_perpendicular_to(Direction::Left));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::None.delta(), (0, 0));
        assert_eq!(Direction::Falling.delta(), (0, 0));
    }
}
