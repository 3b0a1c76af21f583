use super::state::Position;

/// Axis-aligned box in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// A 1x1 box covering a single cell.
    pub fn unit(pos: Position) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: 1,
            h: 1,
        }
    }

    /// Strict overlap test: boxes that merely touch edges do not collide.
    ///
    /// Shared by self-collision and food-eating detection.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x + self.w > other.x
            && self.x < other.x + other.w
            && self.y + self.h > other.y
            && self.y < other.y + other.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_cell_overlaps() {
        let a = Rect::unit(Position::new(3, 3));
        let b = Rect::unit(Position::new(3, 3));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::unit(Position::new(3, 3));
        assert!(!a.overlaps(&Rect::unit(Position::new(4, 3))));
        assert!(!a.overlaps(&Rect::unit(Position::new(2, 3))));
        assert!(!a.overlaps(&Rect::unit(Position::new(3, 4))));
        assert!(!a.overlaps(&Rect::unit(Position::new(3, 2))));
    }

    #[test]
    fn test_larger_boxes() {
        let a = Rect {
            x: 0,
            y: 0,
            w: 3,
            h: 3,
        };
        assert!(a.overlaps(&Rect::unit(Position::new(2, 2))));
        assert!(!a.overlaps(&Rect::unit(Position::new(3, 0))));
        assert!(!a.overlaps(&Rect::unit(Position::new(0, 3))));
    }
}
