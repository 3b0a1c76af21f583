use super::collision::Rect;
use super::direction::Direction;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Marker value for a permanently frozen segment (death animation).
pub const FROZEN: i32 = -1;

/// One cell of the snake body.
///
/// `growth_delay` drives the grow/death sequencing:
/// - `0`: active, follows the segment ahead of it every tick;
/// - `> 0`: newly grown, pinned in place and decremented each tick until it
///   joins the moving chain;
/// - `FROZEN` (-1): never moves again, set one segment per tick after death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    pub growth_delay: i32,
}

impl Segment {
    pub fn active(position: Position) -> Self {
        Self {
            position,
            growth_delay: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.growth_delay == 0
    }

    pub fn is_frozen(&self) -> bool {
        self.growth_delay == FROZEN
    }

    pub fn rect(&self) -> Rect {
        Rect::unit(self.position)
    }
}

/// Type of collision that kills the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// The snake: ordered segments (head at index 0) plus direction state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub segments: Vec<Segment>,
    /// Committed direction, applied every tick
    pub direction: Direction,
    /// Buffered turn request, committed at the start of the next tick
    pub next_direction: Direction,
    pub alive: bool,
    /// Vertical drop offset, driven only in the post-boundary-death fall
    pub fall_offset: f32,
}

impl Snake {
    /// A fresh snake: a single head segment with no direction assigned yet.
    pub fn new(head: Position) -> Self {
        Self {
            segments: vec![Segment::active(head)],
            direction: Direction::None,
            next_direction: Direction::None,
            alive: true,
            fall_offset: 0.0,
        }
    }

    /// Build a snake from explicit body cells (head first), all active.
    pub fn with_body(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake body cannot be empty");
        Self {
            segments: body.into_iter().map(Segment::active).collect(),
            direction,
            next_direction: Direction::None,
            alive: true,
            fall_offset: 0.0,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0].position
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True while the post-boundary-death drop is playing.
    pub fn is_falling(&self) -> bool {
        !self.alive && self.direction == Direction::Falling
    }

    /// Request a turn. Ignored when dead or for non-cardinal input.
    ///
    /// A lone head turns immediately (it has not committed to an axis yet).
    /// Otherwise the request is buffered and only if it is perpendicular to
    /// the committed direction; parallel and reversing requests are dropped.
    /// Repeated accepted requests within one tick overwrite each other, so
    /// the last perpendicular call before the next step wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.alive || !requested.is_cardinal() {
            return;
        }
        if self.segments.len() == 1 {
            self.direction = requested;
            return;
        }
        if requested.is_perpendicular_to(self.direction) {
            self.next_direction = requested;
        }
    }

    /// Commit the buffered turn, if any. First thing each tick.
    pub fn commit_turn(&mut self) {
        if self.next_direction != Direction::None {
            self.direction = self.next_direction;
            self.next_direction = Direction::None;
        }
    }

    /// Tail-to-head propagation: each active segment steps into the cell of
    /// the segment ahead of it; pending-growth segments burn one tick of
    /// their delay instead and stay put.
    pub fn propagate_tail(&mut self) {
        for i in (1..self.segments.len()).rev() {
            if self.segments[i].is_active() {
                self.segments[i].position = self.segments[i - 1].position;
            } else {
                self.segments[i].growth_delay -= 1;
            }
        }
    }

    /// Where the head would land this tick.
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.direction)
    }

    pub fn set_head(&mut self, pos: Position) {
        self.segments[0].position = pos;
    }

    /// Head vs. body, segments 3+ only (closer ones cannot overlap the head
    /// under unit-step movement), and only segments already in the moving
    /// chain: a pending segment sits on the head's trail and must not
    /// trigger a false collision before it integrates.
    pub fn hits_itself(&self) -> bool {
        let head = self.segments[0].rect();
        self.segments
            .iter()
            .skip(3)
            .filter(|s| s.is_active())
            .any(|s| head.overlaps(&s.rect()))
    }

    /// Append a just-eaten cell to the body. The new segment waits for the
    /// whole chain ahead of it to pass before it starts following.
    pub fn grow(&mut self, at: Position) {
        let delay = (self.segments.len() + 1) as i32;
        self.segments.push(Segment {
            position: at,
            growth_delay: delay,
        });
    }

    /// Kill the snake. Segments still waiting out their growth delay never
    /// integrated and are discarded; a wall death enters the falling state.
    pub fn kill(&mut self, cause: CollisionType) {
        self.alive = false;
        self.segments.retain(|s| s.is_active());
        self.next_direction = Direction::None;
        if cause == CollisionType::Wall {
            self.direction = Direction::Falling;
        }
    }

    /// Freeze the first not-yet-frozen segment, head-to-tail. Returns the
    /// frozen index, or None once the whole body is frozen.
    pub fn freeze_next(&mut self) -> Option<usize> {
        let idx = self.segments.iter().position(|s| !s.is_frozen())?;
        self.segments[idx].growth_delay = FROZEN;
        Some(idx)
    }

    /// One tick of the post-boundary-death drop.
    pub fn fall_step(&mut self) {
        self.fall_offset -= 1.0;
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|s| s.position == pos)
    }
}

/// Complete game state, owned by the driver and mutated only by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub foods: Vec<Position>,
    pub grid: Grid,
    pub score: u32,
    pub ticks: u64,
    /// Set when the grid fills up and no food can spawn
    pub won: bool,
}

impl GameState {
    pub fn new(snake: Snake, foods: Vec<Position>, grid: Grid) -> Self {
        Self {
            snake,
            foods,
            grid,
            score: 0,
            ticks: 0,
            won: false,
        }
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.snake.occupies(pos) || self.foods.contains(&pos)
    }
}
