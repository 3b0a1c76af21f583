use super::{
    collision::Rect,
    config::GameConfig,
    food::FoodSpawner,
    grid::Grid,
    state::{CollisionType, GameState, Position, Snake},
};

/// Events produced by one simulation tick, consumed by the driver and the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepResult {
    /// The head advanced this tick
    pub moved: bool,
    /// Cell where food was eaten, if any
    pub ate_food: Option<Position>,
    /// Collision that killed the snake this tick
    pub collision: Option<CollisionType>,
    /// Index of the segment frozen by the death animation this tick
    pub froze_segment: Option<usize>,
    /// The grid filled up and no more food can spawn
    pub won: bool,
}

/// The game engine: owns the configuration and the food spawner, and applies
/// the per-tick transition to a `GameState`.
pub struct GameEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            spawner: FoodSpawner::new(),
        }
    }

    /// Engine with a seeded spawner for reproducible games.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            spawner: FoodSpawner::with_seed(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: a lone head at the grid center with no direction
    /// assigned yet, and the configured number of food items.
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(self.config.grid_size);
        let snake = Snake::new(grid.center());
        let mut state = GameState::new(snake, Vec::new(), grid);
        for _ in 0..self.config.food_count {
            self.respawn_food(&mut state);
        }
        state
    }

    /// The one authoritative per-tick transition. Order is load-bearing:
    /// commit the buffered turn, run the death animation if dead, otherwise
    /// propagate the body, advance the head, then resolve collisions and
    /// food.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        state.snake.commit_turn();

        if !state.snake.alive {
            return Self::step_dead(state);
        }

        state.snake.propagate_tail();

        let next_head = state.snake.next_head();
        if !state.grid.contains(next_head) {
            // The exit position is never applied: the head keeps its last
            // in-bounds cell and the fall animation takes over.
            state.snake.kill(CollisionType::Wall);
            state.ticks += 1;
            return StepResult {
                collision: Some(CollisionType::Wall),
                ..Default::default()
            };
        }
        state.snake.set_head(next_head);

        if state.snake.hits_itself() {
            state.snake.kill(CollisionType::SelfCollision);
            state.ticks += 1;
            return StepResult {
                collision: Some(CollisionType::SelfCollision),
                ..Default::default()
            };
        }

        let ate_food = self.try_eat(state);
        state.ticks += 1;

        StepResult {
            moved: state.snake.direction.is_cardinal(),
            ate_food,
            won: state.won,
            ..Default::default()
        }
    }

    /// Post-death ticks: a boundary death drives the fall, any other death
    /// freezes one segment head-to-tail until the whole body is frozen.
    fn step_dead(state: &mut GameState) -> StepResult {
        if state.snake.is_falling() {
            state.snake.fall_step();
            return StepResult::default();
        }
        StepResult {
            froze_segment: state.snake.freeze_next(),
            ..Default::default()
        }
    }

    /// Head/food overlap check; on a hit the snake grows at the food's
    /// former cell and a replacement is spawned.
    fn try_eat(&mut self, state: &mut GameState) -> Option<Position> {
        let head = Rect::unit(state.snake.head());
        let idx = state
            .foods
            .iter()
            .position(|f| head.overlaps(&Rect::unit(*f)))?;

        let cell = state.foods.remove(idx);
        state.snake.grow(cell);
        state.score += 1;
        self.respawn_food(state);
        Some(cell)
    }

    fn respawn_food(&mut self, state: &mut GameState) {
        let occupied: Vec<Position> = state
            .snake
            .segments
            .iter()
            .map(|s| s.position)
            .collect();
        match self.spawner.spawn(&state.grid, &occupied, &state.foods) {
            Ok(cell) => state.foods.push(cell),
            // Full grid: the player has won, stop spawning food.
            Err(_) => state.won = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::state::Segment;

    fn small_engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::small(), 42)
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
        let state = engine.reset();

        assert!(state.snake.alive);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction, Direction::None);
        assert_eq!(state.foods.len(), 1);
        assert_eq!(state.score, 0);
        assert!(!state.snake.occupies(state.foods[0]));
    }

    #[test]
    fn test_no_direction_means_no_movement() {
        let mut engine = small_engine();
        let mut state = engine.reset();
        let head = state.snake.head();

        let result = engine.step(&mut state);

        assert!(!result.moved);
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = small_engine();
        let mut state = engine.reset();
        let head = state.snake.head();
        state.foods = vec![Position::new(0, 0)];

        state.snake.set_direction(Direction::Right);
        let result = engine.step(&mut state);

        assert!(result.moved);
        assert_eq!(state.snake.head(), head.moved_by(1, 0));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = small_engine();
        let snake = Snake::new(Position::new(0, 0));
        let mut state = GameState::new(snake, vec![Position::new(2, 0)], Grid::new(5));

        state.snake.set_direction(Direction::Right);
        engine.step(&mut state);
        assert_eq!(state.snake.head(), Position::new(1, 0));
        assert_eq!(state.snake.len(), 1);

        let result = engine.step(&mut state);

        assert_eq!(result.ate_food, Some(Position::new(2, 0)));
        assert_eq!(state.snake.head(), Position::new(2, 0));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.segments[1].position, Position::new(2, 0));
        assert_eq!(state.snake.segments[1].growth_delay, 2);
        assert_eq!(state.score, 1);

        // A replacement was spawned somewhere free
        assert_eq!(state.foods.len(), 1);
        assert!(!state.snake.occupies(state.foods[0]));
    }

    #[test]
    fn test_wall_collision_enters_falling() {
        let mut engine = small_engine();
        let snake = Snake::with_body(
            vec![Position::new(0, 2), Position::new(1, 2)],
            Direction::Left,
        );
        let mut state = GameState::new(snake, vec![Position::new(4, 4)], Grid::new(5));

        let result = engine.step(&mut state);

        assert_eq!(result.collision, Some(CollisionType::Wall));
        assert!(!state.snake.alive);
        assert!(state.snake.is_falling());
        // The out-of-bounds position was never applied
        assert_eq!(state.snake.head(), Position::new(0, 2));
        assert!(state.grid.contains(state.snake.head()));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 9);
        // Straight body of 5 heading right; a tight Down-Left-Up hook turns
        // the head back into the body.
        let snake = Snake::with_body(
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
                Position::new(2, 5),
                Position::new(1, 5),
            ],
            Direction::Right,
        );
        let mut state = GameState::new(snake, vec![Position::new(9, 9)], Grid::new(10));

        state.snake.set_direction(Direction::Down);
        assert!(engine.step(&mut state).collision.is_none());
        state.snake.set_direction(Direction::Left);
        assert!(engine.step(&mut state).collision.is_none());
        state.snake.set_direction(Direction::Up);
        let result = engine.step(&mut state);

        assert_eq!(result.collision, Some(CollisionType::SelfCollision));
        assert!(!state.snake.alive);
        assert!(!state.snake.is_falling());
    }

    #[test]
    fn test_reversal_does_not_change_direction() {
        let mut engine = small_engine();
        let snake = Snake::with_body(
            vec![Position::new(2, 2), Position::new(1, 2)],
            Direction::Right,
        );
        let mut state = GameState::new(snake, vec![Position::new(0, 0)], Grid::new(5));

        state.snake.set_direction(Direction::Left);
        engine.step(&mut state);

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position::new(3, 2));
    }

    #[test]
    fn test_death_freezes_one_segment_per_tick() {
        let mut engine = small_engine();
        let snake = Snake::with_body(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(0, 2),
            ],
            Direction::Right,
        );
        let mut state = GameState::new(snake, vec![Position::new(4, 4)], Grid::new(5));
        state.snake.kill(CollisionType::SelfCollision);

        assert_eq!(engine.step(&mut state).froze_segment, Some(0));
        assert_eq!(engine.step(&mut state).froze_segment, Some(1));
        assert_eq!(engine.step(&mut state).froze_segment, Some(2));
        assert!(state.snake.segments.iter().all(|s| s.is_frozen()));

        // Fully frozen: stepping is a no-op
        let before = state.clone();
        let result = engine.step(&mut state);
        assert_eq!(result.froze_segment, None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_falling_drives_drop_without_freezing() {
        let mut engine = small_engine();
        let snake = Snake::with_body(
            vec![Position::new(0, 2), Position::new(1, 2)],
            Direction::Left,
        );
        let mut state = GameState::new(snake, vec![Position::new(4, 4)], Grid::new(5));

        engine.step(&mut state); // exits the grid
        assert!(state.snake.is_falling());

        engine.step(&mut state);
        engine.step(&mut state);

        assert_eq!(state.snake.fall_offset, -2.0);
        assert!(state.snake.segments.iter().all(|s| s.is_active()));
    }

    #[test]
    fn test_dead_ticks_do_not_advance_counters() {
        let mut engine = small_engine();
        let snake = Snake::with_body(
            vec![Position::new(2, 2), Position::new(1, 2)],
            Direction::Right,
        );
        let mut state = GameState::new(snake, vec![Position::new(0, 0)], Grid::new(5));
        state.snake.kill(CollisionType::SelfCollision);
        let ticks = state.ticks;

        engine.step(&mut state);
        assert_eq!(state.ticks, ticks);
    }

    #[test]
    fn test_filling_the_grid_wins() {
        let mut engine = GameEngine::with_seed(GameConfig::new(2), 5);
        // 2x2 grid; three cells held by the head and two pending segments,
        // the last free cell holds the food.
        let mut snake = Snake::with_body(vec![Position::new(0, 1)], Direction::Up);
        snake.segments.push(Segment {
            position: Position::new(1, 1),
            growth_delay: 9,
        });
        snake.segments.push(Segment {
            position: Position::new(1, 0),
            growth_delay: 9,
        });
        snake.segments.push(Segment {
            position: Position::new(0, 1),
            growth_delay: 9,
        });
        let mut state = GameState::new(snake, vec![Position::new(0, 0)], Grid::new(2));

        let result = engine.step(&mut state);

        assert_eq!(result.ate_food, Some(Position::new(0, 0)));
        assert!(result.won);
        assert!(state.won);
        assert!(state.foods.is_empty());
        assert!(state.snake.alive);
    }

    #[test]
    fn test_reset_on_one_cell_grid_wins_immediately() {
        let mut engine = GameEngine::with_seed(GameConfig::new(1), 0);
        let state = engine.reset();

        assert!(state.won);
        assert!(state.foods.is_empty());
    }
}
