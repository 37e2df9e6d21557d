use super::{
    action::{Action, Direction},
    config::{ConfigError, GameConfig},
    food::place_food,
    state::{GameState, Position, Snake},
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Information about a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the new head landed on the snake's own body
    pub self_collision: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game is over
    pub game_over: bool,
    /// Score after the step
    pub score: u32,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine seeded from the OS entropy source
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose games replay identically for the same seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let grid_width = self.config.grid_width();
        let grid_height = self.config.grid_height();
        // Validation caps each side well inside i32.
        let centre = |cells: usize| i32::try_from(cells / 2).unwrap_or(0);
        let head = Position::new(centre(grid_width), centre(grid_height));

        let direction = *Direction::INITIAL_CHOICES
            .choose(&mut self.rng)
            .unwrap_or(&Direction::Right);

        let snake = Snake::new(head, direction, self.config.initial_snake_length);

        // A validated grid always has room beside the starting snake.
        let food = place_food(&mut self.rng, grid_width, grid_height, &snake).unwrap_or(head);

        info!(
            "new game on {}x{} grid, heading {:?}, food at ({}, {})",
            grid_width, grid_height, direction, food.x, food.y
        );

        GameState::new(snake, food, grid_width, grid_height)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                game_over: true,
                score: state.score,
                info: StepInfo {
                    ate_food: false,
                    self_collision: false,
                },
            };
        }

        if let Action::Move(new_direction) = action {
            state.snake.direction = new_direction;
        }

        let new_head = state.snake.head().wrapped_step(
            state.snake.direction,
            state.grid_width,
            state.grid_height,
        );

        state.snake.push_head(new_head);

        // The head is in place but the tail has not moved yet, so the game
        // over snake is one segment longer than before this step.
        if state.snake.collides_with_body(new_head) {
            state.is_alive = false;
            state.steps += 1;
            info!(
                "game over after {} steps: self collision at ({}, {}), score {}",
                state.steps, new_head.x, new_head.y, state.score
            );

            return StepResult {
                game_over: true,
                score: state.score,
                info: StepInfo {
                    ate_food: false,
                    self_collision: true,
                },
            };
        }

        let ate_food = new_head == state.food;

        if ate_food {
            state.score += 1;
            match place_food(
                &mut self.rng,
                state.grid_width,
                state.grid_height,
                &state.snake,
            ) {
                Some(food) => state.food = food,
                None => warn!("snake fills the grid, no free cell left for food"),
            }
            debug!(
                "ate food at world {:?}, score {}, next food at world {:?}",
                new_head.to_world(self.config.block_size),
                state.score,
                state.food.to_world(self.config.block_size)
            );
        } else {
            state.snake.pop_tail();
        }

        state.steps += 1;

        StepResult {
            game_over: false,
            score: state.score,
            info: StepInfo {
                ate_food,
                self_collision: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_4x4() -> GameEngine {
        GameEngine::with_seed(GameConfig::cells(4, 4), 11).unwrap()
    }

    fn line_state(food: Position) -> GameState {
        let snake = Snake::from_body(
            vec![Position::new(2, 2), Position::new(1, 2), Position::new(0, 2)],
            Direction::Right,
        );
        GameState::new(snake, food, 4, 4)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::new(650, 480);
        assert!(matches!(
            GameEngine::new(config),
            Err(ConfigError::NotBlockAligned { .. })
        ));
    }

    #[test]
    fn test_new_rejects_grid_beyond_coordinate_range() {
        assert!(matches!(
            GameEngine::with_seed(GameConfig::cells(u32::MAX, 4), 1),
            Err(ConfigError::GridTooLarge { axis: "width", .. })
        ));
    }

    #[test]
    fn test_reset_on_largest_grid() {
        let side = crate::game::config::MAX_GRID_SIDE as u32;
        let mut engine = GameEngine::with_seed(GameConfig::cells(side, 4), 1).unwrap();
        let mut state = engine.reset();
        assert_eq!(state.snake.head(), Position::new((side / 2) as i32, 2));

        state.snake.body[0] = Position::new(side as i32 - 1, 2);
        state.snake.body.truncate(1);
        state.snake.direction = Direction::Right;
        state.food = Position::new(5, 0);
        engine.step(&mut state, Action::Continue);
        assert_eq!(state.snake.head(), Position::new(0, 2));
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default()).unwrap();
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.grid_width, 32);
        assert_eq!(state.grid_height, 24);
        assert_eq!(state.snake.head(), Position::new(16, 12));
        assert_eq!(state.snake.body[1], Position::new(15, 12));
        assert_eq!(state.snake.body[2], Position::new(14, 12));
        assert!(!state.is_occupied_by_snake(state.food));
        assert!(state.is_in_bounds(state.food));
    }

    #[test]
    fn test_reset_never_heads_left() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 99).unwrap();
        let mut seen = Vec::new();

        for _ in 0..200 {
            let direction = engine.reset().direction();
            assert_ne!(direction, Direction::Left);
            if !seen.contains(&direction) {
                seen.push(direction);
            }
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameEngine::with_seed(GameConfig::default(), 5).unwrap();
        let mut b = GameEngine::with_seed(GameConfig::default(), 5).unwrap();
        assert_eq!(a.reset(), b.reset());
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut engine = engine_4x4();
        let mut state = line_state(Position::new(3, 2));

        let result = engine.step(&mut state, Action::Continue);

        assert!(!result.game_over);
        assert!(result.info.ate_food);
        assert_eq!(result.score, 1);
        assert_eq!(state.score, 1);
        assert_eq!(
            state.snake.body,
            vec![
                Position::new(3, 2),
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(0, 2),
            ]
        );
        assert!(!state.is_occupied_by_snake(state.food));
        assert!(state.is_in_bounds(state.food));
    }

    #[test]
    fn test_plain_move_pops_tail() {
        let mut engine = engine_4x4();
        let mut state = line_state(Position::new(1, 1));

        let result = engine.step(&mut state, Action::Continue);

        assert!(!result.game_over);
        assert!(!result.info.ate_food);
        assert_eq!(result.score, 0);
        assert_eq!(state.steps, 1);
        assert_eq!(
            state.snake.body,
            vec![Position::new(3, 2), Position::new(2, 2), Position::new(1, 2)]
        );
        assert_eq!(state.food, Position::new(1, 1));
    }

    #[test]
    fn test_reversal_collides_and_keeps_tail() {
        let mut engine = engine_4x4();
        let mut state = line_state(Position::new(1, 1));
        state.score = 4;

        // Reversing is not blocked: the head lands on (1, 2).
        let result = engine.step(&mut state, Action::Move(Direction::Left));

        assert!(result.game_over);
        assert!(result.info.self_collision);
        assert_eq!(result.score, 4);
        assert!(state.is_game_over());
        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(
            state.snake.body,
            vec![
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut engine = engine_4x4();
        let mut state = line_state(Position::new(1, 1));
        engine.step(&mut state, Action::Move(Direction::Left));
        let frozen = state.clone();

        for action in [Action::Continue, Action::Move(Direction::Up)] {
            let result = engine.step(&mut state, action);
            assert!(result.game_over);
            assert!(!result.info.self_collision);
            assert_eq!(state, frozen);
        }
    }

    #[test]
    fn test_wrap_around_each_edge() {
        let mut engine = engine_4x4();
        let cases = [
            (Position::new(3, 1), Direction::Right, Position::new(0, 1)),
            (Position::new(0, 1), Direction::Left, Position::new(3, 1)),
            (Position::new(1, 0), Direction::Up, Position::new(1, 3)),
            (Position::new(1, 3), Direction::Down, Position::new(1, 0)),
        ];

        for (head, direction, expected) in cases {
            let snake = Snake::from_body(vec![head], direction);
            let mut state = GameState::new(snake, Position::new(2, 2), 4, 4);

            let result = engine.step(&mut state, Action::Continue);

            assert!(!result.game_over);
            assert_eq!(state.snake.head(), expected);
        }
    }

    #[test]
    fn test_self_collision_after_turns() {
        let mut engine = GameEngine::with_seed(GameConfig::cells(10, 10), 3).unwrap();

        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        let mut state = GameState::new(snake, Position::new(8, 8), 10, 10);

        engine.step(&mut state, Action::Move(Direction::Down));
        engine.step(&mut state, Action::Move(Direction::Left));
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.game_over);
        assert!(result.info.self_collision);
        assert_eq!(state.snake.head(), Position::new(4, 5));
        assert_eq!(state.snake.len(), 6);
    }

    #[test]
    fn test_chasing_tail_cell_collides() {
        // Square loop: the head steps onto the tail before it is popped.
        let mut engine = engine_4x4();
        let snake = Snake::from_body(
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(2, 1),
            ],
            Direction::Up,
        );
        let mut state = GameState::new(snake, Position::new(3, 3), 4, 4);

        let result = engine.step(&mut state, Action::Move(Direction::Right));

        assert!(result.game_over);
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut engine = GameEngine::with_seed(GameConfig::cells(6, 5), 2024).unwrap();
        let mut state = engine.reset();
        let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];

        for i in 0..300 {
            let before_len = state.snake.len();
            let before_score = state.score;
            let action = if i % 7 == 0 {
                Action::Move(turns[(i / 7) % turns.len()])
            } else {
                Action::Continue
            };

            let result = engine.step(&mut state, action);

            if result.game_over {
                assert_eq!(result.score, before_score);
                break;
            }
            if result.info.ate_food {
                assert_eq!(state.score, before_score + 1);
                assert_eq!(state.snake.len(), before_len + 1);
            } else {
                assert_eq!(state.score, before_score);
                assert_eq!(state.snake.len(), before_len);
            }
            assert!(state.snake.body.iter().all(|p| state.is_in_bounds(*p)));
            if state.snake.len() < state.cell_count() {
                assert!(!state.is_occupied_by_snake(state.food));
            }
        }
    }
}
