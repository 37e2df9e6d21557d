use super::action::Direction;

/// A cell on the game grid, in grid units
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

    /// Move position in a direction, wrapping around the grid edges
    pub fn wrapped_step(&self, direction: Direction, grid_width: usize, grid_height: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap_axis(self.x, dx, grid_width),
            y: wrap_axis(self.y, dy, grid_height),
        }
    }

    /// Top-left corner of this cell in world units
    pub fn to_world(&self, block_size: u32) -> (i64, i64) {
        (
            i64::from(self.x) * i64::from(block_size),
            i64::from(self.y) * i64::from(block_size),
        )
    }
}

/// Grid side as an `i32`, saturating for sides no valid config produces
fn axis_len(cells: usize) -> i32 {
    i32::try_from(cells).unwrap_or(i32::MAX)
}

// Widened to i64 so a coordinate at the i32 limit cannot overflow.
fn wrap_axis(coord: i32, delta: i32, cells: usize) -> i32 {
    let len = i64::from(axis_len(cells).max(1));
    let wrapped = (i64::from(coord) + i64::from(delta)).rem_euclid(len);
    // `wrapped` lies in [0, len) and len fits in i32
    i32::try_from(wrapped).unwrap_or(0)
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose body trails horizontally to the left of the
    /// head, whatever the starting heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let body = (0..length.max(1))
            .map(|i| head.moved_by(-(i as i32), 0))
            .collect();

        Self { body, direction }
    }

    /// Wrap an explicit body, head first
    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head in front of the body. The tail stays.
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Drop the last segment
    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Current heading
    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_alive
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < axis_len(self.grid_width)
            && pos.y >= 0
            && pos.y < axis_len(self.grid_height)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}
