/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Headings a fresh game may start with.
    ///
    /// `Left` has always been missing from this set. It looks like an
    /// oversight rather than a rule, but games start this way until someone
    /// decides otherwise.
    pub const INITIAL_CHOICES: [Direction; 3] = [Direction::Right, Direction::Up, Direction::Down];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Action fed into a single engine step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Latch a new heading before moving. Reversals are allowed.
    Move(Direction),
    /// Keep the current heading
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_initial_choices_exclude_left() {
        assert_eq!(Direction::INITIAL_CHOICES.len(), 3);
        assert!(!Direction::INITIAL_CHOICES.contains(&Direction::Left));
    }

    #[test]
    fn test_action_from_latched_direction() {
        assert_eq!(Action::from(Some(Direction::Up)), Action::Move(Direction::Up));
        assert_eq!(Action::from(None), Action::Continue);
    }
}
