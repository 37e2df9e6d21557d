//! Orientation of each snake segment sprite
//!
//! A pure mapping from the snake's geometry to a tag the renderer turns into
//! a glyph. Neighbour directions are worked out on the wrapped grid, so a
//! segment that crosses an edge still lines up with its partner on the far
//! side.

use crate::game::{Direction, GameState, Position};

/// Axis of a straight body segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A bend, named by the two sides of the cell it connects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentSprite {
    /// Head facing the current heading
    Head(Direction),
    Straight(Axis),
    Corner(Corner),
    /// Tail tip pointing away from the rest of the body
    Tail(Direction),
    /// Two segments on the same cell (only after a collision)
    Overlap,
}

/// Direction from `from` to an adjacent cell `to`, allowing for wrap-around.
///
/// Returns `None` when the cells are equal or not neighbours.
pub fn neighbour_direction(
    from: Position,
    to: Position,
    grid_width: usize,
    grid_height: usize,
) -> Option<Direction> {
    let dx = wrapped_delta(to.x, from.x, grid_width);
    let dy = wrapped_delta(to.y, from.y, grid_height);

    match (dx, dy) {
        (1, 0) => Some(Direction::Right),
        (-1, 0) => Some(Direction::Left),
        (0, 1) => Some(Direction::Down),
        (0, -1) => Some(Direction::Up),
        _ => None,
    }
}

// Shortest signed distance from `from` to `to` on a ring of `cells` cells.
fn wrapped_delta(to: i32, from: i32, cells: usize) -> i64 {
    let delta = i64::from(to) - i64::from(from);
    let size = match i64::try_from(cells) {
        Ok(size) if size > 0 => size,
        _ => return delta,
    };
    let d = delta.rem_euclid(size);
    if d * 2 > size {
        d - size
    } else {
        d
    }
}

pub fn head_sprite(direction: Direction) -> SegmentSprite {
    SegmentSprite::Head(direction)
}

/// Sprite for a middle segment, given the directions toward both neighbours
pub fn body_sprite(toward_prev: Option<Direction>, toward_next: Option<Direction>) -> SegmentSprite {
    use Direction::*;

    match (toward_prev, toward_next) {
        (Some(Left | Right), Some(Left | Right)) => SegmentSprite::Straight(Axis::Horizontal),
        (Some(Up | Down), Some(Up | Down)) => SegmentSprite::Straight(Axis::Vertical),
        (Some(Up), Some(Left)) | (Some(Left), Some(Up)) => SegmentSprite::Corner(Corner::UpLeft),
        (Some(Up), Some(Right)) | (Some(Right), Some(Up)) => {
            SegmentSprite::Corner(Corner::UpRight)
        }
        (Some(Down), Some(Left)) | (Some(Left), Some(Down)) => {
            SegmentSprite::Corner(Corner::DownLeft)
        }
        (Some(Down), Some(Right)) | (Some(Right), Some(Down)) => {
            SegmentSprite::Corner(Corner::DownRight)
        }
        _ => SegmentSprite::Overlap,
    }
}

/// Sprite for the last segment, given the direction toward the one before it
pub fn tail_sprite(toward_body: Option<Direction>) -> SegmentSprite {
    match toward_body {
        Some(direction) => SegmentSprite::Tail(direction.opposite()),
        None => SegmentSprite::Overlap,
    }
}

/// Sprites for the whole snake, head first
pub fn snake_sprites(state: &GameState) -> Vec<(Position, SegmentSprite)> {
    if state.snake.is_empty() {
        return Vec::new();
    }

    let body = &state.snake.body;
    let dir = |from: Position, to: Position| {
        neighbour_direction(from, to, state.grid_width, state.grid_height)
    };

    body.iter()
        .enumerate()
        .map(|(i, &cell)| {
            let sprite = if i == 0 {
                head_sprite(state.snake.direction)
            } else if i == body.len() - 1 {
                tail_sprite(dir(cell, body[i - 1]))
            } else {
                body_sprite(dir(cell, body[i - 1]), dir(cell, body[i + 1]))
            };
            (cell, sprite)
        })
        .collect()
}
