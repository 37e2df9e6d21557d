use rand::Rng;

use super::state::{Position, Snake};

/// Pick a random cell not covered by the snake.
///
/// Draws uniformly over the whole grid and redraws while the cell is taken.
/// Returns `None` when the snake already covers every cell.
pub fn place_food<R: Rng>(
    rng: &mut R,
    grid_width: usize,
    grid_height: usize,
    snake: &Snake,
) -> Option<Position> {
    if grid_width == 0 || grid_height == 0 {
        return None;
    }

    let free_cells = (grid_width * grid_height).saturating_sub(distinct_cells(snake));
    if free_cells == 0 {
        return None;
    }

    loop {
        let x = rng.gen_range(0..grid_width) as i32;
        let y = rng.gen_range(0..grid_height) as i32;
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
}

// A game-over snake carries one duplicated cell.
fn distinct_cells(snake: &Snake) -> usize {
    let mut cells = snake.body.clone();
    cells.sort_unstable_by_key(|p| (p.x, p.y));
    cells.dedup();
    cells.len()
}
