use std::collections::HashSet;

use crate::games::SessionRng;
use super::types::Point;

/// Draws uniformly random cells until one is free of `snake`.
///
/// Gives up after `grid_size * grid_size` draws and returns the last candidate,
/// which may lie on the snake. This only happens on a (nearly) saturated board.
pub fn generate_food<'a, I>(snake: I, grid_size: u32, rng: &mut SessionRng) -> Point
where
    I: IntoIterator<Item = &'a Point>,
{
    let occupied: HashSet<Point> = snake.into_iter().copied().collect();
    let size = grid_size as i32;
    let max_attempts = (grid_size as usize) * (grid_size as usize);

    let mut candidate = Point::new(0, 0);
    for _ in 0..max_attempts.max(1) {
        candidate = Point::new(rng.random_range(0..size), rng.random_range(0..size));
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
    candidate
}
