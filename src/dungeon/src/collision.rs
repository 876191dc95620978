//! Axis-separated rectangle collision against static wall boxes.
//!
//! Bodies move along X first and are pushed out of the first wall they
//! overlap, then the same happens along Y. Only the first overlapping wall
//! (in row-major tile order) is used per axis, so a body wedged between two
//! walls in a concave corner can stay partially overlapping for a frame.
//! That limitation is deliberate and positional outcomes depend on it.

use glam::Vec2;

use crate::geometry::Rect;
use crate::grid::{Tile, TileGrid};

/// Movement axis for a single resolution pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Static wall boxes derived from a tile grid, one per wall cell.
///
/// Lookups go through the grid so a query only inspects the cells a
/// rectangle covers instead of every wall in the level.
#[derive(Clone, Debug)]
pub struct WallSet {
    tile_size: f32,
    cols: usize,
    rows: usize,
    solid: Vec<bool>,
    count: usize,
}

impl WallSet {
    pub fn from_grid(grid: &TileGrid, tile_size: f32) -> Self {
        let (cols, rows) = (grid.width(), grid.height());
        let mut solid = vec![false; cols * rows];
        let mut count = 0;
        for (x, y) in grid.walls() {
            if let Some(cell) = solid.get_mut(y * cols + x) {
                *cell = true;
                count += 1;
            }
        }
        Self {
            tile_size,
            cols,
            rows,
            solid,
            count,
        }
    }

    /// A wall set with no walls, covering nothing.
    pub fn empty(tile_size: f32) -> Self {
        Self::from_grid(&TileGrid::filled(0, 0, Tile::Floor), tile_size)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn is_solid(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows && self.solid.get(row * self.cols + col).copied().unwrap_or(false)
    }

    fn tile_box(&self, col: usize, row: usize) -> Rect {
        Rect::new(
            col as f32 * self.tile_size,
            row as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// Every wall box in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (col, row)))
            .filter(|&(col, row)| self.is_solid(col, row))
            .map(|(col, row)| self.tile_box(col, row))
    }

    /// First wall box overlapping `rect`, scanning rows then columns.
    pub fn first_overlap(&self, rect: &Rect) -> Option<Rect> {
        if self.cols == 0 || self.rows == 0 || self.tile_size <= 0.0 {
            return None;
        }
        let (col_lo, col_hi) = cell_span(rect.left(), rect.right(), self.tile_size, self.cols)?;
        let (row_lo, row_hi) = cell_span(rect.top(), rect.bottom(), self.tile_size, self.rows)?;

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if self.is_solid(col, row) {
                    let wall = self.tile_box(col, row);
                    if wall.intersects(rect) {
                        return Some(wall);
                    }
                }
            }
        }
        None
    }

    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.first_overlap(rect).is_some()
    }
}

/// Inclusive range of cells a `[lo, hi)` span touches, clamped to `0..len`.
fn cell_span(lo: f32, hi: f32, tile: f32, len: usize) -> Option<(usize, usize)> {
    let first = (lo / tile).floor() as i64;
    let last = (hi / tile).ceil() as i64 - 1;
    let max = len as i64 - 1;
    if last < 0 || first > max || last < first {
        return None;
    }
    Some((first.max(0) as usize, last.min(max) as usize))
}

/// Pushes `body` out of the first overlapping wall along `axis`.
///
/// The push direction comes from comparing centres: a body whose centre lies
/// before the wall's centre gets its trailing edge snapped to the wall's
/// leading edge, otherwise the opposite. Returns whether a wall was hit.
pub fn resolve_axis(body: &mut Rect, axis: Axis, walls: &WallSet) -> bool {
    let Some(wall) = walls.first_overlap(body) else {
        return false;
    };
    match axis {
        Axis::Horizontal => {
            if body.center().x < wall.center().x {
                body.set_right(wall.left());
            } else {
                body.set_left(wall.right());
            }
        }
        Axis::Vertical => {
            if body.center().y < wall.center().y {
                body.set_bottom(wall.top());
            } else {
                body.set_top(wall.bottom());
            }
        }
    }
    true
}

/// Applies `delta` one axis at a time, resolving after each axis.
pub fn move_and_collide(body: &mut Rect, delta: Vec2, walls: &WallSet) {
    body.x += delta.x;
    resolve_axis(body, Axis::Horizontal, walls);
    body.y += delta.y;
    resolve_axis(body, Axis::Vertical, walls);
}

/// Anything with a collision box that walls can push around.
pub trait Collidable {
    fn body(&self) -> &Rect;

    fn body_mut(&mut self) -> &mut Rect;

    fn position(&self) -> Vec2 {
        self.body().center()
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.body().intersects(other)
    }

    fn move_with_walls(&mut self, delta: Vec2, walls: &WallSet) {
        move_and_collide(self.body_mut(), delta, walls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileGrid;

    /// 5x5 floor with a single wall tile at (2, 2), i.e. box [20, 30) x [20, 30).
    fn single_wall() -> WallSet {
        let mut grid = TileGrid::filled(5, 5, Tile::Floor);
        grid.set(2, 2, Tile::Wall);
        WallSet::from_grid(&grid, 10.0)
    }

    #[test]
    fn moving_right_into_wall_snaps_to_its_left_edge() {
        let walls = single_wall();
        let mut body = Rect::new(12.0, 22.0, 6.0, 6.0);
        move_and_collide(&mut body, Vec2::new(5.0, 0.0), &walls);
        assert_eq!(body.right(), 20.0);
        assert_eq!(body.y, 22.0);
        assert!(!walls.overlaps(&body));
    }

    #[test]
    fn moving_left_into_wall_snaps_to_its_right_edge() {
        let walls = single_wall();
        let mut body = Rect::new(32.0, 21.0, 6.0, 6.0);
        move_and_collide(&mut body, Vec2::new(-4.0, 0.0), &walls);
        assert_eq!(body.left(), 30.0);
        assert_eq!(body.y, 21.0);
    }

    #[test]
    fn vertical_moves_resolve_on_y_only() {
        let walls = single_wall();
        let mut body = Rect::new(22.0, 10.0, 6.0, 6.0);
        move_and_collide(&mut body, Vec2::new(0.0, 8.0), &walls);
        assert_eq!(body.bottom(), 20.0);
        assert_eq!(body.x, 22.0);

        let mut below = Rect::new(22.0, 33.0, 6.0, 6.0);
        move_and_collide(&mut below, Vec2::new(0.0, -6.0), &walls);
        assert_eq!(below.top(), 30.0);
    }

    #[test]
    fn free_space_moves_unhindered() {
        let walls = single_wall();
        let mut body = Rect::new(0.0, 0.0, 6.0, 6.0);
        move_and_collide(&mut body, Vec2::new(3.0, 4.0), &walls);
        assert_eq!((body.x, body.y), (3.0, 4.0));
    }

    #[test]
    fn first_overlap_prefers_row_major_order() {
        let mut grid = TileGrid::filled(4, 4, Tile::Floor);
        grid.set(2, 1, Tile::Wall);
        grid.set(1, 2, Tile::Wall);
        let walls = WallSet::from_grid(&grid, 10.0);
        let probe = Rect::new(15.0, 15.0, 10.0, 10.0);
        assert_eq!(walls.first_overlap(&probe), Some(Rect::new(20.0, 10.0, 10.0, 10.0)));
        assert_eq!(walls.len(), 2);
        assert_eq!(walls.iter().count(), 2);
    }

    #[test]
    fn queries_outside_the_grid_find_nothing() {
        let walls = single_wall();
        assert!(walls.first_overlap(&Rect::new(-20.0, -20.0, 5.0, 5.0)).is_none());
        assert!(walls.first_overlap(&Rect::new(500.0, 0.0, 5.0, 5.0)).is_none());
        assert!(WallSet::empty(10.0).first_overlap(&Rect::new(0.0, 0.0, 5.0, 5.0)).is_none());
    }
}
