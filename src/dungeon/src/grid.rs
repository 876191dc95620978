// src/dungeon/src/grid.rs

use crate::room::Room;

/// One cell of the dungeon grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

/// Row-major grid of tiles, `width` x `height` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid where every cell is `tile`.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            cells: vec![tile; width * height],
        }
    }

    /// Floor area enclosed by a one-tile wall border.
    pub fn walled_box(width: usize, height: usize) -> Self {
        let mut grid = Self::filled(width, height, Tile::Wall);
        if width > 2 && height > 2 {
            grid.carve_room(&Room::new(1, 1, width - 2, height - 2));
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`, `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Sets a cell; writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        if x < self.width && y < self.height {
            if let Some(cell) = self.cells.get_mut(y * self.width + x) {
                *cell = tile;
            }
        }
    }

    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(Tile::Floor)
    }

    /// Carves every tile inside the room to floor.
    pub fn carve_room(&mut self, room: &Room) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                self.set(x, y, Tile::Floor);
            }
        }
    }

    /// Carves a 2-tile-tall horizontal tunnel along rows `y` and `y + 1`.
    pub fn carve_h_tunnel(&mut self, x1: usize, x2: usize, y: usize) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(x, y, Tile::Floor);
            self.set(x, y + 1, Tile::Floor);
        }
    }

    /// Carves a 2-tile-wide vertical tunnel along columns `x` and `x + 1`.
    pub fn carve_v_tunnel(&mut self, y1: usize, y2: usize, x: usize) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(x, y, Tile::Floor);
            self.set(x + 1, y, Tile::Floor);
        }
    }

    /// Iterates `(x, y)` of every wall cell in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Wall)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|t| **t == Tile::Floor).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_box_has_floor_interior() {
        let grid = TileGrid::walled_box(5, 4);
        assert_eq!(grid.get(0, 0), Some(Tile::Wall));
        assert!(grid.is_floor(1, 1));
        assert!(grid.is_floor(3, 2));
        assert_eq!(grid.get(4, 3), Some(Tile::Wall));
        assert_eq!(grid.floor_count(), 3 * 2);
    }

    #[test]
    fn tunnels_are_two_tiles_thick() {
        let mut grid = TileGrid::filled(10, 10, Tile::Wall);
        grid.carve_h_tunnel(6, 2, 3);
        for x in 2..=6 {
            assert!(grid.is_floor(x, 3));
            assert!(grid.is_floor(x, 4));
        }
        assert!(!grid.is_floor(1, 3));

        grid.carve_v_tunnel(1, 5, 8);
        assert!(grid.is_floor(8, 1) && grid.is_floor(9, 5));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut grid = TileGrid::filled(3, 3, Tile::Wall);
        grid.set(3, 0, Tile::Floor);
        grid.carve_v_tunnel(0, 2, 2);
        assert_eq!(grid.get(3, 0), None);
        assert!(grid.is_floor(2, 2));
    }

    #[test]
    fn walls_iterate_row_major() {
        let grid = TileGrid::walled_box(3, 3);
        let walls: Vec<_> = grid.walls().take(4).collect();
        assert_eq!(walls, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    }
}
