//! Generator invariants that must hold for every seed.

use std::collections::VecDeque;

use dungeon::{DungeonGenerator, Tile, TileGrid};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn connected(grid: &TileGrid, from: (usize, usize), to: (usize, usize)) -> bool {
    if !grid.is_floor(from.0, from.1) || !grid.is_floor(to.0, to.1) {
        return false;
    }
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut queue = VecDeque::from([from]);
    seen[from.1 * grid.width() + from.0] = true;
    while let Some((x, y)) = queue.pop_front() {
        if (x, y) == to {
            return true;
        }
        let neighbours = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbours {
            if grid.get(nx, ny) == Some(Tile::Floor) && !seen[ny * grid.width() + nx] {
                seen[ny * grid.width() + nx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rooms_keep_their_padding(seed in any::<u64>()) {
        let dungeon = DungeonGenerator::default().generate(&mut Pcg32::seed_from_u64(seed));
        let rooms = dungeon.rooms();
        prop_assert!(!rooms.is_empty());
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                prop_assert!(!a.intersects_padded(b), "{a:?} crowds {b:?}");
                prop_assert!(!b.intersects_padded(a), "{b:?} crowds {a:?}");
            }
        }
    }

    #[test]
    fn prop_rooms_fit_inside_the_border(seed in any::<u64>()) {
        let generator = DungeonGenerator::default();
        let dungeon = generator.generate(&mut Pcg32::seed_from_u64(seed));
        for room in dungeon.rooms() {
            prop_assert!(room.x >= 1 && room.y >= 1);
            prop_assert!(room.x + room.width < generator.width);
            prop_assert!(room.y + room.height < generator.height);
            prop_assert!((generator.room_min..=generator.room_max).contains(&room.width));
            prop_assert!((generator.room_min..=generator.room_max).contains(&room.height));
        }
    }

    #[test]
    fn prop_consecutive_rooms_are_connected(seed in any::<u64>()) {
        let dungeon = DungeonGenerator::default().generate(&mut Pcg32::seed_from_u64(seed));
        for pair in dungeon.rooms().windows(2) {
            prop_assert!(
                connected(dungeon.grid(), pair[0].center(), pair[1].center()),
                "no floor path between {:?} and {:?}", pair[0], pair[1]
            );
        }
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>()) {
        let a = DungeonGenerator::default().generate(&mut Pcg32::seed_from_u64(seed));
        let b = DungeonGenerator::default().generate(&mut Pcg32::seed_from_u64(seed));
        prop_assert_eq!(a.rooms(), b.rooms());
        prop_assert_eq!(a.grid(), b.grid());
    }
}
