// src/dungeon/src/theme.rs

/// RGB colour triple.
pub type Rgb = (u8, u8, u8);

/// Visual palette for a level; the simulation only tracks which one is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub wall: Rgb,
    pub floor: Rgb,
}

pub const THEMES: [Theme; 5] = [
    Theme {
        name: "Dungeon",
        wall: (100, 100, 100),
        floor: (30, 30, 30),
    },
    Theme {
        name: "Hell",
        wall: (80, 50, 50),
        floor: (40, 20, 20),
    },
    Theme {
        name: "Forest",
        wall: (50, 80, 50),
        floor: (20, 40, 20),
    },
    Theme {
        name: "Ice",
        wall: (50, 50, 80),
        floor: (20, 20, 40),
    },
    Theme {
        name: "Desert",
        wall: (100, 80, 40),
        floor: (50, 40, 20),
    },
];
