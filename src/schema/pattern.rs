//! Built-in prefab library.
//!
//! Prefabs are named rectangular stamps of alive/dead cells used to seed a
//! sub-region of a grid. They are process-wide static constants, stored as
//! ASCII rows (`X` alive, `.` dead) and never mutated.

use serde::{Deserialize, Serialize};

/// Identifier of a built-in prefab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKey {
    /// Single alive cell, the default stamp.
    #[default]
    Point,
    Beehive,
    BeehiveWithTail,
    MirroredTable,
    Blinker,
    Tumbler,
    QueenBeeShuttle,
    Glider,
    Lwss,
    RPentomino,
    GosperGliderGun,
}

/// Menu grouping for prefabs.
///
/// Categories are presentation metadata for menu population; the engine
/// treats the library as a flat key-to-matrix mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternCategory {
    Stables,
    Oscillators,
    Spaceships,
    Methuselahs,
    Guns,
}

/// An immutable rectangular stamp.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Serialized name, e.g. "queen-bee-shuttle".
    pub name: &'static str,
    /// Rows of the stamp, `X` alive and `.` dead. All rows have equal length.
    pub rows: &'static [&'static str],
}

impl Pattern {
    /// Stamp height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Stamp width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Whether the stamp cell at (row, col) is alive.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.rows[row].as_bytes()[col] == b'X'
    }
}

static POINT: Pattern = Pattern {
    name: "point",
    rows: &["X"],
};

static BEEHIVE: Pattern = Pattern {
    name: "beehive",
    rows: &[
        ".XX.", //
        "X..X", //
        ".XX.",
    ],
};

static BEEHIVE_WITH_TAIL: Pattern = Pattern {
    name: "beehive-with-tail",
    rows: &[
        ".XX..", //
        "X..X.", //
        ".XX.X", //
        "....X", //
        "...XX",
    ],
};

static MIRRORED_TABLE: Pattern = Pattern {
    name: "mirrored-table",
    rows: &[
        "X..X", //
        "XXXX", //
        "....", //
        "XXXX", //
        "X..X",
    ],
};

static BLINKER: Pattern = Pattern {
    name: "blinker",
    rows: &["XXX"],
};

static TUMBLER: Pattern = Pattern {
    name: "tumbler",
    rows: &[
        ".XX.XX.", //
        ".XX.XX.", //
        "..X.X..", //
        "X.X.X.X", //
        "X.X.X.X", //
        "XX...XX",
    ],
};

static QUEEN_BEE_SHUTTLE: Pattern = Pattern {
    name: "queen-bee-shuttle",
    rows: &[
        ".........X............",
        ".......X.X............",
        "......X.X.............",
        "XX...X..X...........XX",
        "XX....X.X...........XX",
        ".......X.X............",
        ".........X............",
    ],
};

static GLIDER: Pattern = Pattern {
    name: "glider",
    rows: &[
        ".X.", //
        "..X", //
        "XXX",
    ],
};

static LWSS: Pattern = Pattern {
    name: "lwss",
    rows: &[
        "X..X.", //
        "....X", //
        "X...X", //
        ".XXXX",
    ],
};

static R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    rows: &[
        ".XX", //
        "XX.", //
        ".X.",
    ],
};

static GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    rows: &[
        "........................X...........",
        "......................X.X...........",
        "............XX......XX............XX",
        "...........X...X....XX............XX",
        "XX........X.....X...XX..............",
        "XX........X...X.XX....X.X...........",
        "..........X.....X...................",
        "...........X...X....................",
        "............XX......................",
    ],
};

/// Ordered menu listing: every categorized prefab, grouped by category.
///
/// `Point` is the always-available default stamp and deliberately absent.
static GROUPS: &[(PatternCategory, &[PatternKey])] = &[
    (
        PatternCategory::Stables,
        &[
            PatternKey::Beehive,
            PatternKey::BeehiveWithTail,
            PatternKey::MirroredTable,
        ],
    ),
    (
        PatternCategory::Oscillators,
        &[
            PatternKey::Blinker,
            PatternKey::Tumbler,
            PatternKey::QueenBeeShuttle,
        ],
    ),
    (
        PatternCategory::Spaceships,
        &[PatternKey::Glider, PatternKey::Lwss],
    ),
    (PatternCategory::Methuselahs, &[PatternKey::RPentomino]),
    (PatternCategory::Guns, &[PatternKey::GosperGliderGun]),
];

/// Ordered sequence of available pattern identifiers, grouped by category.
pub fn pattern_keys() -> &'static [(PatternCategory, &'static [PatternKey])] {
    GROUPS
}

impl PatternKey {
    /// Every built-in key, menu order, `Point` first.
    pub const ALL: [PatternKey; 11] = [
        PatternKey::Point,
        PatternKey::Beehive,
        PatternKey::BeehiveWithTail,
        PatternKey::MirroredTable,
        PatternKey::Blinker,
        PatternKey::Tumbler,
        PatternKey::QueenBeeShuttle,
        PatternKey::Glider,
        PatternKey::Lwss,
        PatternKey::RPentomino,
        PatternKey::GosperGliderGun,
    ];

    /// The stamp this key identifies.
    pub fn pattern(&self) -> &'static Pattern {
        match self {
            PatternKey::Point => &POINT,
            PatternKey::Beehive => &BEEHIVE,
            PatternKey::BeehiveWithTail => &BEEHIVE_WITH_TAIL,
            PatternKey::MirroredTable => &MIRRORED_TABLE,
            PatternKey::Blinker => &BLINKER,
            PatternKey::Tumbler => &TUMBLER,
            PatternKey::QueenBeeShuttle => &QUEEN_BEE_SHUTTLE,
            PatternKey::Glider => &GLIDER,
            PatternKey::Lwss => &LWSS,
            PatternKey::RPentomino => &R_PENTOMINO,
            PatternKey::GosperGliderGun => &GOSPER_GLIDER_GUN,
        }
    }

    /// Serialized name of this key.
    pub fn name(&self) -> &'static str {
        self.pattern().name
    }

    /// Resolve a serialized name back to its key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Menu category, `None` for the default `Point` stamp.
    pub fn category(&self) -> Option<PatternCategory> {
        GROUPS
            .iter()
            .find(|(_, keys)| keys.contains(self))
            .map(|(category, _)| *category)
    }
}
