//! The fixed station catalog with its embedded content.

/// Number of stations on the map.
pub const STATION_COUNT: usize = 14;

/// Lowest station id.
pub const FIRST_STATION: u8 = 2;

/// Highest station id.
pub const LAST_STATION: u8 = 15;

/// A catalog row: identity plus the TOML source of its built-in content.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: u8,
    pub keyword: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

/// Stations 02..15 in id order.
pub const CATALOG: [CatalogEntry; STATION_COUNT] = [
    CatalogEntry {
        id: 2,
        keyword: "compilation",
        title: "Compilation Runway",
        source: include_str!("../content/02-compilation.toml"),
    },
    CatalogEntry {
        id: 3,
        keyword: "fundamentals",
        title: "Fundamentals Arena",
        source: include_str!("../content/03-fundamentals.toml"),
    },
    CatalogEntry {
        id: 4,
        keyword: "functions",
        title: "Functions Lab",
        source: include_str!("../content/04-functions.toml"),
    },
    CatalogEntry {
        id: 5,
        keyword: "precision",
        title: "Precision Casino",
        source: include_str!("../content/05-precision.toml"),
    },
    CatalogEntry {
        id: 6,
        keyword: "imperative",
        title: "Imperative Playground",
        source: include_str!("../content/06-imperative.toml"),
    },
    CatalogEntry {
        id: 7,
        keyword: "types",
        title: "Type System Bench",
        source: include_str!("../content/07-types.toml"),
    },
    CatalogEntry {
        id: 8,
        keyword: "preprocessor",
        title: "Preprocessor Studio",
        source: include_str!("../content/08-preprocessor.toml"),
    },
    CatalogEntry {
        id: 9,
        keyword: "pointers",
        title: "Pointer Maze",
        source: include_str!("../content/09-pointers.toml"),
    },
    CatalogEntry {
        id: 10,
        keyword: "array1d",
        title: "1D Array Workshop",
        source: include_str!("../content/10-array1d.toml"),
    },
    CatalogEntry {
        id: 11,
        keyword: "arrays_ptrs",
        title: "Arrays ↔ Pointers Tower",
        source: include_str!("../content/11-arrays_ptrs.toml"),
    },
    CatalogEntry {
        id: 12,
        keyword: "memory",
        title: "Memory-Mgmt Tycoon",
        source: include_str!("../content/12-memory.toml"),
    },
    CatalogEntry {
        id: 13,
        keyword: "ptrptr",
        title: "Pointer-to-Pointer Lab",
        source: include_str!("../content/13-ptrptr.toml"),
    },
    CatalogEntry {
        id: 14,
        keyword: "funptr",
        title: "Function-Pointer Arcade",
        source: include_str!("../content/14-funptr.toml"),
    },
    CatalogEntry {
        id: 15,
        keyword: "strings",
        title: "Chars & Strings Café",
        source: include_str!("../content/15-strings.toml"),
    },
];
