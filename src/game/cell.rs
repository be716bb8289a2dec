//! Cell values
//!
//! The numeric codes are shared by map files, the stored grid and the
//! board snapshot sent over the wire.

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Cell {
    /// Outside the loaded map
    Padding = -1,
    Wall = 0,
    /// Free path (visited, or simply walkable)
    Path = 1,
    /// Start cell while the player is elsewhere
    Start = 2,
    Exit = 3,
    /// Hidden; only ever produced in outbound snapshots
    Fog = 4,
    Player = 5,
}

impl Cell {
    /// Wire / file code of this cell
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a cell by its code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Cell::Padding),
            0 => Some(Cell::Wall),
            1 => Some(Cell::Path),
            2 => Some(Cell::Start),
            3 => Some(Cell::Exit),
            4 => Some(Cell::Fog),
            5 => Some(Cell::Player),
            _ => None,
        }
    }

    /// Whether the player may step onto this cell
    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall | Cell::Padding)
    }
}
