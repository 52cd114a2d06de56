//! Board representation for Go-like games

pub mod change;
pub mod position;


// Re-exports
pub use change::{Addition, ChangeSet, Removal};
pub use position::{Captures, CloneMode, Position};

use serde::{Deserialize, Serialize};

/// Default board size (19x19)
pub const DEFAULT_SIZE: usize = 19;
/// Largest supported board size
pub const MAX_SIZE: usize = 52;

/// Cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for Black and White
    #[inline]
    pub fn is_stone(self) -> bool {
        self != Stone::Empty
    }
}

/// Coordinate on a board of some size
///
/// `x` selects the row and `y` the column of the row-major grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_SIZE && (y as usize) < MAX_SIZE);
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.x as usize * size + self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx / size) as u8,
            y: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32, size: usize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x, self.y).cmp(&(other.x, other.y))
    }
}
