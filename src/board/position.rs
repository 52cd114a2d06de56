//! Position structure with capture tracking

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::change::{Addition, ChangeSet, Removal};
use super::{Pos, Stone, DEFAULT_SIZE, MAX_SIZE};
use crate::error::{PositionError, PositionResult};

/// Number of stones captured by each side
///
/// Which stones count as "captured by" a side is decided by the rule engine;
/// this type only stores the tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    /// Get capture count for a color
    #[inline]
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => 0,
        }
    }

    /// Add captures for a color (saturating)
    #[inline]
    pub fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black = self.black.saturating_add(count),
            Stone::White => self.white = self.white.saturating_add(count),
            Stone::Empty => {}
        }
    }

    /// Subtract captures for a color (saturating, min 0)
    #[inline]
    pub fn sub(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black = self.black.saturating_sub(count),
            Stone::White => self.white = self.white.saturating_sub(count),
            Stone::Empty => {}
        }
    }
}

/// How [`Position::clone_with`] copies the non-grid state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneMode {
    /// Grid, both capture counts and the turn
    #[default]
    Full,
    /// Grid and the black capture count only. White captures reset to 0 and
    /// the turn resets to Black.
    Legacy,
}

/// Board position: stone layout, capture tallies and side to move
///
/// The grid is a single row-major allocation indexed by `x * size + y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    size: usize,
    grid: Box<[Stone]>,
    captures: Captures,
    turn: Stone,
}

impl Position {
    /// Create an empty position. Fails for a size of 0 or above [`MAX_SIZE`].
    pub fn new(size: usize) -> PositionResult<Self> {
        if size == 0 || size > MAX_SIZE {
            return Err(PositionError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            grid: vec![Stone::Empty; size * size].into_boxed_slice(),
            captures: Captures::default(),
            turn: Stone::Black,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        Pos::is_valid(x, y, self.size).then(|| x as usize * self.size + y as usize)
    }

    /// Get stone at (x, y), or `None` when the coordinate is off the board.
    ///
    /// `None` is distinct from `Some(Stone::Empty)`, so neighbor probes at
    /// the edge can tell "no cell" from "empty cell".
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Stone> {
        self.index(x, y).map(|idx| self.grid[idx])
    }

    /// Get stone at an on-board position
    ///
    /// # Panics
    /// If `pos` lies outside this board.
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        assert!(
            (pos.x as usize) < self.size && (pos.y as usize) < self.size,
            "{pos:?} is outside a {0}x{0} board",
            self.size
        );
        self.grid[pos.to_index(self.size)]
    }

    /// Write a stone (or Empty) at (x, y). No rule processing.
    pub fn set(&mut self, x: i32, y: i32, stone: Stone) -> PositionResult<&mut Self> {
        let idx = self.index(x, y).ok_or(PositionError::OutOfRange {
            x,
            y,
            size: self.size,
        })?;
        self.grid[idx] = stone;
        Ok(self)
    }

    /// Reset every cell to Empty. Captures and turn are kept.
    pub fn clear(&mut self) -> &mut Self {
        trace!("clearing {}x{} position", self.size, self.size);
        self.grid.fill(Stone::Empty);
        self
    }

    /// Copy this position according to `mode`
    pub fn clone_with(&self, mode: CloneMode) -> Self {
        match mode {
            CloneMode::Full => self.clone(),
            CloneMode::Legacy => {
                debug!("legacy clone: white captures and turn not copied");
                let mut clone = Self::empty(self.size);
                clone.grid.copy_from_slice(&self.grid);
                clone.captures.black = self.captures.black;
                clone
            }
        }
    }

    /// Diff from `self` (before) to `other` (after).
    ///
    /// A stone that disappears is a removal; any other difference, including
    /// a color change, is an addition carrying the new color. Both lists are
    /// in row-major index order.
    pub fn compare(&self, other: &Position) -> PositionResult<ChangeSet> {
        if self.size != other.size {
            return Err(PositionError::SizeMismatch {
                expected: self.size,
                actual: other.size,
            });
        }

        let mut changes = ChangeSet::default();
        for (idx, (&before, &after)) in self.grid.iter().zip(other.grid.iter()).enumerate() {
            if before == after {
                continue;
            }
            let Pos { x, y } = Pos::from_index(idx, self.size);
            if before.is_stone() && after == Stone::Empty {
                changes.remove.push(Removal { x, y });
            } else {
                changes.add.push(Addition { x, y, color: after });
            }
        }

        debug!(
            "compare: {} added, {} removed",
            changes.add.len(),
            changes.remove.len()
        );
        Ok(changes)
    }

    #[inline]
    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    #[inline]
    pub fn captures_mut(&mut self) -> &mut Captures {
        &mut self.captures
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Set side to move. Empty is rejected.
    pub fn set_turn(&mut self, stone: Stone) -> PositionResult<&mut Self> {
        if !stone.is_stone() {
            return Err(PositionError::InvalidTurn);
        }
        self.turn = stone;
        Ok(self)
    }

    /// Hand the move to the other side
    pub fn pass_turn(&mut self) -> &mut Self {
        self.turn = self.turn.opponent();
        self
    }

    /// Occupied cells in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, stone)| stone.is_stone())
            .map(|(idx, &stone)| (Pos::from_index(idx, self.size), stone))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.grid.iter().filter(|stone| stone.is_stone()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.grid.iter().all(|&stone| stone == Stone::Empty)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty(DEFAULT_SIZE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.chunks(self.size) {
            for stone in row {
                let c = match stone {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
