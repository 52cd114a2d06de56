//! Board position model for Go-like games
//!
//! An in-memory representation of one position on an N×N board:
//! - Stone layout in a flat row-major grid
//! - Capture counts for both sides
//! - Side to move
//!
//! Rule enforcement (legality, captures, ko), record formats and rendering
//! are left to callers. A renderer typically keeps the last drawn
//! [`Position`] and applies the [`ChangeSet`] returned by
//! [`Position::compare`] instead of redrawing everything.
//!
//! # Quick Start
//!
//! ```
//! use goban::{Position, Removal, Stone};
//!
//! let mut position = Position::new(9)?;
//! position.set(2, 3, Stone::Black)?.set(2, 4, Stone::White)?;
//! assert_eq!(position.get(2, 3), Some(Stone::Black));
//! assert_eq!(position.get(-1, 3), None); // off the board
//!
//! let mut next = position.clone();
//! next.set(2, 4, Stone::Empty)?;
//! next.captures_mut().add(Stone::Black, 1);
//! next.pass_turn();
//!
//! let changes = position.compare(&next)?;
//! assert_eq!(changes.remove, vec![Removal { x: 2, y: 4 }]);
//! # Ok::<(), goban::PositionError>(())
//! ```

pub mod board;
pub mod error;

// Re-export commonly used types for convenience
pub use board::{
    Addition, Captures, ChangeSet, CloneMode, Pos, Position, Removal, Stone, DEFAULT_SIZE,
    MAX_SIZE,
};
pub use error::{PositionError, PositionResult};
