//! Structural diff between two positions
//!
//! A [`ChangeSet`] is what a renderer needs to bring its view of one
//! position up to date with another without redrawing the whole board.
//!
//! # Example
//!
//! ```
//! use goban::{Position, Stone};
//!
//! let before = Position::new(9)?;
//! let mut after = before.clone();
//! after.set(2, 3, Stone::Black)?;
//!
//! let changes = before.compare(&after)?;
//! assert_eq!(changes.add.len(), 1);
//! assert!(changes.remove.is_empty());
//! # Ok::<(), goban::PositionError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::{Position, Stone};
use crate::error::{PositionError, PositionResult};

/// A cell that gained a stone or changed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addition {
    pub x: u8,
    pub y: u8,
    pub color: Stone,
}

/// A cell whose stone was taken off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub x: u8,
    pub y: u8,
}

/// Additions and removals, each in row-major cell order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeSet {
    pub add: Vec<Addition>,
    pub remove: Vec<Removal>,
}

impl ChangeSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }

    /// Total number of changed cells
    #[inline]
    pub fn len(&self) -> usize {
        self.add.len() + self.remove.len()
    }

    /// Write these changes into `position`.
    ///
    /// All coordinates are checked first; on error nothing is written.
    pub fn apply(&self, position: &mut Position) -> PositionResult<()> {
        let size = position.size();
        let coords = self
            .add
            .iter()
            .map(|a| (a.x, a.y))
            .chain(self.remove.iter().map(|r| (r.x, r.y)));
        for (x, y) in coords {
            if position.get(x as i32, y as i32).is_none() {
                return Err(PositionError::OutOfRange {
                    x: x as i32,
                    y: y as i32,
                    size,
                });
            }
        }

        for r in &self.remove {
            position.set(r.x as i32, r.y as i32, Stone::Empty)?;
        }
        for a in &self.add {
            position.set(a.x as i32, a.y as i32, a.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changeset() {
        let changes = ChangeSet::default();
        assert!(changes.is_empty());
        assert_eq!(changes.len(), 0);
    }

    #[test]
    fn test_apply_brings_position_up_to_date() {
        let mut before = Position::new(9).unwrap();
        before.set(0, 0, Stone::Black).unwrap();
        before.set(4, 4, Stone::White).unwrap();

        let mut after = before.clone();
        after.set(0, 0, Stone::Empty).unwrap();
        after.set(4, 4, Stone::Black).unwrap();
        after.set(8, 8, Stone::White).unwrap();

        let changes = before.compare(&after).unwrap();
        assert_eq!(changes.len(), 3);

        changes.apply(&mut before).unwrap();
        assert!(before.compare(&after).unwrap().is_empty());
    }

    #[test]
    fn test_apply_rejects_off_board_without_writing() {
        let mut pos = Position::new(5).unwrap();
        let changes = ChangeSet {
            add: vec![
                Addition { x: 1, y: 1, color: Stone::Black },
                Addition { x: 7, y: 0, color: Stone::White },
            ],
            remove: vec![],
        };

        let err = changes.apply(&mut pos).unwrap_err();
        assert_eq!(err, PositionError::OutOfRange { x: 7, y: 0, size: 5 });
        assert_eq!(pos.get(1, 1), Some(Stone::Empty));
    }

    #[test]
    fn test_wire_shape() {
        let changes = ChangeSet {
            add: vec![Addition { x: 2, y: 3, color: Stone::White }],
            remove: vec![Removal { x: 0, y: 1 }],
        };
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "add": [{ "x": 2, "y": 3, "color": "White" }],
                "remove": [{ "x": 0, "y": 1 }],
            })
        );

        let back: ChangeSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, changes);
    }
}
