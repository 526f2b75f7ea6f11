//! This module contains some error and result definitions used in this crate.

use crate::Coord;
use crate::group::GroupKind;

use std::num::ParseIntError;

/// The errors that can occur when constructing, mutating, or verifying a
/// [Grid](../struct.Grid.html). This does not include errors that occur when
/// parsing a puzzle from text, see
/// [PuzzleParseError](enum.PuzzleParseError.html) for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the difficulty specified for a created grid is invalid.
    /// This is the case if it is neither a perfect square nor 6, or if it is
    /// greater than 64.
    InvalidDifficulty,

    /// Indicates that the specified coordinate lies outside the grid in
    /// question. This is the case if its row or column is zero or greater
    /// than the difficulty.
    OutOfBounds,

    /// Indicates that a value outside the range from 1 to the difficulty was
    /// assigned to a cell, or that an already-solved cell was assigned a
    /// conflicting value. Both signal a malformed puzzle and are fatal.
    InvalidValue {

        /// The coordinate of the cell the assignment targeted.
        coord: Coord,

        /// The offending value.
        value: usize
    },

    /// Indicates that a row, column, or box group did not end up with exactly
    /// as many member cells as the difficulty after wiring. This signals a
    /// defect in the box-index computation, not bad input.
    Structural {

        /// The kind of the group with the wrong member count.
        kind: GroupKind,

        /// The 1-based index of the group with the wrong member count.
        index: usize,

        /// The number of members the group actually received.
        count: usize
    },

    /// Indicates that [Grid::verify](../struct.Grid.html#method.verify) found
    /// a group whose member values are not a permutation of the range from 1
    /// to the difficulty.
    ConstraintViolation {

        /// The kind of the violated group.
        kind: GroupKind,

        /// The 1-based index of the violated group.
        index: usize,

        /// The first value found to be duplicated in or missing from the
        /// group.
        value: usize
    }
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a `Grid` from a
/// puzzle code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: difficulty
    /// and cells (separated by ';'), so if the code does not contain exactly
    /// one semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the difficulty.
    WrongNumberOfCells,

    /// Indicates that the provided difficulty is invalid (i.e. neither a
    /// perfect square nor 6, or greater than 64).
    InvalidDifficulty,

    /// Indicates that one of the numbers (difficulty or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid value (0 or more than
    /// the difficulty).
    InvalidValue
}

impl From<ParseIntError> for PuzzleParseError {
    fn from(_: ParseIntError) -> Self {
        PuzzleParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;
