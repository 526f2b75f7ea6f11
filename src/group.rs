//! This module contains the definition of the constraint [Group]s (rows,
//! columns, and boxes) that partition a grid.

use crate::Coord;
use crate::error::{GridError, GridResult};
use crate::util::CandidateSet;

use serde::{Deserialize, Serialize};

/// The three kinds of constraint groups a grid is partitioned into. Every
/// cell belongs to exactly one group of each kind.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GroupKind {

    /// A horizontal line of cells sharing the same row coordinate.
    Row,

    /// A vertical line of cells sharing the same column coordinate.
    Column,

    /// A rectangular sub-region of the grid. For perfect-square difficulties
    /// the boxes are √N×√N; for difficulty 6 they are 2 rows by 3 columns.
    Box
}

/// A collection of exactly N cells (where N is the grid's difficulty) that
/// must jointly contain every value from 1 to N exactly once.
///
/// A group references its member cells by coordinate only; the cells
/// themselves are owned by the [Grid](crate::Grid), which also drives all
/// candidate elimination. The group records its membership, a solved flag
/// that is raised once every member is solved, and implements the structural
/// and permutation checks on that membership.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Group {
    kind: GroupKind,
    index: usize,
    members: Vec<Coord>,
    solved: bool
}

impl Group {

    /// Creates a new, empty group of the given kind with the given 1-based
    /// index. Members are wired in afterwards by the grid's constructor.
    pub(crate) fn new(kind: GroupKind, index: usize) -> Group {
        Group {
            kind,
            index,
            members: Vec::new(),
            solved: false
        }
    }

    /// Registers a cell coordinate as a member of this group.
    pub(crate) fn push_member(&mut self, coord: Coord) {
        self.members.push(coord);
    }

    /// Raises the solved flag of this group. Called by the grid once every
    /// member cell is solved.
    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Gets the kind of this group.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Gets the 1-based index of this group among the groups of its kind.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Gets the coordinates of the member cells of this group, in the order
    /// they were wired (row-major with respect to the grid).
    pub fn members(&self) -> &[Coord] {
        &self.members
    }

    /// Indicates whether every member cell of this group has been solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Checks that this group has been wired with exactly `difficulty` member
    /// cells. A mismatch indicates a defect in the box-index computation and
    /// is fatal.
    ///
    /// # Errors
    ///
    /// `GridError::Structural` if the member count is wrong.
    pub(crate) fn verify_wiring(&self, difficulty: usize) -> GridResult<()> {
        if self.members.len() != difficulty {
            Err(GridError::Structural {
                kind: self.kind,
                index: self.index,
                count: self.members.len()
            })
        }
        else {
            Ok(())
        }
    }

    /// Checks that the given member values, in member order, form a
    /// permutation of the values from 1 to `difficulty`. This is the puzzle
    /// constraint itself and is run once at the end of a solve, not assumed
    /// mid-solve.
    ///
    /// # Errors
    ///
    /// `GridError::ConstraintViolation` carrying the first value found to be
    /// duplicated in or missing from the group. Unsolved members surface as
    /// missing values.
    pub(crate) fn check_values<I>(&self, difficulty: usize, values: I)
            -> GridResult<()>
    where
        I: Iterator<Item = Option<usize>>
    {
        let mut missing = CandidateSet::full(difficulty).unwrap();

        for value in values {
            if let Some(value) = value {
                if !missing.remove(value).unwrap_or(false) {
                    return Err(GridError::ConstraintViolation {
                        kind: self.kind,
                        index: self.index,
                        value
                    });
                }
            }
        }

        if let Some(value) = missing.iter().next() {
            Err(GridError::ConstraintViolation {
                kind: self.kind,
                index: self.index,
                value
            })
        }
        else {
            Ok(())
        }
    }
}
