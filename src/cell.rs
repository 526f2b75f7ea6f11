//! This module contains the definition of a single [Cell] of a grid.

use crate::Coord;
use crate::util::CandidateSet;

use serde::{Deserialize, Serialize};

/// The smallest unit of a grid: one position which holds either a fixed value
/// or the set of candidate values that have not yet been ruled out.
///
/// A cell upholds the invariant that it is solved if and only if its value is
/// set, which is the case if and only if its candidate set is empty. In
/// particular, a solved cell's value is never among its own candidates.
///
/// Cells do not know about the groups they belong to. All wiring is done by
/// coordinate through the owning [Grid](crate::Grid), which avoids reference
/// cycles between cells and groups.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell {
    coord: Coord,
    value: Option<usize>,
    candidates: CandidateSet
}

impl Cell {

    /// Creates a new, unsolved cell at the given coordinate whose candidates
    /// are all values from 1 to `size` (inclusive). `size` must be a valid
    /// difficulty, which the owning grid guarantees.
    pub(crate) fn new(coord: Coord, size: usize) -> Cell {
        Cell {
            coord,
            value: None,
            candidates: CandidateSet::full(size).unwrap()
        }
    }

    /// Gets the coordinate of this cell within its grid.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Gets the value of this cell, or `None` if it is not yet solved.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    /// Gets the set of values that have not yet been ruled out for this cell.
    /// For solved cells, this set is empty.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Indicates whether this cell has been solved, i.e. holds a fixed value.
    pub fn is_solved(&self) -> bool {
        self.value.is_some()
    }

    /// Fixes the value of this cell and clears its candidates, marking it
    /// solved. The caller (the owning grid) is responsible for validating the
    /// value and for propagating it to the cell's groups.
    pub(crate) fn set_value(&mut self, value: usize) {
        self.value = Some(value);
        self.candidates.clear();
    }

    /// Removes the given value from this cell's candidates and returns
    /// whether it was present. Solved cells have no candidates, so this is a
    /// no-op for them.
    pub(crate) fn remove_candidate(&mut self, value: usize) -> bool {
        self.candidates.remove(value).unwrap()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_cell_is_unsolved_with_full_candidates() {
        let cell = Cell::new(Coord::new(2, 3), 9);

        assert!(!cell.is_solved());
        assert_eq!(None, cell.value());
        assert_eq!(9, cell.candidates().len());
        assert_eq!(Coord::new(2, 3), cell.coord());
    }

    #[test]
    fn solved_cell_has_empty_candidates() {
        let mut cell = Cell::new(Coord::new(1, 1), 4);
        cell.set_value(3);

        assert!(cell.is_solved());
        assert_eq!(Some(3), cell.value());
        assert!(cell.candidates().is_empty());
        assert!(!cell.candidates().contains(3));
    }

    #[test]
    fn candidate_removal_reports_change() {
        let mut cell = Cell::new(Coord::new(1, 1), 4);

        assert!(cell.remove_candidate(2));
        assert!(!cell.remove_candidate(2));
        assert_eq!(3, cell.candidates().len());
    }

    #[test]
    fn candidate_removal_on_solved_cell_is_noop() {
        let mut cell = Cell::new(Coord::new(1, 1), 4);
        cell.set_value(1);

        assert!(!cell.remove_candidate(2));
        assert!(cell.candidates().is_empty());
    }
}
