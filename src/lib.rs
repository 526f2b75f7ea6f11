// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a deduction-only Sudoku engine. Given a square grid
//! of side N (a perfect square, or 6 with a 2x3 box layout) and a partial
//! assignment of known values, it determines the full assignment satisfying
//! the row/column/box uniqueness constraints by constraint propagation alone,
//! or reports that deduction stalled. It never guesses, so puzzles whose
//! difficulty exceeds its rule set terminate in a diagnosable
//! [Stalled](SolveOutcome::Stalled) state rather than being searched.
//!
//! The engine applies three rules to a fixed point:
//!
//! * *Naked single*: a cell with exactly one remaining candidate is assigned
//! that value.
//! * *Hidden single*: a value that is a candidate in exactly one cell of a
//! group is assigned to that cell.
//! * A restricted *pointing pair* elimination: if exactly two cells of a
//! group hold a value as a candidate and they share a row, column, or box,
//! the value is removed from the candidates of every other cell of that
//! aligned group.
//!
//! # Parsing and printing puzzles
//!
//! See [Grid::parse] for the exact format of a puzzle code. Codes can be used
//! to exchange puzzles, while pretty prints can be used to display a grid in
//! a clearer manner.
//!
//! ```
//! use sudoku_deduction::Grid;
//!
//! let grid = Grid::parse("4;1,,3,4,3,4,,2,,1,4,3,4,3,2,").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving puzzles
//!
//! A [Grid] is constructed once with its difficulty and the known cells, and
//! then drives the solve loop itself. [Grid::solve] runs to completion (or
//! stall) in one call; [Grid::verify] independently audits the result.
//!
//! ```
//! use sudoku_deduction::{Coord, Grid, SolveOutcome};
//!
//! let mut grid = Grid::parse("4;1,,3,4,3,4,,2,,1,4,3,4,3,2,").unwrap();
//!
//! assert_eq!(SolveOutcome::Solved, grid.solve());
//! assert_eq!(Ok(()), grid.verify());
//! assert_eq!(Ok(Some(2)), grid.value(Coord::new(1, 2)));
//! ```
//!
//! When deduction cannot make further progress, the outcome carries the
//! residual candidate sets of all unsolved cells for diagnosis.
//!
//! ```
//! use sudoku_deduction::{Grid, SolveOutcome};
//!
//! // An empty grid gives deduction nothing to work with.
//! let mut grid = Grid::new(4, &[]).unwrap();
//!
//! match grid.solve() {
//!     SolveOutcome::Stalled(residuals) => assert_eq!(16, residuals.len()),
//!     SolveOutcome::Solved => unreachable!()
//! }
//! ```

pub mod cell;
pub mod error;
pub mod group;
pub mod util;

use cell::Cell;
use error::{GridError, GridResult, PuzzleParseError, PuzzleParseResult};
use group::{Group, GroupKind};
use util::CandidateSet;

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::fmt::{self, Display, Error, Formatter};

/// The 1-based coordinate of a cell within a [Grid], given as row and column.
/// Coordinates order row-major, so iterating an ordered collection of them
/// walks the grid left-to-right, top-to-bottom.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq,
    PartialOrd, Serialize)]
pub struct Coord {
    row: usize,
    column: usize
}

impl Coord {

    /// Creates a new coordinate from the given row and column, both 1-based.
    pub fn new(row: usize, column: usize) -> Coord {
        Coord {
            row,
            column
        }
    }

    /// Gets the 1-based row of this coordinate.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the 1-based column of this coordinate.
    pub fn column(&self) -> usize {
        self.column
    }
}

pub(crate) fn index(coord: Coord, size: usize) -> usize {
    (coord.row - 1) * size + (coord.column - 1)
}

/// The terminal state of one [Grid::solve] run. A grid is solved or stalled
/// exactly once; there is no resume path, since a stalled puzzle requires
/// search, which this engine does not implement.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SolveOutcome {

    /// Every cell of the grid has been assigned a value.
    Solved,

    /// An entire iteration of the solve loop made no progress. This is a
    /// legitimate terminal outcome, not an error. The payload carries the
    /// residual candidate sets of all unsolved cells, in row-major order, for
    /// diagnosis.
    Stalled(Vec<(Coord, CandidateSet)>)
}

/// A Sudoku-family grid together with the constraint groups that partition
/// it and the bookkeeping that drives the deductive solve loop.
///
/// The grid owns all [Cell]s in a flat row-major vector and all [Group]s in
/// three indexed vectors; cells and groups reference each other only by
/// coordinate and index, never by owning reference. All mutation flows
/// through [Grid::assign], which performs the cell update and then explicitly
/// notifies the row, column, and box groups of the newly solved cell.
///
/// A grid lives for the duration of one solve. After [Grid::solve] returns,
/// only reads (including [Grid::verify]) are expected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    difficulty: usize,
    box_rows: usize,
    box_cols: usize,
    cells: Vec<Cell>,
    rows: Vec<Group>,
    columns: Vec<Group>,
    boxes: Vec<Group>,
    unsolved: BTreeSet<Coord>,
    solve_order: Vec<Coord>,
    solved: bool
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &Grid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.difficulty();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.box_cols == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &Grid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &Grid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &Grid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &Grid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line(grid, '║', '║', '│',
        |x| to_char(grid.value(Coord::new(y + 1, x + 1)).unwrap()), ' ', '║',
        true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.difficulty();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.box_rows == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(value: Option<usize>) -> String {
    if let Some(number) = value {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl Grid {

    fn box_dimensions(difficulty: usize) -> GridResult<(usize, usize)> {
        if difficulty == 6 {
            return Ok((2, 3));
        }

        // The candidate bit set bounds the difficulty to 64, so the root is
        // at most 8.
        (1..=8usize).find(|&root| root * root == difficulty)
            .map(|root| (root, root))
            .ok_or(GridError::InvalidDifficulty)
    }

    /// Creates a new grid of the given difficulty and applies the known
    /// values through the ordinary assignment path, so constraint
    /// propagation from the knowns happens immediately.
    ///
    /// # Arguments
    ///
    /// * `difficulty`: The side length N of the grid. Must be a perfect
    /// square no greater than 64, or 6 (which uses a 2x3 box layout).
    /// * `known`: The initially known cells as coordinate-value pairs. The
    /// pairs are applied in order.
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidDifficulty` if `difficulty` is unsupported.
    /// * `GridError::Structural` if a group does not receive exactly N member
    /// cells during wiring. This indicates a defect in the box-index
    /// computation, not bad input, and is checked before any known value is
    /// applied.
    /// * Any error raised by [Grid::assign] for a known value, most notably
    /// `GridError::InvalidValue` for out-of-range values and conflicting
    /// duplicate coordinates.
    pub fn new(difficulty: usize, known: &[(Coord, usize)])
            -> GridResult<Grid> {
        let (box_rows, box_cols) = Grid::box_dimensions(difficulty)?;
        let mut rows: Vec<Group> = (1..=difficulty)
            .map(|i| Group::new(GroupKind::Row, i))
            .collect();
        let mut columns: Vec<Group> = (1..=difficulty)
            .map(|i| Group::new(GroupKind::Column, i))
            .collect();
        let mut boxes: Vec<Group> = (1..=difficulty)
            .map(|i| Group::new(GroupKind::Box, i))
            .collect();
        let mut cells = Vec::with_capacity(difficulty * difficulty);
        let mut unsolved = BTreeSet::new();

        for row in 1..=difficulty {
            for column in 1..=difficulty {
                let coord = Coord::new(row, column);
                let box_index =
                    compute_box_index(coord, difficulty, box_rows, box_cols);

                cells.push(Cell::new(coord, difficulty));
                rows[row - 1].push_member(coord);
                columns[column - 1].push_member(coord);
                boxes[box_index - 1].push_member(coord);
                unsolved.insert(coord);
            }
        }

        for group in rows.iter().chain(columns.iter()).chain(boxes.iter()) {
            group.verify_wiring(difficulty)?;
        }

        let mut grid = Grid {
            difficulty,
            box_rows,
            box_cols,
            cells,
            rows,
            columns,
            boxes,
            unsolved,
            solve_order: Vec::new(),
            solved: false
        };

        for &(coord, value) in known {
            grid.assign(coord, value)?;
        }

        Ok(grid)
    }

    /// Parses a code encoding a puzzle. The code has to be of the format
    /// `<difficulty>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a value. The entries are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. Whitespace in the entries is ignored to allow for
    /// more intuitive formatting. The number of entries must be the square of
    /// the difficulty.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `PuzzleParseError` (see that documentation).
    pub fn parse(code: &str) -> PuzzleParseResult<Grid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(PuzzleParseError::WrongNumberOfParts);
        }

        let difficulty = parts[0].trim().parse::<usize>()?;
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != difficulty * difficulty {
            return Err(PuzzleParseError::WrongNumberOfCells);
        }

        let mut known = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let value = entry.parse::<usize>()?;

            if value == 0 || value > difficulty {
                return Err(PuzzleParseError::InvalidValue);
            }

            let coord =
                Coord::new(i / difficulty + 1, i % difficulty + 1);
            known.push((coord, value));
        }

        // Entry coordinates are unique and values range-checked above, so
        // only the difficulty itself can be rejected here.
        Grid::new(difficulty, &known)
            .map_err(|_| PuzzleParseError::InvalidDifficulty)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will hold the same values.
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.difficulty);
        let cells = self.cells.iter()
            .map(|cell| to_string(cell.value()))
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    fn verified_index(&self, coord: Coord) -> GridResult<usize> {
        if coord.row == 0 || coord.row > self.difficulty ||
                coord.column == 0 || coord.column > self.difficulty {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(index(coord, self.difficulty))
        }
    }

    fn cell_at(&self, coord: Coord) -> &Cell {
        &self.cells[index(coord, self.difficulty)]
    }

    fn cell_at_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[index(coord, self.difficulty)]
    }

    /// Gets the side length N of this grid, which is also the number of
    /// groups of each kind and the highest assignable value.
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Gets the number of rows spanned by one box of this grid. This is √N
    /// for perfect-square difficulties and 2 for difficulty 6.
    pub fn box_rows(&self) -> usize {
        self.box_rows
    }

    /// Gets the number of columns spanned by one box of this grid. This is
    /// √N for perfect-square difficulties and 3 for difficulty 6.
    pub fn box_cols(&self) -> usize {
        self.box_cols
    }

    /// Indicates whether every cell of this grid has been solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Gets the coordinates of all cells that have been solved so far, in the
    /// order they were solved. Known cells given at construction come first,
    /// in the order they were supplied.
    pub fn solve_order(&self) -> &[Coord] {
        &self.solve_order
    }

    /// Gets the set of coordinates of all cells that are not yet solved. The
    /// set iterates in row-major order.
    pub fn unsolved_cells(&self) -> &BTreeSet<Coord> {
        &self.unsolved
    }

    /// Gets the full value grid in row-major order, with `None` for unsolved
    /// cells.
    pub fn values(&self) -> Vec<Option<usize>> {
        self.cells.iter().map(Cell::value).collect()
    }

    /// Gets the cell at the specified coordinate.
    ///
    /// # Errors
    ///
    /// If `coord` lies outside the grid. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn cell(&self, coord: Coord) -> GridResult<&Cell> {
        let index = self.verified_index(coord)?;
        Ok(&self.cells[index])
    }

    /// Gets the value of the cell at the specified coordinate, or `None` if
    /// that cell is not yet solved.
    ///
    /// # Errors
    ///
    /// If `coord` lies outside the grid. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn value(&self, coord: Coord) -> GridResult<Option<usize>> {
        Ok(self.cell(coord)?.value())
    }

    /// Gets the candidate set of the cell at the specified coordinate. For
    /// solved cells, this set is empty.
    ///
    /// # Errors
    ///
    /// If `coord` lies outside the grid. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn candidates(&self, coord: Coord) -> GridResult<&CandidateSet> {
        Ok(self.cell(coord)?.candidates())
    }

    /// Gets the group of the given kind with the given 1-based index.
    ///
    /// # Errors
    ///
    /// If `index` is zero or greater than the difficulty. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn group(&self, kind: GroupKind, index: usize) -> GridResult<&Group> {
        if index == 0 || index > self.difficulty {
            return Err(GridError::OutOfBounds);
        }

        let groups = match kind {
            GroupKind::Row => &self.rows,
            GroupKind::Column => &self.columns,
            GroupKind::Box => &self.boxes
        };

        Ok(&groups[index - 1])
    }

    fn group_mut(&mut self, kind: GroupKind, index: usize) -> &mut Group {
        let groups = match kind {
            GroupKind::Row => &mut self.rows,
            GroupKind::Column => &mut self.columns,
            GroupKind::Box => &mut self.boxes
        };

        &mut groups[index - 1]
    }

    /// Computes the 1-based index of the box group containing the given
    /// coordinate. This mapping is pure and consistent with the group wiring
    /// done at construction.
    ///
    /// # Errors
    ///
    /// If `coord` lies outside the grid. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn box_of(&self, coord: Coord) -> GridResult<usize> {
        self.verified_index(coord)?;
        Ok(compute_box_index(coord, self.difficulty, self.box_rows,
            self.box_cols))
    }

    /// Assigns the given value to the cell at the given coordinate. This is
    /// the single mutation channel of the grid: it fixes the cell value,
    /// clears its candidates, updates the unsolved set, the solve order, and
    /// the solved flag, and then notifies the cell's row, column, and box
    /// groups so the value is removed from the candidates of all sibling
    /// cells.
    ///
    /// Assigning an already-solved cell the same value again is an idempotent
    /// no-op; the solve order and unsolved set are left untouched.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` if `coord` lies outside the grid.
    /// * `GridError::InvalidValue` if `value` is zero or greater than the
    /// difficulty, or if the cell is already solved with a different value.
    pub fn assign(&mut self, coord: Coord, value: usize) -> GridResult<()> {
        let index = self.verified_index(coord)?;

        if value == 0 || value > self.difficulty {
            return Err(GridError::InvalidValue {
                coord,
                value
            });
        }

        if let Some(existing) = self.cells[index].value() {
            if existing == value {
                return Ok(());
            }

            return Err(GridError::InvalidValue {
                coord,
                value
            });
        }

        self.cells[index].set_value(value);
        self.unsolved.remove(&coord);
        self.solve_order.push(coord);

        if self.unsolved.is_empty() {
            self.solved = true;
        }

        let box_index = self.box_of(coord).unwrap();
        self.check_solve(GroupKind::Row, coord.row, value);
        self.check_solve(GroupKind::Column, coord.column, value);
        self.check_solve(GroupKind::Box, box_index, value);

        Ok(())
    }

    /// Assigns the given value to the cell at the given coordinate if, and
    /// only if, the value is still among that cell's candidates; otherwise
    /// nothing happens. This is the safe assignment path used when a group
    /// has deduced a forced value.
    ///
    /// Returns whether the assignment took place.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` if `coord` lies outside the grid.
    /// * `GridError::InvalidValue` if `value` is zero or greater than the
    /// difficulty.
    pub fn try_assign(&mut self, coord: Coord, value: usize)
            -> GridResult<bool> {
        let index = self.verified_index(coord)?;

        if value == 0 || value > self.difficulty {
            return Err(GridError::InvalidValue {
                coord,
                value
            });
        }

        if self.cells[index].candidates().contains(value) {
            self.assign(coord, value)?;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the newly assigned value from the candidates of all unsolved
    /// members of the given group and raises the group's solved flag once
    /// every member is solved. This propagation is the only channel by which
    /// one cell's solution affects its siblings.
    fn check_solve(&mut self, kind: GroupKind, index: usize, value: usize) {
        let members = self.group(kind, index).unwrap().members().to_vec();
        let mut all_solved = true;

        for coord in members {
            let cell = self.cell_at_mut(coord);

            if !cell.is_solved() {
                all_solved = false;
                cell.remove_candidate(value);
            }
        }

        if all_solved {
            self.group_mut(kind, index).mark_solved();
        }
    }

    /// Removes `value` from the candidates of every cell of the given group
    /// except the two kept coordinates. Returns whether any candidate was
    /// actually removed.
    fn eliminate_except(&mut self, kind: GroupKind, index: usize,
            value: usize, keep_a: Coord, keep_b: Coord) -> bool {
        let members = self.group(kind, index).unwrap().members().to_vec();
        let mut progress = false;

        for coord in members {
            if coord == keep_a || coord == keep_b {
                continue;
            }

            progress |= self.cell_at_mut(coord).remove_candidate(value);
        }

        progress
    }

    /// The core deductive step, run once per group per outer iteration of the
    /// solve loop. For each value, the members still holding it as a
    /// candidate are counted. Exactly one holder forces a hidden single;
    /// exactly two holders that share a row, column, or box allow the value
    /// to be eliminated from the rest of each aligned group.
    ///
    /// The pair rule deliberately only fires on the two holders found within
    /// the group being scanned and applies each alignment independently. This
    /// is a restricted form of pointing-pair elimination, not full
    /// hidden-pair logic across two values, and is preserved exactly.
    ///
    /// Returns whether any assignment or candidate removal occurred.
    fn propagate(&mut self, kind: GroupKind, index: usize) -> bool {
        let members = self.group(kind, index).unwrap().members().to_vec();
        let mut progress = false;

        for value in 1..=self.difficulty {
            let mut first = None;
            let mut last = None;
            let mut count = 0;

            for &coord in &members {
                if self.cell_at(coord).candidates().contains(value) {
                    count += 1;

                    if first.is_none() {
                        first = Some(coord);
                    }
                    else {
                        last = Some(coord);
                    }
                }
            }

            if count == 2 {
                let a = first.unwrap();
                let b = last.unwrap();

                if a.row() == b.row() {
                    progress |= self.eliminate_except(GroupKind::Row,
                        a.row(), value, a, b);
                }

                if a.column() == b.column() {
                    progress |= self.eliminate_except(GroupKind::Column,
                        a.column(), value, a, b);
                }

                let box_a = self.box_of(a).unwrap();

                if box_a == self.box_of(b).unwrap() {
                    progress |= self.eliminate_except(GroupKind::Box, box_a,
                        value, a, b);
                }
            }

            if count == 1 {
                self.try_assign(first.unwrap(), value).unwrap();
                progress = true;
            }
        }

        progress
    }

    /// Runs the fixed-point solve loop. Each iteration first assigns every
    /// unsolved cell with exactly one remaining candidate (naked singles),
    /// then runs propagation on every row, then every column, then every
    /// box. The loop terminates when no unsolved cells remain or when an
    /// entire iteration produces no progress.
    ///
    /// Termination is guaranteed: every productive iteration either assigns
    /// a cell or removes at least one candidate, and both are in finite
    /// supply.
    pub fn solve(&mut self) -> SolveOutcome {
        while !self.solved {
            let mut progress = false;
            let unsolved: Vec<Coord> = self.unsolved.iter().copied().collect();

            for coord in unsolved {
                let single = {
                    let candidates = self.cell_at(coord).candidates();

                    if candidates.len() == 1 {
                        candidates.iter().next()
                    }
                    else {
                        None
                    }
                };

                if let Some(value) = single {
                    self.assign(coord, value).unwrap();
                    progress = true;
                }
            }

            for index in 1..=self.difficulty {
                progress |= self.propagate(GroupKind::Row, index);
            }

            for index in 1..=self.difficulty {
                progress |= self.propagate(GroupKind::Column, index);
            }

            for index in 1..=self.difficulty {
                progress |= self.propagate(GroupKind::Box, index);
            }

            if !progress {
                return SolveOutcome::Stalled(self.residual_candidates());
            }
        }

        SolveOutcome::Solved
    }

    /// Gets the residual candidate sets of all unsolved cells in row-major
    /// order. This is the diagnostic payload of a stalled solve.
    pub fn residual_candidates(&self) -> Vec<(Coord, CandidateSet)> {
        self.unsolved.iter()
            .map(|&coord| (coord, self.cell_at(coord).candidates().clone()))
            .collect()
    }

    /// Checks that every row, column, and box of this grid holds every value
    /// from 1 to the difficulty exactly once. This is the functional
    /// correctness oracle for a completed solve and can be run on any grid;
    /// unsolved cells surface as missing values.
    ///
    /// # Errors
    ///
    /// `GridError::ConstraintViolation` naming the first violated group and
    /// the duplicated or missing value. Violations are reported, never
    /// auto-corrected: they signal either contradictory known values or an
    /// engine defect.
    pub fn verify(&self) -> GridResult<()> {
        let groups = self.rows.iter()
            .chain(self.columns.iter())
            .chain(self.boxes.iter());

        for group in groups {
            let values = group.members().iter()
                .map(|&coord| self.cell_at(coord).value());
            group.check_values(self.difficulty, values)?;
        }

        Ok(())
    }
}

fn compute_box_index(coord: Coord, difficulty: usize, box_rows: usize,
        box_cols: usize) -> usize {
    let i = coord.row - 1;
    let j = coord.column - 1;
    let boxes_per_band = difficulty / box_cols;
    1 + (i / box_rows) * boxes_per_band + j / box_cols
}
