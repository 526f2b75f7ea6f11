//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [CandidateSet] used for
//! storing the values still logically possible for an unsolved cell.

use serde::{Deserialize, Serialize};

/// A set of candidate values in the range from 1 to the grid's difficulty,
/// implemented as a bit mask over a single 64-bit word. This bounds the
/// supported difficulty to 64, which is far beyond any printable grid, and
/// generally has better performance than a `HashSet`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CandidateSet {
    size: usize,
    bits: u64
}

/// An enumeration of the errors that can happen when using a [CandidateSet].
#[derive(Debug, Eq, PartialEq)]
pub enum CandidateSetError {

    /// Indicates that the size provided in the constructor is invalid, that
    /// is, zero or greater than 64.
    InvalidSize,

    /// Indicates that a value that was queried to be inserted or removed is
    /// outside the range from 1 to the size of the `CandidateSet` in
    /// question.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, CandidateSetError>`.
pub type CandidateSetResult<V> = Result<V, CandidateSetError>;

/// An iterator over the values contained in a [CandidateSet], in ascending
/// order.
pub struct CandidateSetIter {
    bits: u64
}

impl Iterator for CandidateSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            None
        }
        else {
            let value = self.bits.trailing_zeros() as usize + 1;
            self.bits &= self.bits - 1;
            Some(value)
        }
    }
}

impl CandidateSet {

    fn check_size(size: usize) -> CandidateSetResult<()> {
        if size == 0 || size > 64 {
            Err(CandidateSetError::InvalidSize)
        }
        else {
            Ok(())
        }
    }

    /// Creates a new, empty `CandidateSet` that can hold the values from 1 to
    /// `size` (inclusive).
    ///
    /// # Errors
    ///
    /// If `size` is zero or greater than 64. In that case, a
    /// `CandidateSetError::InvalidSize` is returned.
    pub fn new(size: usize) -> CandidateSetResult<CandidateSet> {
        CandidateSet::check_size(size)?;

        Ok(CandidateSet {
            size,
            bits: 0
        })
    }

    /// Creates a new `CandidateSet` that contains every value from 1 to
    /// `size` (inclusive). This is the initial candidate set of an unsolved
    /// cell.
    ///
    /// # Errors
    ///
    /// If `size` is zero or greater than 64. In that case, a
    /// `CandidateSetError::InvalidSize` is returned.
    pub fn full(size: usize) -> CandidateSetResult<CandidateSet> {
        CandidateSet::check_size(size)?;
        let bits = if size == 64 { !0u64 } else { (1u64 << size) - 1 };

        Ok(CandidateSet {
            size,
            bits
        })
    }

    fn mask(&self, value: usize) -> CandidateSetResult<u64> {
        if value == 0 || value > self.size {
            Err(CandidateSetError::OutOfBounds)
        }
        else {
            Ok(1u64 << (value - 1))
        }
    }

    /// Returns the highest value that this set can contain, i.e. the
    /// difficulty of the grid it belongs to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Indicates whether this set contains the given value, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// bounds, `false` will be returned.
    pub fn contains(&self, value: usize) -> bool {
        if let Ok(mask) = self.mask(value) {
            self.bits & mask > 0
        }
        else {
            false
        }
    }

    /// Inserts the given value into this set, such that
    /// [CandidateSet::contains] returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the value was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `value` is zero or greater than [CandidateSet::size]. In that case,
    /// `CandidateSetError::OutOfBounds` is returned.
    pub fn insert(&mut self, value: usize) -> CandidateSetResult<bool> {
        let mask = self.mask(value)?;
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        Ok(changed)
    }

    /// Removes the given value from this set, such that
    /// [CandidateSet::contains] returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the value was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `value` is zero or greater than [CandidateSet::size]. In that case,
    /// `CandidateSetError::OutOfBounds` is returned.
    pub fn remove(&mut self, value: usize) -> CandidateSetResult<bool> {
        let mask = self.mask(value)?;
        let changed = self.bits & mask > 0;
        self.bits &= !mask;
        Ok(changed)
    }

    /// Removes all values from this set, such that [CandidateSet::contains]
    /// will return `false` for all inputs and [CandidateSet::is_empty] will
    /// return `true`.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns an iterator over the values contained in this set in ascending
    /// order.
    pub fn iter(&self) -> CandidateSetIter {
        CandidateSetIter {
            bits: self.bits
        }
    }

    /// Indicates whether this set is empty, i.e. contains no values. If this
    /// method returns `true`, [CandidateSet::contains] will return `false`
    /// for all inputs.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of values contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

/// Creates a new [CandidateSet] that contains the specified values. First,
/// the size must be specified. Then, after a semicolon, a comma-separated
/// list of the contained values must be provided. For empty sets,
/// [CandidateSet::new] can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_deduction::candidates;
///
/// let set = candidates!(9; 2, 4);
/// assert_eq!(9, set.size());
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// ```
#[macro_export]
macro_rules! candidates {
    ($size:expr; $($es:expr),+) => {
        {
            let mut set = $crate::util::CandidateSet::new($size).unwrap();
            $(set.insert($es).unwrap();)+
            set
        }
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = CandidateSet::new(9).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(5));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn full_set_contains_entire_range() {
        let set = CandidateSet::full(9).unwrap();
        assert!(!set.is_empty());
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
        assert!(!set.contains(0));
        assert!(!set.contains(10));
        assert_eq!(9, set.len());
    }

    #[test]
    fn full_set_of_maximum_size() {
        let set = CandidateSet::full(64).unwrap();
        assert_eq!(64, set.len());
        assert!(set.contains(1));
        assert!(set.contains(64));
    }

    #[test]
    fn set_creation_error() {
        assert_eq!(Err(CandidateSetError::InvalidSize), CandidateSet::new(0));
        assert_eq!(Err(CandidateSetError::InvalidSize),
            CandidateSet::new(65));
        assert_eq!(Err(CandidateSetError::InvalidSize), CandidateSet::full(0));
    }

    #[test]
    fn set_insertion_error() {
        let mut set = CandidateSet::new(5).unwrap();
        assert_eq!(Err(CandidateSetError::OutOfBounds), set.insert(0));
        assert_eq!(Err(CandidateSetError::OutOfBounds), set.insert(6));
    }

    #[test]
    fn manipulation() {
        let mut set = CandidateSet::new(9).unwrap();
        set.insert(2).unwrap();
        set.insert(4).unwrap();
        set.insert(6).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(set.contains(6));
        assert_eq!(3, set.len());

        set.remove(4).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(!set.contains(4));
        assert!(set.contains(6));
        assert_eq!(2, set.len());

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(2));
        assert!(!set.contains(6));
        assert_eq!(0, set.len());
    }

    #[test]
    fn double_insert() {
        let mut set = CandidateSet::new(9).unwrap();
        assert!(set.insert(3).unwrap());
        assert!(set.insert(4).unwrap());
        assert!(!set.insert(3).unwrap());

        assert!(set.contains(3));
        assert_eq!(2, set.len());
    }

    #[test]
    fn double_remove() {
        let mut set = CandidateSet::full(9).unwrap();
        assert!(set.remove(3).unwrap());
        assert!(set.remove(5).unwrap());
        assert!(!set.remove(3).unwrap());

        assert!(!set.contains(3));
        assert_eq!(7, set.len());
    }

    #[test]
    fn iteration() {
        let set = candidates!(16; 1, 3, 7, 12, 16);
        let mut iter = set.iter();

        assert_eq!(Some(1), iter.next());
        assert_eq!(Some(3), iter.next());
        assert_eq!(Some(7), iter.next());
        assert_eq!(Some(12), iter.next());
        assert_eq!(Some(16), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn empty_iteration() {
        let set = CandidateSet::new(4).unwrap();
        assert_eq!(None, set.iter().next());
    }

    #[test]
    fn candidates_macro_has_specified_size() {
        let set = candidates!(6; 3);
        assert_eq!(6, set.size());
        assert_eq!(1, set.len());
    }
}
