//! Hoare's selection algorithm ("quickselect") for finding the `n`-th
//! smallest element of a slice in expected `O(N)` time.
//!
//! As a side effect the slice is left partially ordered around the selected
//! element: everything after it is greater or equal and everything before it
//! is smaller. "Smaller" is strict when the elements are distinct; equal
//! elements may end up on either side.
//!
//! # Examples
//!
//! ```
//! use ordkit::quickselect::Quickselect;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut values = [5, 3, 1, 4, 2];
//! let mut select = Quickselect::with_rng(StdRng::seed_from_u64(7));
//!
//! // The third smallest element.
//! let index = select.select(&mut values, 2).unwrap();
//! assert_eq!(values[index], 3);
//! assert!(values[..index].iter().all(|&x| x < 3));
//! assert!(values[index + 1..].iter().all(|&x| x >= 3));
//! ```

use std::cmp::Ordering;

use compare::{natural, Compare};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Selects the `n`-th smallest element (counting from zero) of `slice`
/// using the thread-local random number generator and the natural ordering
/// of `T`. Returns the index the element ends up at.
///
/// # Examples
///
/// ```
/// use ordkit::{quickselect, Error};
///
/// let mut values = vec![9, 4, 7];
/// let index = quickselect::select(&mut values, 0).unwrap();
/// assert_eq!(values[index], 4);
///
/// assert_eq!(
///     quickselect::select(&mut values, 3),
///     Err(Error::OutOfRange { index: 3, len: 3 })
/// );
/// ```
pub fn select<T>(slice: &mut [T], n: usize) -> Result<usize>
where
    T: Ord,
{
    Quickselect::with_rng(rand::thread_rng()).select(slice, n)
}

/// Quickselect with an injectable random source for pivot selection. Seed
/// the random source for reproducible partitions.
#[derive(Clone, Debug)]
pub struct Quickselect<R = StdRng> {
    rng: R,
}

impl Quickselect {
    /// A quickselect using a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Quickselect {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Quickselect<R>
where
    R: Rng,
{
    /// A quickselect drawing pivots from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Selects the `n`-th smallest element (counting from zero) of `slice`
    /// by repeatedly narrowing a window around it. Returns the index the
    /// element ends up at, which is always `n`.
    ///
    /// Fails with [`Error::OutOfRange`] unless `n < slice.len()`.
    pub fn select<T>(&mut self, slice: &mut [T], n: usize) -> Result<usize>
    where
        T: Ord,
    {
        self.select_by(slice, n, natural())
    }

    /// Same as [`Quickselect::select`] but orders elements with `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::quickselect::Quickselect;
    ///
    /// let mut values = ["ccc", "a", "bb"];
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    ///
    /// let index = Quickselect::new().select_by(&mut values, 2, by_len).unwrap();
    /// assert_eq!(values[index], "ccc");
    /// ```
    pub fn select_by<T, C>(&mut self, slice: &mut [T], n: usize, cmp: C) -> Result<usize>
    where
        C: Compare<T>,
    {
        check_order(slice, n)?;

        let (mut left, mut right) = (0, slice.len() - 1);
        loop {
            if left == right {
                return Ok(left);
            }

            let pivot = self.partition(slice, left, right, &cmp);
            match n.cmp(&pivot) {
                Ordering::Equal => return Ok(pivot),
                Ordering::Less => right = pivot - 1,
                Ordering::Greater => left = pivot + 1,
            }
        }
    }

    /// Same as [`Quickselect::select`] but narrows the window by recursing.
    /// Both produce the same result for the same random source.
    ///
    /// Each partition step adds a stack frame, so inputs that partition badly
    /// (e.g. long runs of equal elements) recurse up to `slice.len()` deep
    /// and can overflow the stack. Prefer [`Quickselect::select`] for large
    /// inputs.
    pub fn select_recursive<T>(&mut self, slice: &mut [T], n: usize) -> Result<usize>
    where
        T: Ord,
    {
        self.select_recursive_by(slice, n, natural())
    }

    /// Same as [`Quickselect::select_recursive`] but orders elements with
    /// `cmp`.
    pub fn select_recursive_by<T, C>(
        &mut self,
        slice: &mut [T],
        n: usize,
        cmp: C,
    ) -> Result<usize>
    where
        C: Compare<T>,
    {
        check_order(slice, n)?;
        let right = slice.len() - 1;
        Ok(self.select_between(slice, 0, right, n, &cmp))
    }

    fn select_between<T, C>(
        &mut self,
        slice: &mut [T],
        left: usize,
        right: usize,
        n: usize,
        cmp: &C,
    ) -> usize
    where
        C: Compare<T>,
    {
        if left == right {
            return left;
        }

        let pivot = self.partition(slice, left, right, cmp);
        match n.cmp(&pivot) {
            Ordering::Equal => pivot,
            Ordering::Less => self.select_between(slice, left, pivot - 1, n, cmp),
            Ordering::Greater => self.select_between(slice, pivot + 1, right, n, cmp),
        }
    }

    /// Picks a random pivot in `left..=right` and partitions the window around
    /// it (Lomuto). Returns the pivot's final index.
    fn partition<T, C>(&mut self, slice: &mut [T], left: usize, right: usize, cmp: &C) -> usize
    where
        C: Compare<T>,
    {
        debug_assert!(left < right && right < slice.len());

        let pivot = self.rng.gen_range(left..=right);
        slice.swap(pivot, right);

        let mut store = left;
        for i in left..right {
            if cmp.compares_lt(&slice[i], &slice[right]) {
                slice.swap(store, i);
                store += 1;
            }
        }
        slice.swap(right, store);

        store
    }
}

fn check_order<T>(slice: &[T], n: usize) -> Result<()> {
    if n < slice.len() {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            index: n,
            len: slice.len(),
        })
    }
}
