//! An indexable binary heap. Every element lives at a known index of the
//! backing array so, besides the usual `insert`/`extract`, any element can
//! have its value changed or be removed outright.
//!
//! The same code serves both min-heaps and max-heaps: the heap is written as
//! a max-heap and a min-heap simply reverses every comparison.
//!
//! # Examples
//!
//! ```
//! use ordkit::heap::Heap;
//!
//! let mut heap = Heap::min();
//! heap.insert(5);
//! heap.insert(1);
//! heap.insert(3);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! // Make the 5 the smallest value in the heap...
//! let five = heap.iter().position(|&x| x == 5).unwrap();
//! assert_eq!(heap.change_value(five, 0), 5);
//! assert_eq!(heap.extract(), Ok(0));
//!
//! // ...and drop the 3 without touching the top.
//! let three = heap.iter().position(|&x| x == 3).unwrap();
//! assert_eq!(heap.remove(three), 3);
//!
//! assert_eq!(heap.extract(), Ok(1));
//! assert!(heap.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use compare::{natural, Compare, Natural};

use crate::error::{Error, Result};

/// Whether the smallest or the largest element sits at the top of a [`Heap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Smaller elements are sorted to the top.
    Min,
    /// Larger elements are sorted to the top.
    Max,
}

impl Polarity {
    /// Adjusts a comparison made in "max-heap terms" for this polarity.
    fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Polarity::Max => ordering,
            Polarity::Min => ordering.reverse(),
        }
    }

    /// The sentinel that beats every real value under this polarity.
    fn extreme<T>(self) -> Slot<T> {
        match self {
            Polarity::Max => Slot::ExtremeHigh,
            Polarity::Min => Slot::ExtremeLow,
        }
    }
}

/// A single entry of the backing array. The two extremes only ever exist in
/// the middle of a [`Heap::remove`] call.
#[derive(Clone)]
enum Slot<T> {
    Value(T),
    /// Compares less than every value.
    ExtremeLow,
    /// Compares greater than every value.
    ExtremeHigh,
}

impl<T> Slot<T> {
    fn value(&self) -> &T {
        match self {
            Slot::Value(value) => value,
            Slot::ExtremeLow | Slot::ExtremeHigh => {
                unreachable!("Sentinels never outlive a removal.")
            }
        }
    }

    fn into_value(self) -> T {
        match self {
            Slot::Value(value) => value,
            Slot::ExtremeLow | Slot::ExtremeHigh => {
                unreachable!("Sentinels never outlive a removal.")
            }
        }
    }

    /// Where this slot sits relative to real values, ignoring the value
    /// itself.
    fn rank(&self) -> u8 {
        match self {
            Slot::ExtremeLow => 0,
            Slot::Value(_) => 1,
            Slot::ExtremeHigh => 2,
        }
    }
}

/// A binary min- or max-heap supporting changes and removals at arbitrary
/// indices. Elements are ordered by a [`Compare`] implementation, [`Natural`]
/// ordering unless one is given.
#[derive(Clone)]
pub struct Heap<T, C = Natural<T>> {
    polarity: Polarity,
    slots: Vec<Slot<T>>,
    comparer: C,
}

impl<T> Heap<T>
where
    T: Ord,
{
    /// Generates a new, empty `Heap` with the given polarity.
    pub fn new(polarity: Polarity) -> Self {
        Self::with_capacity(polarity, 0)
    }

    /// Generates a new, empty min-heap.
    pub fn min() -> Self {
        Self::new(Polarity::Min)
    }

    /// Generates a new, empty max-heap.
    pub fn max() -> Self {
        Self::new(Polarity::Max)
    }

    /// Generates a new, empty `Heap` with room for at least `capacity`
    /// elements before reallocating.
    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        Self::with_comparer(polarity, capacity, natural())
    }
}

impl<T, C> Heap<T, C>
where
    C: Compare<T>,
{
    /// Generates a new, empty `Heap` ordered by `comparer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::heap::{Heap, Polarity};
    ///
    /// // A max-heap on string length.
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let mut heap = Heap::with_comparer(Polarity::Max, 4, by_len);
    /// heap.insert("a");
    /// heap.insert("abc");
    /// heap.insert("ab");
    ///
    /// assert_eq!(heap.extract(), Ok("abc"));
    /// ```
    pub fn with_comparer(polarity: Polarity, capacity: usize, comparer: C) -> Self {
        Self {
            polarity,
            slots: Vec::with_capacity(capacity),
            comparer,
        }
    }

    /// The polarity this heap was built with.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the element stored at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(Slot::value)
    }

    /// Iterates over the elements in storage order, i.e. `heap[0]`,
    /// `heap[1]`, ... This is *not* sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().map(Slot::value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Inserts `value` into the heap in `O(lg N)`.
    pub fn insert(&mut self, value: T) {
        self.slots.push(Slot::Value(value));
        self.sift_up(self.slots.len() - 1);
    }

    /// Returns the top element without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::{heap::Heap, Error};
    ///
    /// let mut heap = Heap::max();
    /// assert_eq!(heap.peek(), Err(Error::EmptyContainer));
    ///
    /// heap.insert(1);
    /// heap.insert(2);
    /// assert_eq!(heap.peek(), Ok(&2));
    /// ```
    pub fn peek(&self) -> Result<&T> {
        self.slots
            .first()
            .map(Slot::value)
            .ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the top element in `O(lg N)`.
    pub fn extract(&mut self) -> Result<T> {
        if self.slots.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.pop_top().into_value())
    }

    /// Replaces the top element with `value`, returning the old top element.
    pub fn change_top(&mut self, value: T) -> Result<T> {
        if self.slots.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.change_value(0, value))
    }

    /// Replaces the element at `index` with `value` and moves it to wherever
    /// it now belongs. Returns the replaced element.
    ///
    /// ## Panics
    ///
    /// When `index` is out of bounds.
    pub fn change_value(&mut self, index: usize, value: T) -> T {
        let old = std::mem::replace(&mut self.slots[index], Slot::Value(value));

        // The new value can only have to travel in one direction.
        if self.compare(&self.slots[index], &old) == Ordering::Greater {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }

        old.into_value()
    }

    /// Removes and returns the element at `index` in `O(lg N)`.
    ///
    /// The element is replaced by a sentinel that beats every other element,
    /// which is sifted all the way up to the top and then extracted like any
    /// other top element.
    ///
    /// ## Panics
    ///
    /// When `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let sentinel = self.polarity.extreme();
        let removed = std::mem::replace(&mut self.slots[index], sentinel);
        self.sift_up(index);

        let top = self.pop_top();
        debug_assert!(matches!(top, Slot::ExtremeLow | Slot::ExtremeHigh));

        removed.into_value()
    }

    /// Takes the top slot out, moving the last slot into its place and
    /// sifting it down. The heap must not be empty.
    fn pop_top(&mut self) -> Slot<T> {
        let top = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Compares two slots so that `Greater` means "belongs closer to the top".
    fn compare(&self, lhs: &Slot<T>, rhs: &Slot<T>) -> Ordering {
        let ordering = match (lhs, rhs) {
            (Slot::Value(lhs), Slot::Value(rhs)) => self.comparer.compare(lhs, rhs),
            _ => lhs.rank().cmp(&rhs.rank()),
        };
        self.polarity.orient(ordering)
    }

    fn is_better(&self, lhs: usize, rhs: usize) -> bool {
        self.compare(&self.slots[lhs], &self.slots[rhs]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = Self::parent(index) {
            if !self.is_better(index, parent) {
                break;
            }
            self.slots.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut best = index;
            for child in [Self::left_child(index), Self::right_child(index)] {
                if child < self.slots.len() && self.is_better(child, best) {
                    best = child;
                }
            }
            if best == index {
                break;
            }
            self.slots.swap(index, best);
            index = best;
        }

        if cfg!(debug_assertions) {
            if let Some(parent) = Self::parent(index) {
                assert!(!self.is_better(index, parent));
            }
        }
    }
}

impl<T, C> Heap<T, C> {
    /// Calculates the index of the parent of the `index`-th element. The top
    /// element has no parent.
    pub const fn parent(index: usize) -> Option<usize> {
        if Self::is_root(index) {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Calculates the index of the left child of the `index`-th element.
    pub const fn left_child(index: usize) -> usize {
        2 * index + 1
    }

    /// Calculates the index of the right child of the `index`-th element.
    pub const fn right_child(index: usize) -> usize {
        2 * index + 2
    }

    /// Whether `index` is the index of the top element.
    pub const fn is_root(index: usize) -> bool {
        index == 0
    }
}

impl<T, C> Index<usize> for Heap<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.slots[index].value()
    }
}

impl<T, C> Extend<T> for Heap<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> fmt::Debug for Heap<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("polarity", &self.polarity)
            .field(
                "values",
                &self.slots.iter().map(Slot::value).collect::<Vec<_>>(),
            )
            .finish()
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::HeapOp;

    /// Applies `ops` to a heap and to a plain vector, checking that both agree
    /// on every returned value and that the heap property survives each step.
    fn do_ops(polarity: Polarity, ops: &[HeapOp<i8>]) -> bool {
        let mut heap = Heap::new(polarity);
        let mut model: Vec<i8> = Vec::new();
        let top = |model: &[i8]| match polarity {
            Polarity::Min => model.iter().min().copied(),
            Polarity::Max => model.iter().max().copied(),
        };
        let forget = |model: &mut Vec<i8>, value: i8| {
            let position = model.iter().position(|&v| v == value).unwrap();
            model.swap_remove(position);
        };

        for op in ops {
            match *op {
                HeapOp::Insert(value) => {
                    heap.insert(value);
                    model.push(value);
                }
                HeapOp::Extract => match top(&model) {
                    Some(expected) => {
                        assert_eq!(heap.extract(), Ok(expected));
                        forget(&mut model, expected);
                    }
                    None => assert_eq!(heap.extract(), Err(Error::EmptyContainer)),
                },
                HeapOp::Change(which, value) => {
                    if model.is_empty() {
                        continue;
                    }
                    let old = heap.change_value(which % heap.len(), value);
                    forget(&mut model, old);
                    model.push(value);
                }
                HeapOp::Remove(which) => {
                    if model.is_empty() {
                        continue;
                    }
                    let removed = heap.remove(which % heap.len());
                    forget(&mut model, removed);
                }
            }

            assert_heap(&heap);
            assert_eq!(heap.len(), model.len());
            assert_eq!(heap.peek().ok().copied(), top(&model));
        }

        true
    }

    fn assert_heap<T, C: Compare<T>>(heap: &Heap<T, C>) {
        for index in 1..heap.len() {
            let parent = Heap::<T, C>::parent(index).unwrap();
            assert!(!heap.is_better(index, parent));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_min_heap(ops: Vec<HeapOp<i8>>) -> bool {
            do_ops(Polarity::Min, &ops)
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_max_heap(ops: Vec<HeapOp<i8>>) -> bool {
            do_ops(Polarity::Max, &ops)
        }
    }
}
