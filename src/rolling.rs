//! A fixed-capacity history of the most recently appended values.
//!
//! [`RollingArray`] keeps the last `capacity` values passed to [`RollingArray::append`]. Once it is
//! full, every append overwrites the oldest value. Logical index `0` is always the oldest value
//! still held and `len() - 1` the latest one. Appending and indexed access are O(1), and no memory
//! is allocated after construction.
//!
//! ```
//! use grabbag::rolling::RollingArray;
//!
//! let mut history = RollingArray::new(3).unwrap();
//! for i in 1..=4 {
//!     history.append(i);
//! }
//! assert_eq!(history.to_vec(), vec![2, 3, 4]);
//! assert_eq!(history.get(0), Ok(&2));
//! assert_eq!(history.latest(), Ok(&4));
//! ```

use crate::error::{Error, Result};
use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};
use tracing::trace;

/// A ring buffer holding the last `capacity` appended values.
#[derive(Clone, Debug)]
pub struct RollingArray<T> {
    // Slots are `None` until first written. `count` bounds which of them are logically valid.
    slots: Box<[Option<T>]>,
    // Physical index of the next slot to overwrite
    cursor: usize,
    count: usize,
}

impl<T> RollingArray<T> {
    /// Construct an empty history that holds up to `capacity` values.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::configuration("rolling array capacity must be at least one"));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            cursor: 0,
            count: 0,
        })
    }

    /// The maximum number of values held.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of values currently held.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no values are held.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the next append will overwrite the oldest value.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Append a value, overwriting the oldest one if the history is full.
    pub fn append(&mut self, value: T) {
        self.slots[self.cursor] = Some(value);
        self.cursor = (self.cursor + 1) % self.capacity();
        if self.count < self.capacity() {
            self.count += 1;
        }
    }

    /// Get the value at logical index `index`; `0` is the oldest.
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.physical(index)?;
        self.slots[slot].as_ref().ok_or_else(|| out_of_range(index, self.count))
    }

    /// Get a mutable reference to the value at logical index `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.physical(index)?;
        let count = self.count;
        self.slots[slot].as_mut().ok_or_else(|| out_of_range(index, count))
    }

    /// Overwrite the value at logical index `index`. This never adds a value; use
    /// [`append`](Self::append) for that.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Like [`get`](Self::get), but accepts negative indices and reports them as out of range.
    pub fn get_signed(&self, index: isize) -> Result<&T> {
        let index = self.unsigned(index)?;
        self.get(index)
    }

    /// Like [`set`](Self::set), but accepts negative indices and reports them as out of range.
    pub fn set_signed(&mut self, index: isize, value: T) -> Result<()> {
        let index = self.unsigned(index)?;
        self.set(index, value)
    }

    /// The oldest value still held.
    pub fn oldest(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(0)
    }

    /// The most recently appended value.
    pub fn latest(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(self.count - 1)
    }

    /// Forget every value. The values are dropped right away, but storage is kept for reuse.
    pub fn clear(&mut self) {
        trace!(dropped = self.count, "cleared rolling array");
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.cursor = 0;
        self.count = 0;
    }

    /// Iterate over the held values from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            front: 0,
            back: self.count,
        }
    }

    /// Copy the held values, oldest first, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn physical(&self, index: usize) -> Result<usize> {
        if index >= self.count {
            return Err(out_of_range(index, self.count));
        }
        let capacity = self.capacity();
        Ok((self.cursor + capacity - self.count + index) % capacity)
    }

    fn unsigned(&self, index: isize) -> Result<usize> {
        if index < 0 {
            Err(Error::IndexOutOfRange {
                index,
                count: self.count,
            })
        } else {
            Ok(index as usize)
        }
    }
}

// Indices past `isize::MAX` are reported as `isize::MAX` rather than wrapping negative
fn out_of_range(index: usize, count: usize) -> Error {
    Error::IndexOutOfRange {
        index: isize::try_from(index).unwrap_or(isize::MAX),
        count,
    }
}

impl<T> Index<usize> for RollingArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for RollingArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a RollingArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a [`RollingArray`] from oldest to newest value.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    array: &'a RollingArray<T>,
    // Logical indices still to be yielded: [front, back)
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let value = self.array.get(self.front).ok();
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.array.get(self.back).ok()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
