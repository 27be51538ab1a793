//! An array-backed binary heap that is either a max-heap or a min-heap.
//!
//! # Examples
//!
//! ```
//! use classic_ds::{Error, Heap};
//!
//! let mut heap = Heap::min_heap();
//! assert_eq!(heap.get(), Err(Error::EmptyCollection));
//!
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.get(), Ok(&1));
//! assert_eq!(heap.remove(), Ok(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.len(), 1);
//! ```

use std::iter::FromIterator;

use crate::error::{Error, Result};

/// Which end of the ordering a [`Heap`] keeps at its root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The largest element is at the root.
    Max,
    /// The smallest element is at the root.
    Min,
}

impl Polarity {
    /// Whether `a` belongs strictly above `b` in a heap of this polarity.
    fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Polarity::Max => a > b,
            Polarity::Min => a < b,
        }
    }
}

/// A binary heap. Every element is at least as extreme (per its [`Polarity`]) as its children,
/// where the children of index `i` are `2i + 1` and `2i + 2`. Equal elements come out in no
/// particular order.
#[derive(Clone, Debug)]
pub struct Heap<T> {
    elements: Vec<T>,
    polarity: Polarity,
}

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}

fn right(parent: usize) -> usize {
    parent * 2 + 2
}

impl<T> Heap<T> {
    /// Creates an empty heap of the given polarity.
    pub fn new(polarity: Polarity) -> Self {
        Self::with_capacity(polarity, 0)
    }

    /// Creates an empty heap with room for `capacity` elements before reallocating.
    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            polarity,
        }
    }

    /// Creates an empty max-heap.
    pub fn max_heap() -> Self {
        Self::new(Polarity::Max)
    }

    /// Creates an empty min-heap.
    pub fn min_heap() -> Self {
        Self::new(Polarity::Min)
    }

    /// The polarity this heap was created with.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// How many elements are in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The root of the heap, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// The root of the heap: its largest element for a max-heap, its smallest for a min-heap.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the heap is empty.
    pub fn get(&self) -> Result<&T> {
        self.peek().ok_or(Error::EmptyCollection)
    }
}

impl<T: Ord> Heap<T> {
    /// Adds `element` to the heap in `O(lg N)`.
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the root of the heap, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        match self.elements.len() {
            0 => None,
            1 => self.elements.pop(),
            _ => {
                // Moves the last element into the root's slot.
                let root = self.elements.swap_remove(0);
                self.sift_down(0);
                Some(root)
            }
        }
    }

    /// Removes and returns the root of the heap in `O(lg N)`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the heap is empty. The heap is left as it was.
    pub fn remove(&mut self) -> Result<T> {
        self.pop().ok_or(Error::EmptyCollection)
    }

    /// Moves the element at `i` up until its parent no longer loses to it.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !self.polarity.prefers(&self.elements[i], &self.elements[p]) {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
        log::trace!("sifted up to index {}", i);
    }

    /// Moves the element at `i` down, always swapping with the child that belongs higher, until
    /// neither child beats it.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.elements.len();
        loop {
            let (l, r) = (left(i), right(i));
            let mut top = i;
            if l < len && self.polarity.prefers(&self.elements[l], &self.elements[top]) {
                top = l;
            }
            if r < len && self.polarity.prefers(&self.elements[r], &self.elements[top]) {
                top = r;
            }
            if top == i {
                break;
            }
            self.elements.swap(i, top);
            i = top;
        }
        log::trace!("sifted down to index {}", i);
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

/// Collects into a max-heap.
impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::max_heap();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
impl<T: Ord> Heap<T> {
    pub(crate) fn assert_invariants(&self) {
        for i in 1..self.elements.len() {
            assert!(
                !self
                    .polarity
                    .prefers(&self.elements[i], &self.elements[parent(i)]),
                "heap order violated at index {}",
                i
            );
        }
    }
}
