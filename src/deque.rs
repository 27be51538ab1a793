//! A double-ended queue on top of [`DoublyLinkedList`].
//!
//! # Examples
//!
//! ```
//! use classic_ds::{Deque, Error};
//!
//! let mut deque = Deque::new();
//! deque.enqueue_front(2);
//! deque.enqueue_front(1);
//! deque.enqueue_back(3);
//!
//! assert_eq!(deque.front(), Some(&1));
//! assert_eq!(deque.remove_last(), Ok(3));
//! assert_eq!(deque.dequeue_front(), Some(1));
//! assert_eq!(deque.dequeue_back(), Some(2));
//! assert_eq!(deque.get_first(), Err(Error::EmptyCollection));
//! ```

use crate::error::{Error, Result};
use crate::list::DoublyLinkedList;

/// A queue that can be added to and taken from at both ends in `O(1)`.
#[derive(Clone, Debug)]
pub struct Deque<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// How many elements are in the deque.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `element` at the front.
    pub fn enqueue_front(&mut self, element: T) {
        self.list.push_front(element);
    }

    /// Adds `element` at the back.
    pub fn enqueue_back(&mut self, element: T) {
        self.list.insert(element);
    }

    /// Removes and returns the front element.
    pub fn dequeue_front(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Removes and returns the back element.
    pub fn dequeue_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the deque is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        self.dequeue_front().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        self.dequeue_back().ok_or(Error::EmptyCollection)
    }

    /// The front element.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// The back element.
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// The front element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the deque is empty.
    pub fn get_first(&self) -> Result<&T> {
        self.front().ok_or(Error::EmptyCollection)
    }

    /// The back element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the deque is empty.
    pub fn get_last(&self) -> Result<&T> {
        self.back().ok_or(Error::EmptyCollection)
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(element)
    }
}
