//! First-in, first-out containers.
//!
//! Every queue offers a soft accessor returning `Option` and a strict one returning
//! [`Error::EmptyCollection`] when there is nothing to return.
//!
//! # Examples
//!
//! ```
//! use classic_ds::{Error, Queue, StackQueue};
//!
//! let mut queue = Queue::new();
//! assert_eq!(queue.dequeue(), None);
//! assert_eq!(queue.remove(), Err(Error::EmptyCollection));
//!
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.peek(), Some(&"a"));
//! assert_eq!(queue.remove(), Ok("a"));
//!
//! let mut queue = StackQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Some(1));
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::stack::Stack;

/// A queue.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// How many elements are queued.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Adds `element` at the back.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn remove(&mut self) -> Result<T> {
        self.dequeue().ok_or(Error::EmptyCollection)
    }

    /// The front element.
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// The front element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn element(&self) -> Result<&T> {
        self.peek().ok_or(Error::EmptyCollection)
    }
}

/// A queue built from two [`Stack`]s: one takes new elements, the other hands them out. When the
/// outbound stack runs dry the inbound one is poured into it, reversing its order, so each
/// element is moved at most once and operations are amortized `O(1)`.
#[derive(Clone, Debug)]
pub struct StackQueue<T> {
    inbound: Stack<T>,
    outbound: Stack<T>,
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            inbound: Stack::new(),
            outbound: Stack::new(),
        }
    }

    /// How many elements are queued.
    pub fn len(&self) -> usize {
        self.inbound.len() + self.outbound.len()
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inbound.is_empty() && self.outbound.is_empty()
    }

    /// Adds `element` at the back.
    pub fn enqueue(&mut self, element: T) {
        self.inbound.push(element);
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.outbound.is_empty() {
            while let Some(element) = self.inbound.pop() {
                self.outbound.push(element);
            }
        }
        self.outbound.pop()
    }

    /// The front element.
    pub fn peek(&self) -> Option<&T> {
        self.outbound.top().or_else(|| self.inbound.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mut queue: Queue<i32> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.element(), Err(Error::EmptyCollection));
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.remove(), Err(Error::EmptyCollection));
        assert!(queue.is_empty());
    }

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.enqueue(i);
            assert_eq!(queue.peek(), Some(&0));
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.element(), Ok(&0));
        for i in 0..5 {
            assert_eq!(queue.remove(), Ok(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn stack_queue_is_fifo() {
        let mut queue = StackQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);

        for i in 0..3 {
            queue.enqueue(i);
            assert_eq!(queue.peek(), Some(&0));
        }
        assert_eq!(queue.dequeue(), Some(0));

        // Interleave so both stacks hold elements at once.
        queue.enqueue(3);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(queue.dequeue(), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn default_needs_no_default_elements() {
        struct Opaque(u8);

        let mut queue: Queue<Opaque> = Queue::default();
        queue.enqueue(Opaque(1));
        assert_eq!(queue.dequeue().map(|o| o.0), Some(1));

        let mut queue: StackQueue<Opaque> = StackQueue::default();
        queue.enqueue(Opaque(2));
        assert_eq!(queue.peek().map(|o| o.0), Some(2));
    }
}
