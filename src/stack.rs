//! Last-in, first-out containers.
//!
//! # Examples
//!
//! ```
//! use classic_ds::{QueueStack, Stack};
//!
//! let mut stack = Stack::with_max_size(2).unwrap();
//! assert!(stack.push('a'));
//! assert!(stack.push('b'));
//! assert!(!stack.push('c'));
//! assert_eq!(stack.pop(), Some('b'));
//!
//! let mut stack = QueueStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.top(), Some(&2));
//! ```

use crate::error::{Error, Result};
use crate::queue::Queue;

/// A stack, optionally limited to a maximum number of elements.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
    max_size: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack with no practical size limit.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            max_size: usize::MAX,
        }
    }

    /// Creates an empty stack that holds at most `max_size` elements.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `max_size` is 0.
    pub fn with_max_size(max_size: usize) -> Result<Self> {
        if max_size < 1 {
            log::debug!("rejected stack maximum size {}", max_size);
            return Err(Error::InvalidArgument("maximum size must be >= 1"));
        }
        Ok(Self {
            elements: Vec::new(),
            max_size,
        })
    }

    /// How many elements are on the stack.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The most elements this stack accepts.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether another [`push`](Self::push) would be refused.
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.max_size
    }

    /// Pushes `element` on top. Returns `false`, leaving the stack as it was, when it is full.
    pub fn push(&mut self, element: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// The top element.
    pub fn top(&self) -> Option<&T> {
        self.elements.last()
    }

    /// The element that would be popped last.
    pub(crate) fn bottom(&self) -> Option<&T> {
        self.elements.first()
    }
}

/// A stack built from a single [`Queue`]. Each push rotates the queue so the newest element is
/// at its front, which makes `push` `O(N)` and `pop` `O(1)`.
#[derive(Clone, Debug)]
pub struct QueueStack<T> {
    queue: Queue<T>,
}

impl<T> Default for QueueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    /// How many elements are on the stack.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pushes `element` on top.
    pub fn push(&mut self, element: T) {
        self.queue.enqueue(element);
        for _ in 1..self.queue.len() {
            if let Some(front) = self.queue.dequeue() {
                self.queue.enqueue(front);
            }
        }
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    /// The top element.
    pub fn top(&self) -> Option<&T> {
        self.queue.peek()
    }
}
