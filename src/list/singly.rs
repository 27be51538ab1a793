use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// A singly linked list. Every node owns the one after it. Positional operations walk from the
/// head and cost `O(index)`.
///
/// # Examples
///
/// ```
/// use classic_ds::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList<_> = vec![1, 2, 3].into_iter().collect();
/// list.insert(0);
/// list.add(4);
/// assert_eq!(list.get(4), Ok(&4));
///
/// list.reverse();
/// assert_eq!(list.index_of(&4), Some(0));
/// assert_eq!(list.remove_at(0), Ok(4));
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            list.entry(&node.element);
            current = node.next.as_deref();
        }
        list.finish()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// How many elements are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `element` at the front.
    pub fn insert(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element, next }));
        self.len += 1;
    }

    /// Adds `element` at the back.
    pub fn add(&mut self, element: T) {
        let slot = self.slot_mut(self.len);
        *slot = Some(Box::new(Node {
            element,
            next: None,
        }));
        self.len += 1;
    }

    /// Adds `element` so that it ends up at `index`, shifting later elements back.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        self.check_index(index, self.len + 1)?;
        let slot = self.slot_mut(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { element, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;
        let len = self.len;
        let slot = self.slot_mut(index);
        let node = slot.take().ok_or(Error::IndexOutOfRange { index, len })?;
        let Node { element, next } = *node;
        *slot = next;
        self.len -= 1;
        Ok(element)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, element))
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.len)?;
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref());
        }
        current.map(|node| &node.element).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Like [`get`](Self::get) but allows modification.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, self.len)?;
        let len = self.len;
        self.slot_mut(index)
            .as_deref_mut()
            .map(|node| &mut node.element)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut current = self.head.take();
        let mut previous = None;
        while let Some(mut node) = current {
            current = mem::replace(&mut node.next, previous);
            previous = Some(node);
        }
        self.head = previous;
    }

    /// Removes the first element equal to `element`. Returns `false` if there was none.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// The position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = current {
            if node.element == *element {
                return Some(index);
            }
            current = node.next.as_deref();
            index += 1;
        }
        None
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// The link that points at position `index`. Walking stops early at the end of the list, so
    /// callers check `index <= len` first.
    fn slot_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            match slot {
                Some(node) => slot = &mut node.next,
                None => break,
            }
        }
        slot
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut slot = &mut list.head;
        for element in iter {
            let node = slot.insert(Box::new(Node {
                element,
                next: None,
            }));
            slot = &mut node.next;
            list.len += 1;
        }
        list
    }
}
