use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::{Error, Result};

/// Nodes live in a `Vec` and point at each other by index, so there are no
/// shared or back-pointing references to manage.
struct Node<T> {
    element: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked list. Elements can be added and removed at either end in `O(1)`; positional
/// lookups walk from whichever end is nearer.
///
/// # Examples
///
/// ```
/// use classic_ds::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<_> = vec![1, 2, 3].into_iter().collect();
/// list.push_front(0);
/// assert!(list.delete(&2));
/// assert_eq!(list.get(2), Ok(&3));
///
/// list.reverse();
/// assert_eq!(list.front(), Some(&3));
/// assert_eq!(list.back(), Some(&0));
/// ```
pub struct DoublyLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.walk(|_, element| {
            list.entry(element);
            true
        });
        list.finish()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        self.walk(|_, element| {
            list.insert(element.clone());
            true
        });
        list
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// How many elements are in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `element` at the back.
    pub fn insert(&mut self, element: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            element,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Adds `element` at the front.
    pub fn push_front(&mut self, element: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            element,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| self.unlink(head))
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| self.unlink(tail))
    }

    /// The first element.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].element)
    }

    /// The last element.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.nodes[tail].element)
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let slot = if index < len / 2 {
            self.nth_from(self.head, index, |node| node.next)
        } else {
            self.nth_from(self.tail, len - 1 - index, |node| node.prev)
        };
        match slot {
            Some(i) => Ok(&self.nodes[i].element),
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        for node in &mut self.nodes {
            mem::swap(&mut node.prev, &mut node.next);
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Removes the first element equal to `element`. Returns `false` if there was none.
    pub fn delete(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(element) {
            Some(slot) => {
                self.unlink(slot);
                true
            }
            None => false,
        }
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(element).is_some()
    }

    /// The position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut found = None;
        let mut position = 0;
        self.walk(|_, candidate| {
            if candidate == element {
                found = Some(position);
                return false;
            }
            position += 1;
            true
        });
        found
    }

    /// Arena slot of the first element equal to `element`.
    fn find(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut found = None;
        self.walk(|slot, candidate| {
            if candidate == element {
                found = Some(slot);
                return false;
            }
            true
        });
        found
    }

    /// Visits elements front to back until `f` returns `false`.
    fn walk<'a>(&'a self, mut f: impl FnMut(usize, &'a T) -> bool) {
        let mut current = self.head;
        while let Some(slot) = current {
            let node = &self.nodes[slot];
            if !f(slot, &node.element) {
                return;
            }
            current = node.next;
        }
    }

    fn nth_from(
        &self,
        start: Option<usize>,
        steps: usize,
        step: impl Fn(&Node<T>) -> Option<usize>,
    ) -> Option<usize> {
        let mut current = start;
        for _ in 0..steps {
            current = current.and_then(|slot| step(&self.nodes[slot]));
        }
        current
    }

    /// Detaches the node in arena slot `slot` and returns its element. The last node in the
    /// arena is moved into the freed slot, so its neighbours are repointed.
    fn unlink(&mut self, slot: usize) -> T {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(slot);
        if slot != last {
            let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
            match prev {
                Some(p) => self.nodes[p].next = Some(slot),
                None => self.head = Some(slot),
            }
            match next {
                Some(n) => self.nodes[n].prev = Some(slot),
                None => self.tail = Some(slot),
            }
        }
        removed.element
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            list.insert(element);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_vec<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
        let mut out = Vec::new();
        list.walk(|_, e| {
            out.push(e.clone());
            true
        });
        out
    }

    /// Walks back to front and checks it mirrors the forward order.
    fn assert_links<T: Clone + PartialEq + fmt::Debug>(list: &DoublyLinkedList<T>) {
        let forward = to_vec(list);
        let mut backward = Vec::new();
        let mut current = list.tail;
        while let Some(slot) = current {
            backward.push(list.nodes[slot].element.clone());
            current = list.nodes[slot].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
    }

    #[test]
    fn empty() {
        let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(!list.delete(&1));
        assert_eq!(list.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn insert_appends() {
        let mut list = DoublyLinkedList::new();
        for i in 0..5 {
            list.insert(i);
        }
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4]);
        assert_links(&list);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&i));
        }
        assert!(list.get(5).is_err());
    }

    #[test]
    fn delete_head_tail_and_middle() {
        let mut list: DoublyLinkedList<_> = (0..6).collect();
        assert!(list.delete(&0));
        assert_links(&list);
        assert!(list.delete(&5));
        assert_links(&list);
        assert!(list.delete(&3));
        assert_links(&list);
        assert!(!list.delete(&3));
        assert_eq!(to_vec(&list), vec![1, 2, 4]);

        assert!(list.delete(&1));
        assert!(list.delete(&4));
        assert!(list.delete(&2));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
    }

    #[test]
    fn delete_first_occurrence_only() {
        let mut list: DoublyLinkedList<_> = vec!['a', 'b', 'a'].into_iter().collect();
        assert!(list.delete(&'a'));
        assert_eq!(to_vec(&list), vec!['b', 'a']);
    }

    #[test]
    fn reverse_then_mutate() {
        let mut list: DoublyLinkedList<_> = (1..=4).collect();
        list.reverse();
        assert_eq!(to_vec(&list), vec![4, 3, 2, 1]);
        assert_links(&list);

        list.insert(0);
        list.push_front(5);
        assert_eq!(to_vec(&list), vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(list.pop_front(), Some(5));
        assert_eq!(list.pop_back(), Some(0));
        assert_links(&list);
    }

    #[test]
    fn index_of_and_contains() {
        let list: DoublyLinkedList<_> = vec![7, 8, 9].into_iter().collect();
        assert_eq!(list.index_of(&9), Some(2));
        assert_eq!(list.index_of(&1), None);
        assert!(list.contains(&8));
        assert!(!list.contains(&1));
    }

    #[test]
    fn clone_and_debug() {
        let mut list: DoublyLinkedList<_> = vec![1, 2, 3].into_iter().collect();
        list.delete(&1);
        let clone = list.clone();
        assert_eq!(format!("{:?}", clone), "[2, 3]");
    }
}
