//! Ordered maps built on binary search trees.
//!
//! [`Tree`] holds the search tree algorithms once. Its third type parameter picks what happens
//! after each structural change: [`Unbalanced`] gives a textbook [`BinarySearchTree`] and [`Avl`]
//! gives a self-balancing [`AvlTree`].
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::{AvlTree, BinarySearchTree};
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9].iter() {
//!     tree.insert(*key, key * 10);
//! }
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&9));
//! assert_eq!(tree.get(&4), Some(&40));
//!
//! // Inserting never overwrites...
//! assert!(!tree.insert(4, 0));
//! // ...but `put` does.
//! assert_eq!(tree.put(4, 0), Some(40));
//! assert_eq!(tree.get(&4), Some(&0));
//!
//! // Sorted input turns a plain BST into a list but not an AVL tree.
//! let mut bst = BinarySearchTree::new();
//! let mut avl = AvlTree::new();
//! for key in 0..100 {
//!     bst.insert(key, ());
//!     avl.insert(key, ());
//! }
//! assert_eq!(bst.height(), 100);
//! assert_eq!(avl.height(), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;

mod balance;
mod node;

pub use balance::{Avl, Balance, Unbalanced};

use node::{Link, Node};

/// Which child a node on a search path was left through.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A Binary Search Tree keyed by `K`. Which balancing strategy runs after insertions and
/// deletions is picked by `B`; see [`BinarySearchTree`] and [`AvlTree`].
///
/// Keys are unique. All lookups are `O(height)`.
pub struct Tree<K, V, B = Avl> {
    root: Link<K, V>,
    len: usize,
    balance: PhantomData<fn() -> B>,
}

/// A search tree that never rebalances. Its height depends on insertion order and is `N` for
/// sorted input.
pub type BinarySearchTree<K, V> = Tree<K, V, Unbalanced>;

/// A self-balancing search tree. For every node the heights of its subtrees differ by at most 1,
/// which bounds the height by about `1.44 * lg(N + 2)`.
pub type AvlTree<K, V> = Tree<K, V, Avl>;

impl<K, V, B> Default for Tree<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, B> Drop for Tree<K, V, B> {
    // Dropping `Box`es recursively would overflow the stack on a list-shaped BST.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V, B> Clone for Tree<K, V, B>
where
    K: Clone,
    V: Clone,
{
    // Post-order with an explicit stack so list-shaped trees don't overflow it. Each node is
    // built once both of its children have been.
    fn clone(&self) -> Self {
        let mut pending: Vec<(&Node<K, V>, bool)> =
            self.root.as_deref().map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Node<K, V>>> = Vec::new();
        while let Some((node, children_built)) = pending.pop() {
            if !children_built {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|n| (n, false)));
                pending.extend(node.left.as_deref().map(|n| (n, false)));
                continue;
            }
            // The left subtree was finished first, so it sits below the right one.
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                value: node.value.clone(),
                left,
                right,
                height: node.height,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
            balance: PhantomData,
        }
    }
}

impl<K, V, B> fmt::Debug for Tree<K, V, B>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.walk(|node| {
            map.entry(&node.key, &node.value);
        });
        map.finish()
    }
}

impl<K, V, B> Tree<K, V, B> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            balance: PhantomData,
        }
    }

    /// How many key/value pairs are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        // Reuse the iterative `Drop`.
        drop(mem::take(self));
    }

    /// Gets the smallest key in the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_ref()?;
        while let Some(left) = &node.left {
            node = left;
        }
        Some(&node.key)
    }

    /// Gets the largest key in the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_ref()?;
        while let Some(right) = &node.right {
            node = right;
        }
        Some(&node.key)
    }

    /// In-order traversal without recursion.
    fn walk<'a>(&'a self, mut f: impl FnMut(&'a Node<K, V>)) {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                return;
            };
            f(node);
            current = node.right.as_deref();
        }
    }
}

impl<K, V, B> Tree<K, V, B>
where
    K: Ord,
    B: Balance,
{
    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Like [`get`](Self::get) but lets the value be modified in place.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Whether `key` is stored and mapped to exactly `value`.
    pub fn contains(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.get(key) == Some(value)
    }

    /// Whether `key` is stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts the given value into the tree stored at the given key. Returns `false` without
    /// touching the tree when the key is already present; use [`put`](Self::put) to overwrite.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// assert!(tree.insert(1, 2));
    /// assert!(!tree.insert(1, 3));
    /// assert_eq!(tree.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut path = Vec::with_capacity(self.height());
        let mut link = self.root.take();
        let (subtree, inserted) = loop {
            let Some(mut node) = link else {
                break (Node::new_boxed(key, value), true);
            };
            match key.cmp(&node.key) {
                Ordering::Less => {
                    link = node.left.take();
                    path.push((node, Side::Left));
                }
                Ordering::Equal => break (node, false),
                Ordering::Greater => {
                    link = node.right.take();
                    path.push((node, Side::Right));
                }
            }
        };

        self.root = Self::relink(path, Some(subtree), inserted);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Hangs `subtree` back under each detached node of `path`, deepest first, and returns the
    /// new root. Every node on the way up is rebalanced when `changed` is set.
    fn relink(
        mut path: Vec<(Box<Node<K, V>>, Side)>,
        mut subtree: Link<K, V>,
        changed: bool,
    ) -> Link<K, V> {
        while let Some((mut parent, side)) = path.pop() {
            match side {
                Side::Left => parent.left = subtree,
                Side::Right => parent.right = subtree,
            }
            subtree = Some(if changed { B::rebalance(parent) } else { parent });
        }
        subtree
    }

    /// Inserts or overwrites the value stored at `key`, returning the value it replaced.
    ///
    /// Passing `None` as the value removes `key` instead (returning the removed value), so
    /// `put(key, None)` behaves like [`delete`](Self::delete). The length only changes when a new
    /// key is added or an existing one removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(7, "old");
    ///
    /// assert_eq!(tree.put(7, "new"), Some("old"));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&7), Some(&"new"));
    ///
    /// assert_eq!(tree.put(7, None), Some("new"));
    /// assert!(tree.is_empty());
    /// ```
    pub fn put<T>(&mut self, key: K, value: T) -> Option<V>
    where
        T: Into<Option<V>>,
    {
        let Some(value) = value.into() else {
            return self.delete(&key);
        };
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        self.insert(key, value);
        None
    }

    /// Removes `key` from the tree. Returns `false` if it wasn't there.
    pub fn remove(&mut self, key: &K) -> bool {
        self.delete(key).is_some()
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let mut path = Vec::with_capacity(self.height());
        let mut link = self.root.take();
        let (subtree, deleted) = loop {
            let Some(mut node) = link else {
                break (None, None);
            };
            match key.cmp(&node.key) {
                Ordering::Less => {
                    link = node.left.take();
                    path.push((node, Side::Left));
                }
                Ordering::Equal => {
                    let (subtree, value) = Self::unlink(node);
                    break (subtree, Some(value));
                }
                Ordering::Greater => {
                    link = node.right.take();
                    path.push((node, Side::Right));
                }
            }
        };

        self.root = Self::relink(path, subtree, deleted.is_some());
        if deleted.is_some() {
            self.len -= 1;
        }
        deleted
    }

    /// Removes `node` from its subtree. Returns the subtree that takes its place and the removed
    /// value.
    fn unlink(mut node: Box<Node<K, V>>) -> (Link<K, V>, V) {
        match (node.left.take(), node.right.take()) {
            // With at most one child, that child takes this node's place as is.
            (None, None) => (None, node.value),
            (Some(child), None) | (None, Some(child)) => (Some(child), node.value),

            // With two children, promote the in-order successor: the smallest node in the right
            // subtree.
            (Some(left), Some(right)) => {
                let (right, successor) = Self::delete_min(right);
                let Node { key, value, .. } = *successor;
                node.left = Some(left);
                node.right = right;
                node.key = key;
                let removed = mem::replace(&mut node.value, value);
                (Some(B::rebalance(node)), removed)
            }
        }
    }

    /// Detaches the smallest node of a subtree. Returns what's left of the subtree and the
    /// detached node, which no longer has children.
    fn delete_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        let mut path = Vec::new();
        while let Some(left) = node.left.take() {
            path.push((node, Side::Left));
            node = left;
        }
        let rest = node.right.take();
        (Self::relink(path, rest, true), node)
    }
}

impl<K, V, B> Extend<(K, V)> for Tree<K, V, B>
where
    K: Ord,
    B: Balance,
{
    /// Inserts every pair; pairs whose key is already present are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, B> FromIterator<(K, V)> for Tree<K, V, B>
where
    K: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
impl<K, V, B> Tree<K, V, B>
where
    K: Ord + Clone,
{
    /// Walks the whole tree asserting every structural invariant. Returns the keys in order.
    pub(crate) fn assert_invariants(&self, balanced: bool) -> Vec<K> {
        fn check<K: Ord, V>(link: &Link<K, V>, balanced: bool, count: &mut usize) -> usize {
            let Some(node) = link else {
                return 0;
            };
            *count += 1;
            if let Some(left) = &node.left {
                assert!(left.key < node.key, "left child out of order");
            }
            if let Some(right) = &node.right {
                assert!(right.key > node.key, "right child out of order");
            }
            let left = check(&node.left, balanced, count);
            let right = check(&node.right, balanced, count);
            assert_eq!(node.height, left.max(right) + 1, "stale height");
            if balanced {
                assert!(left.abs_diff(right) <= 1, "AVL balance violated");
            }
            node.height
        }

        let mut count = 0;
        check(&self.root, balanced, &mut count);
        assert_eq!(count, self.len, "len out of sync with node count");

        let mut keys = Vec::with_capacity(self.len);
        self.walk(|node| keys.push(node.key.clone()));
        assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "in-order keys not strictly increasing"
        );
        keys
    }
}
