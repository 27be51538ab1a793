//! Strategies run on every subtree root on the way back up from an insertion or deletion.

use super::node::Node;

mod sealed {
    pub trait Sealed {}
}

/// The hook a [`Tree`](super::Tree) calls after it changes the shape of a subtree. It receives the
/// subtree's root (whose children are already fixed up) and returns the root to link back into
/// the parent. Implementations must leave `height` correct on every node they touch.
///
/// This trait is sealed: the two strategies are [`Unbalanced`] and [`Avl`].
pub trait Balance: sealed::Sealed {
    #[doc(hidden)]
    fn rebalance<K, V>(node: Box<Node<K, V>>) -> Box<Node<K, V>>;
}

/// No rebalancing: a plain Binary Search Tree. Heights are still tracked so
/// [`Tree::height`](super::Tree::height) is accurate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

/// AVL rebalancing: the heights of a node's two subtrees never differ by more than 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl sealed::Sealed for Unbalanced {}
impl sealed::Sealed for Avl {}

impl Balance for Unbalanced {
    fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node.fix_height();
        node
    }
}

impl Balance for Avl {
    fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        // See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
        node.fix_height();
        let balanced = match node.balance_factor() {
            b if b > 1 => {
                if node.left.as_ref().map_or(0, |l| l.balance_factor()) < 0 {
                    node.left = node.left.take().map(rotate_left);
                }
                rotate_right(node)
            }
            b if b < -1 => {
                if node.right.as_ref().map_or(0, |r| r.balance_factor()) > 0 {
                    node.right = node.right.take().map(rotate_right);
                }
                rotate_left(node)
            }
            _ => node,
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            assert!(balanced.balance_factor().abs() <= 1);
        }
        balanced
    }
}

/// Rotate `pivot` to the left. This moves the right child up vertically and `pivot` down
/// vertically. Used to rebalance the tree when the right child is too tall; a pivot without a
/// right child is returned untouched.
///
/// # Diagram
///
/// ```text
///   pivot                        right
///   /   \                        /    \
///  x    right    rotate ->    pivot    z
///       /   \                 /   \
///      y     z               x     y
/// ```
fn rotate_left<K, V>(mut pivot: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut right) = pivot.right.take() else {
        return pivot;
    };
    log::trace!(
        "rotating left around a subtree of height {}",
        pivot.height
    );

    pivot.right = right.left.take();
    // The pivot is now below `right` so its height has to be fixed first.
    pivot.fix_height();
    right.left = Some(pivot);
    right.fix_height();
    right
}

/// Rotate `pivot` to the right. The mirror image of [`rotate_left`].
///
/// # Diagram
///
/// ```text
///       pivot                left
///       /   \               /    \
///    left    z   rotate -> x    pivot
///    /  \                       /   \
///   x    y                     y     z
/// ```
fn rotate_right<K, V>(mut pivot: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut left) = pivot.left.take() else {
        return pivot;
    };
    log::trace!(
        "rotating right around a subtree of height {}",
        pivot.height
    );

    pivot.left = left.right.take();
    pivot.fix_height();
    left.right = Some(pivot);
    left.fix_height();
    left
}
