/// An owned, possibly empty, subtree.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. Each child is exclusively owned, so the tree can never contain a cycle.
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Left height minus right height. Positive means left-heavy.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a subtree; an empty one has height 0.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}
