use quickcheck::{Arbitrary, Gen};

mod heap;
mod tree;

/// An enum for the various kinds of "things" to do to
/// a search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the K, V into the data structure
    Insert(K, V),
    /// Overwrite the value at K
    Put(K, V),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Put(K::arbitrary(g), V::arbitrary(g)),
            2 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
