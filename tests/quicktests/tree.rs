use classic_ds::{AvlTree, Balance, BinarySearchTree, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<B: Balance>(ops: &[Op<i8, i8>], tree: &mut Tree<i8, i8, B>, map: &mut BTreeMap<i8, i8>) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                if tree.insert(k, v) {
                    map.insert(k, v);
                }
            }
            Op::Put(k, v) => {
                tree.put(k, v);
                map.insert(k, v);
            }
            Op::Remove(k) => {
                tree.remove(&k);
                map.remove(&k);
            }
        }
    }
}

fn agrees_with<B: Balance>(tree: &Tree<i8, i8, B>, map: &BTreeMap<i8, i8>) -> bool {
    tree.len() == map.len()
        && tree.min() == map.keys().next()
        && tree.max() == map.keys().next_back()
        && (i8::MIN..=i8::MAX).all(|k| tree.get(&k) == map.get(&k))
}

#[quickcheck]
fn fuzz_avl_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    agrees_with(&tree, &map) && (tree.height() as f64) <= 1.45 * ((tree.len() + 2) as f64).log2()
}

#[quickcheck]
fn fuzz_bst_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    agrees_with(&tree, &map)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = AvlTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.get(x) == Some(x) && tree.contains(x, x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains_key(x))
}

#[quickcheck]
fn size_counts_successes(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = AvlTree::new();
    let mut inserted = 0usize;
    let mut removed = 0usize;
    for x in &xs {
        if tree.insert(*x, ()) {
            inserted += 1;
        }
    }
    for x in &deletes {
        if tree.remove(x) {
            removed += 1;
        }
    }

    tree.len() == inserted - removed
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = AvlTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.get(x).is_none())
        && still_present.iter().all(|x| tree.get(x).is_some())
}

#[quickcheck]
fn failed_insert_is_invisible(xs: Vec<i8>, dup: i8) -> bool {
    let mut tree: AvlTree<i8, i8> = xs.iter().map(|&x| (x, x)).collect();
    tree.insert(dup, dup);
    let before = format!("{:?}", tree);
    let (len, height) = (tree.len(), tree.height());

    !tree.insert(dup, dup.wrapping_add(1))
        && format!("{:?}", tree) == before
        && tree.len() == len
        && tree.height() == height
}
