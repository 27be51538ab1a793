use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use classic_ds::{AvlTree, BinarySearchTree};

#[derive(Clone)]
enum TreeEnum<K, V> {
    Unbalanced(BinarySearchTree<K, V>),
    Avl(AvlTree<K, V>),
}

impl<K, V> TreeEnum<K, V> {
    fn get(&self, k: &K) -> Option<&V>
    where
        K: Ord,
    {
        match self {
            Self::Unbalanced(t) => t.get(k),
            Self::Avl(t) => t.get(k),
        }
    }

    fn insert(&mut self, k: K, v: V)
    where
        K: Ord,
    {
        match self {
            Self::Unbalanced(t) => {
                t.insert(k, v);
            }
            Self::Avl(t) => {
                t.insert(k, v);
            }
        }
    }

    fn remove(&mut self, k: &K)
    where
        K: Ord,
    {
        match self {
            Self::Unbalanced(t) => {
                t.remove(k);
            }
            Self::Avl(t) => {
                t.remove(k);
            }
        }
    }
}

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Orders `0..num_nodes` so that inserting them into a plain BST yields a full tree: each
/// range's midpoint comes before either half.
fn balanced_order(xs: &[i32], out: &mut Vec<i32>) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        out.push(xs[mid]);
        balanced_order(&xs[..mid], out);
        balanced_order(&xs[mid + 1..], out);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Ascending input makes the plain BST a list, so its recursion depth is the tree size.
    // Keep those sizes moderate.
    for num_levels in [3, 7, 11] {
        let num_nodes = num_nodes_in_full_tree(num_levels);
        let largest_element_in_tree = num_nodes as i32 - 1;

        let ascending: Vec<i32> = (0..num_nodes as i32).collect();
        let mut balanced = Vec::with_capacity(num_nodes);
        balanced_order(&ascending, &mut balanced);

        let tree_tests = [
            (
                "bst-ascending",
                TreeEnum::Unbalanced(ascending.iter().map(|&x| (x, x)).collect()),
            ),
            (
                "bst-balanced",
                TreeEnum::Unbalanced(balanced.iter().map(|&x| (x, x)).collect()),
            ),
            (
                "avl-ascending",
                TreeEnum::Avl(ascending.iter().map(|&x| (x, x)).collect()),
            ),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "get", |tree, i| {
        let _value = black_box(tree.get(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1, i + 1);
    });

    bench_helper(c, "get-miss", |tree, i| {
        let _value = black_box(tree.get(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
