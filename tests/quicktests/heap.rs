use classic_ds::{Error, Heap, Polarity};
use quickcheck_macros::quickcheck;

fn drain<T: Ord>(heap: &mut Heap<T>) -> Vec<T> {
    std::iter::from_fn(|| heap.pop()).collect()
}

#[quickcheck]
fn max_heap_sorts_descending(xs: Vec<i32>) -> bool {
    let mut heap = Heap::max_heap();
    heap.extend(xs.iter().copied());
    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));

    heap.len() == expected.len() && drain(&mut heap) == expected
}

#[quickcheck]
fn min_heap_sorts_ascending(xs: Vec<i32>) -> bool {
    let mut heap = Heap::new(Polarity::Min);
    heap.extend(xs.iter().copied());
    let mut expected = xs;
    expected.sort_unstable();

    drain(&mut heap) == expected
}

#[quickcheck]
fn root_is_extreme(xs: Vec<i8>) -> bool {
    let mut max = Heap::max_heap();
    let mut min = Heap::min_heap();
    max.extend(xs.iter().copied());
    min.extend(xs.iter().copied());

    max.peek() == xs.iter().max() && min.peek() == xs.iter().min()
}

#[test]
fn scenario_descending_removal() {
    let mut heap = Heap::max_heap();
    for num in [4, 2, 1, 0, 3, 7, 6, 5, 9, 8, -5, -6, -9, 12, 11, 10, -10].iter() {
        heap.insert(*num);
    }
    let mut removed = Vec::new();
    while !heap.is_empty() {
        removed.push(heap.remove().unwrap());
    }
    assert_eq!(
        removed,
        vec![12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, -5, -6, -9, -10]
    );
}

#[test]
fn empty_heap_errors() {
    let mut heap: Heap<u8> = Heap::min_heap();
    assert_eq!(heap.remove(), Err(Error::EmptyCollection));
    assert_eq!(heap.get(), Err(Error::EmptyCollection));
    assert!(heap.is_empty());
}
