use ordkit::heap::{Heap, Polarity};

use crate::Op;

/// Applies a set of operations to a heap and a plain vector, then
/// drains the heap and checks it comes out in order.
fn do_ops<T>(ops: &[Op<T>], heap: &mut Heap<T>, values: &mut Vec<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                heap.insert(value.clone());
                values.push(value.clone());
            }
            Op::Remove(value) => {
                let found = heap.iter().position(|x| x == value);
                if let Some(at) = found {
                    assert_eq!(&heap.remove(at), value);
                    let pos = values.iter().position(|x| x == value).unwrap();
                    values.swap_remove(pos);
                }
            }
            Op::RemoveAt(at) if !heap.is_empty() => {
                let removed = heap.remove(at % heap.len());
                let pos = values.iter().position(|x| *x == removed).unwrap();
                values.swap_remove(pos);
            }
            Op::RemoveAt(_) => {}
        }
    }
}

fn drain<T, C: ordkit::Compare<T>>(heap: &mut Heap<T, C>) -> Vec<T> {
    std::iter::from_fn(|| heap.extract().ok()).collect()
}

quickcheck::quickcheck! {
    fn min_heap_drains_ascending(ops: Vec<Op<i8>>) -> bool {
        let mut heap = Heap::min();
        let mut values = Vec::new();
        do_ops(&ops, &mut heap, &mut values);

        values.sort_unstable();
        heap.len() == values.len() && drain(&mut heap) == values
    }
}

quickcheck::quickcheck! {
    fn max_heap_drains_descending(ops: Vec<Op<i8>>) -> bool {
        let mut heap = Heap::new(Polarity::Max);
        let mut values = Vec::new();
        do_ops(&ops, &mut heap, &mut values);

        values.sort_unstable_by(|a, b| b.cmp(a));
        drain(&mut heap) == values
    }
}

quickcheck::quickcheck! {
    fn change_value_keeps_order(xs: Vec<i16>, at: usize, value: i16) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut heap = Heap::min();
        heap.extend(xs.iter().copied());

        let at = at % heap.len();
        let old = heap.change_value(at, value);

        let mut expected = xs;
        let pos = expected.iter().position(|&x| x == old).unwrap();
        expected[pos] = value;
        expected.sort_unstable();

        drain(&mut heap) == expected
    }
}
