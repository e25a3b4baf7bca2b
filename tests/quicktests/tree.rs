use ordkit::tree::{TraversalOrder, Tree};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of adds
/// and removes both hold the same items.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, sorted: &mut Vec<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(item) => {
                tree.add(item.clone());
                let at = sorted.partition_point(|x| x <= item);
                sorted.insert(at, item.clone());
            }
            Op::Remove(item) => {
                let expected = sorted.binary_search(item).ok().map(|at| sorted.remove(at));
                assert_eq!(tree.remove(item), expected);
            }
            Op::RemoveAt(at) if !sorted.is_empty() => {
                let item = sorted.remove(at % sorted.len());
                assert_eq!(tree.remove(&item), Some(item));
            }
            Op::RemoveAt(_) => {}
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut sorted = Vec::new();

        do_ops(&ops, &mut tree, &mut sorted);
        tree.len() == sorted.len() && tree.in_order().eq(sorted.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for removal in &removals {
            tree.remove(removal);
        }

        let mut still_present = xs;
        for removal in &removals {
            // Each removal only forgets one copy.
            if let Some(pos) = still_present.iter().position(|x| x == removal) {
                still_present.swap_remove(pos);
            }
        }
        still_present.sort_unstable();

        tree.in_order().eq(still_present.iter())
    }
}

quickcheck::quickcheck! {
    fn recursive_and_iterative_agree(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        [
            TraversalOrder::PreOrder,
            TraversalOrder::InOrder,
            TraversalOrder::PostOrder,
            TraversalOrder::LevelOrder,
        ]
        .iter()
        .all(|&order| {
            let mut visited = Vec::new();
            tree.traverse_recursive(order, |&x| visited.push(x));
            tree.iter(order).eq(visited.iter())
        })
    }
}

quickcheck::quickcheck! {
    fn shape_depends_only_on_relative_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let scaled: Tree<_> = xs.iter().map(|&x| i32::from(x) * 3 - 7).collect();
        tree.is_structurally_identical_to(Some(&scaled))
            && tree.diameter() == scaled.diameter()
            && tree.height() == scaled.height()
    }
}
