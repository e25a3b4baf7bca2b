//! Iterative traversals. Each walk keeps its own explicit stack or queue so
//! arbitrarily deep (e.g. sorted-insertion) trees can be walked without
//! growing the call stack.

use std::collections::VecDeque;
use std::slice;

use super::arena::{Arena, Handle};
use super::Node;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields items in ascending
    /// order.
    InOrder,
    /// Left subtree, then right subtree, then node. Also known as depth-first.
    PostOrder,
    /// Level by level from the root, left to right. Also known as
    /// breadth-first.
    LevelOrder,
}

/// Bookkeeping for one walk over the nodes of a tree.
enum Walk {
    Pre(Vec<Handle>),
    In {
        stack: Vec<Handle>,
        current: Option<Handle>,
    },
    /// The flag marks nodes whose children have already been scheduled.
    Post(Vec<(Handle, bool)>),
    Level(VecDeque<Handle>),
}

impl Walk {
    fn new(order: TraversalOrder, root: Option<Handle>) -> Self {
        match order {
            TraversalOrder::PreOrder => Walk::Pre(root.into_iter().collect()),
            TraversalOrder::InOrder => Walk::In {
                stack: Vec::new(),
                current: root,
            },
            TraversalOrder::PostOrder => Walk::Post(root.map(|h| (h, false)).into_iter().collect()),
            TraversalOrder::LevelOrder => Walk::Level(root.into_iter().collect()),
        }
    }

    fn next<T>(&mut self, arena: &Arena<Node<T>>) -> Option<Handle> {
        match self {
            Walk::Pre(stack) => {
                let handle = stack.pop()?;
                let node = arena.get(handle);
                // Right goes first so left comes off the stack first.
                stack.extend(node.right);
                stack.extend(node.left);
                Some(handle)
            }
            Walk::In { stack, current } => {
                while let Some(handle) = *current {
                    stack.push(handle);
                    *current = arena.get(handle).left;
                }
                let handle = stack.pop()?;
                *current = arena.get(handle).right;
                Some(handle)
            }
            Walk::Post(stack) => loop {
                let (handle, expanded) = stack.pop()?;
                if expanded {
                    return Some(handle);
                }
                let node = arena.get(handle);
                stack.push((handle, true));
                stack.extend(node.right.map(|h| (h, false)));
                stack.extend(node.left.map(|h| (h, false)));
            },
            Walk::Level(queue) => {
                let handle = queue.pop_front()?;
                let node = arena.get(handle);
                queue.extend(node.left);
                queue.extend(node.right);
                Some(handle)
            }
        }
    }
}

/// Walks the nodes of a tree in some [`TraversalOrder`].
pub(crate) struct Nodes<'a, T> {
    arena: &'a Arena<Node<T>>,
    walk: Walk,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(
        arena: &'a Arena<Node<T>>,
        root: Option<Handle>,
        order: TraversalOrder,
    ) -> Self {
        Self {
            arena,
            walk: Walk::new(order, root),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (Handle, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        self.walk.next(arena).map(|handle| (handle, arena.get(handle)))
    }
}

/// An iterator over the items of a [`Tree`][super::Tree] in some
/// [`TraversalOrder`]. Every item of a node is yielded when the node is
/// visited.
pub struct Traversal<'a, T> {
    nodes: Nodes<'a, T>,
    items: slice::Iter<'a, T>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(nodes: Nodes<'a, T>) -> Self {
        Self {
            nodes,
            items: <&[T]>::default().iter(),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(item);
            }
            let (_, node) = self.nodes.next()?;
            self.items = node.items.iter();
        }
    }
}
