//! A plain, unbalanced Binary Search Tree that merges equal items into a
//! single node.
//!
//! Nodes live in an arena owned by the tree. Children are owned through
//! their parent's links and every node keeps a (non-owning) link back to its
//! parent so removals can rewire the tree without searching for the parent
//! again.
//!
//! # Examples
//!
//! ```
//! use ordkit::tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.add_range(vec![50, 30, 0, 10, 15, 30, 90, 100, 0]);
//!
//! // Duplicates are kept: every added item counts.
//! assert_eq!(tree.len(), 9);
//! assert_eq!(tree.node_count(), 7);
//!
//! // In-order traversal is sorted.
//! let sorted: Vec<_> = tree.in_order().copied().collect();
//! assert_eq!(sorted, [0, 0, 10, 15, 30, 30, 50, 90, 100]);
//!
//! // Removing a duplicate just forgets one copy.
//! assert_eq!(tree.remove(&30), Some(30));
//! assert!(tree.contains(&30));
//! assert_eq!(tree.len(), 8);
//! ```

mod arena;
mod traverse;

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

use compare::{natural, Compare, Natural};

use crate::error::{Error, Result};

use arena::{Arena, Handle};
use traverse::Nodes;
pub use traverse::{Traversal, TraversalOrder};

/// A Binary Search Tree. Items are ordered by a [`Compare`] implementation,
/// [`Natural`] ordering unless one is given. Items comparing equal share a
/// node.
///
/// The tree never rebalances: adding sorted items yields a tree whose height
/// is its node count minus one. Traversals and structural queries are
/// iterative so such trees are still safe to work with, except for
/// [`Tree::traverse_recursive`].
#[derive(Clone)]
pub struct Tree<T, C = Natural<T>> {
    arena: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
    comparer: C,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    /// Never empty. All items compare equal to each other.
    items: Vec<T>,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<T> Node<T> {
    fn new(item: T, parent: Option<Handle>) -> Self {
        Self {
            items: vec![item],
            left: None,
            right: None,
            parent,
        }
    }

    fn children(&self) -> usize {
        self.left.iter().chain(self.right.iter()).count()
    }

    /// The item used to compare against this node.
    fn key(&self) -> &T {
        &self.items[0]
    }
}

impl<T> Default for Tree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generates a new, empty `Tree` using the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparer(natural())
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `comparer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// // Case-insensitive tree.
    /// let mut tree =
    ///     Tree::with_comparer(|a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()));
    /// tree.add("Apple");
    /// tree.add("apple");
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
            comparer,
        }
    }

    /// The number of items in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree, i.e. the number of distinct items.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Iterates over the items in the given order.
    pub fn iter(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self.nodes(order))
    }

    /// Iterates over the items node first, then the left subtree, then the
    /// right subtree.
    pub fn pre_order(&self) -> Traversal<'_, T> {
        self.iter(TraversalOrder::PreOrder)
    }

    /// Iterates over the items in ascending order.
    pub fn in_order(&self) -> Traversal<'_, T> {
        self.iter(TraversalOrder::InOrder)
    }

    /// Iterates over the items left subtree first, then the right subtree,
    /// then the node.
    pub fn post_order(&self) -> Traversal<'_, T> {
        self.iter(TraversalOrder::PostOrder)
    }

    /// Iterates over the items level by level, starting at the root.
    pub fn level_order(&self) -> Traversal<'_, T> {
        self.iter(TraversalOrder::LevelOrder)
    }

    /// Visits every item in the given order by recursing down the tree.
    ///
    /// This visits items in exactly the same order as [`Tree::iter`] but uses
    /// the call stack, so very deep trees can overflow it. Level order is
    /// always walked with a queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::{Tree, TraversalOrder};
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse_recursive(TraversalOrder::PostOrder, |&x| visited.push(x));
    ///
    /// assert_eq!(visited, [1, 3, 2]);
    /// assert!(tree.post_order().eq(visited.iter()));
    /// ```
    pub fn traverse_recursive<F>(&self, order: TraversalOrder, mut visit: F)
    where
        F: FnMut(&T),
    {
        match (order, self.root) {
            (TraversalOrder::LevelOrder, _) => self.level_order().for_each(visit),
            (_, Some(root)) => self.visit_recursive(root, order, &mut visit),
            (_, None) => {}
        }
    }

    fn visit_recursive<F>(&self, handle: Handle, order: TraversalOrder, visit: &mut F)
    where
        F: FnMut(&T),
    {
        let node = self.arena.get(handle);
        if order == TraversalOrder::PreOrder {
            node.items.iter().for_each(&mut *visit);
        }
        if let Some(left) = node.left {
            self.visit_recursive(left, order, visit);
        }
        if order == TraversalOrder::InOrder {
            node.items.iter().for_each(&mut *visit);
        }
        if let Some(right) = node.right {
            self.visit_recursive(right, order, visit);
        }
        if order == TraversalOrder::PostOrder {
            node.items.iter().for_each(&mut *visit);
        }
    }

    /// Iterates over the items of the leaf nodes, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![0, -1, -2, -3, 1, 2].into_iter().collect();
    /// assert!(tree.leaves().eq(&[-3, 2]));
    /// ```
    pub fn leaves(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes(TraversalOrder::InOrder)
            .filter(|(_, node)| node.children() == 0)
            .flat_map(|(_, node)| node.items.iter())
    }

    /// The smallest item in the tree.
    pub fn smallest(&self) -> Result<&T> {
        let mut handle = self.root.ok_or(Error::EmptyContainer)?;
        while let Some(left) = self.arena.get(handle).left {
            handle = left;
        }
        Ok(self.arena.get(handle).key())
    }

    /// The largest item in the tree.
    pub fn largest(&self) -> Result<&T> {
        let root = self.root.ok_or(Error::EmptyContainer)?;
        Ok(self.arena.get(self.rightmost(root)).key())
    }

    /// The number of edges on the longest path from the root to a leaf. A
    /// lone root has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::{tree::Tree, Error};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), Err(Error::EmptyContainer));
    ///
    /// tree.add(1);
    /// assert_eq!(tree.height(), Ok(0));
    ///
    /// tree.add_range(vec![2, 3, 4]);
    /// assert_eq!(tree.height(), Ok(3));
    /// ```
    pub fn height(&self) -> Result<usize> {
        self.levels()
            .map(|(_, depth)| depth)
            .max()
            .ok_or(Error::EmptyContainer)
    }

    /// An item of the deepest node. When several nodes share the greatest
    /// depth the leftmost one wins.
    pub fn deepest(&self) -> Result<&T> {
        let mut deepest: Option<(Handle, usize)> = None;
        for (handle, depth) in self.levels() {
            if deepest.map_or(true, |(_, max)| depth > max) {
                deepest = Some((handle, depth));
            }
        }
        deepest
            .map(|(handle, _)| self.arena.get(handle).key())
            .ok_or(Error::EmptyContainer)
    }

    /// The number of nodes on the longest path between any two leaves
    /// (possibly passing through the root). An empty tree has a diameter of
    /// `0` and a lone root a diameter of `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// //        0
    /// //    -10     100
    /// //      -5   50
    /// //          25
    /// let tree: Tree<_> = vec![0, -10, -5, 100, 50, 25].into_iter().collect();
    /// assert_eq!(tree.diameter(), 6);
    /// ```
    pub fn diameter(&self) -> usize {
        // Post-order guarantees both children are measured before their parent.
        let mut heights = vec![0; self.arena.bound()];
        let mut diameter = 0;
        for (handle, node) in self.nodes(TraversalOrder::PostOrder) {
            let left = node.left.map_or(0, |h| heights[h.index()]);
            let right = node.right.map_or(0, |h| heights[h.index()]);
            heights[handle.index()] = 1 + left.max(right);
            diameter = diameter.max(left + right + 1);
        }
        diameter
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.count_nodes_with_children(0)
    }

    /// The number of nodes with exactly one child.
    pub fn half_node_count(&self) -> usize {
        self.count_nodes_with_children(1)
    }

    /// The number of nodes with two children.
    pub fn full_node_count(&self) -> usize {
        self.count_nodes_with_children(2)
    }

    /// Whether `other` has exactly the same shape as this tree, ignoring the
    /// items. A missing tree has the same shape as an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::{tree::Tree, Natural};
    ///
    /// let small: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let large: Tree<_> = vec![20, 10, 30].into_iter().collect();
    /// let skewed: Tree<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert!(small.is_structurally_identical_to(Some(&large)));
    /// assert!(!small.is_structurally_identical_to(Some(&skewed)));
    /// assert!(!small.is_structurally_identical_to::<i32, Natural<i32>>(None));
    /// assert!(Tree::<i32>::new().is_structurally_identical_to::<i32, Natural<i32>>(None));
    /// ```
    pub fn is_structurally_identical_to<U, D>(&self, other: Option<&Tree<U, D>>) -> bool {
        let other = match other {
            Some(other) => other,
            None => return self.is_empty(),
        };

        let mut queue = VecDeque::new();
        queue.push_back((self.root, other.root));
        while let Some(pair) = queue.pop_front() {
            match pair {
                (None, None) => {}
                (Some(mine), Some(theirs)) => {
                    let mine = self.arena.get(mine);
                    let theirs = other.arena.get(theirs);
                    queue.push_back((mine.left, theirs.left));
                    queue.push_back((mine.right, theirs.right));
                }
                _ => return false,
            }
        }
        true
    }

    fn nodes(&self, order: TraversalOrder) -> Nodes<'_, T> {
        Nodes::new(&self.arena, self.root, order)
    }

    /// Every node with its depth (the root being at depth `0`), in level
    /// order.
    fn levels(&self) -> impl Iterator<Item = (Handle, usize)> + '_ {
        let mut queue: VecDeque<_> = self.root.map(|root| (root, 0)).into_iter().collect();
        std::iter::from_fn(move || {
            let (handle, depth) = queue.pop_front()?;
            let node = self.arena.get(handle);
            queue.extend(node.left.map(|h| (h, depth + 1)));
            queue.extend(node.right.map(|h| (h, depth + 1)));
            Some((handle, depth))
        })
    }

    fn count_nodes_with_children(&self, children: usize) -> usize {
        self.nodes(TraversalOrder::LevelOrder)
            .filter(|(_, node)| node.children() == children)
            .count()
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena.get(handle).right {
            handle = right;
        }
        handle
    }

    /// Puts `replacement` wherever `old` hangs off its parent (or makes it the
    /// root) and points `replacement` at its new parent. `old` keeps its own
    /// links.
    fn replace_child(&mut self, old: Handle, replacement: Option<Handle>) {
        let parent = self.arena.get(old).parent;
        if let Some(replacement) = replacement {
            self.arena.get_mut(replacement).parent = parent;
        }
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = self.arena.get_mut(parent);
                if parent.left == Some(old) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Adds `item` to the tree. If the tree already contains an equal item,
    /// `item` joins that item's node.
    pub fn add(&mut self, item: T) {
        self.len += 1;

        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.arena.alloc(Node::new(item, None)));
                return;
            }
        };

        loop {
            let node = self.arena.get(current);
            let ordering = self.comparer.compare(&item, node.key());
            let next = match ordering {
                Ordering::Equal => {
                    self.arena.get_mut(current).items.push(item);
                    return;
                }
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };

            match next {
                Some(child) => current = child,
                None => {
                    let child = self.arena.alloc(Node::new(item, Some(current)));
                    let parent = self.arena.get_mut(current);
                    if ordering == Ordering::Less {
                        parent.left = Some(child);
                    } else {
                        parent.right = Some(child);
                    }
                    self.debug_assert_ordered(current);
                    return;
                }
            }
        }
    }

    /// Adds every item of `items` to the tree.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Whether the tree contains an item equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Removes one item equal to `item` from the tree and returns it. If the
    /// tree contains no such item, nothing happens.
    ///
    /// A node that loses its last item is unlinked. When it has two children
    /// it takes over the items of its in-order predecessor (the largest node
    /// of its left subtree) and the predecessor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8, 2, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&3), Some(3));
    /// assert_eq!(tree.remove(&3), None);
    /// assert!(tree.in_order().eq(&[2, 4, 5, 8]));
    /// ```
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let handle = self.find(item)?;
        self.len -= 1;

        let node = self.arena.get_mut(handle);
        if node.items.len() > 1 {
            return node.items.pop();
        }

        match (node.left, node.right) {
            (Some(left), Some(_)) => {
                let predecessor = self.rightmost(left);
                let predecessor_left = self.arena.get(predecessor).left;
                self.replace_child(predecessor, predecessor_left);

                let replacement = self.arena.take(predecessor).items;
                let node = self.arena.get_mut(handle);
                let mut removed = std::mem::replace(&mut node.items, replacement);
                self.debug_assert_ordered(handle);
                removed.pop()
            }
            (left, right) => {
                self.replace_child(handle, left.or(right));
                self.arena.take(handle).items.pop()
            }
        }
    }

    fn find(&self, item: &T) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.get(handle);
            current = match self.comparer.compare(item, node.key()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn debug_assert_ordered(&self, handle: Handle) {
        if cfg!(debug_assertions) {
            let node = self.arena.get(handle);
            if let Some(left) = node.left {
                let left = self.arena.get(left);
                assert_eq!(
                    self.comparer.compare(left.key(), node.key()),
                    Ordering::Less
                );
                assert_eq!(left.parent, Some(handle));
            }
            if let Some(right) = node.right {
                let right = self.arena.get(right);
                assert_eq!(
                    self.comparer.compare(right.key(), node.key()),
                    Ordering::Greater
                );
                assert_eq!(right.parent, Some(handle));
            }
        }
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.add_range(iter);
        tree
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.map(|root| self.arena.get(root)))
            .finish()
    }
}
