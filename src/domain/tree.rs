//! Ordered in-memory storage
//!
//! The [`Tree`] is a binary search tree which knows nothing about courses or
//! files. Elements are ordered by their [`Ord`] implementation, and an element
//! equal to one already stored is never inserted.
//!
//! The tree rebalances itself on insertion (AVL), so catalogs that arrive
//! already sorted do not degrade into a linked list.

use std::{borrow::Borrow, cmp::Ordering, fmt, iter::FusedIterator};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    /// Height of the subtree rooted at this node. A leaf has height 1.
    height: u8,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    const fn leaf(element: T) -> Self {
        Self {
            element,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }

    fn balance_factor(&self) -> i16 {
        i16::from(height(self.left.as_deref())) - i16::from(height(self.right.as_deref()))
    }
}

fn height<T>(node: Option<&Node<T>>) -> u8 {
    node.map_or(0, |n| n.height)
}

/// A binary search tree of unique elements.
///
/// Insertion and exact lookup are `O(log n)`, and in-order traversal visits
/// every element in ascending order in `O(n)`.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Visits every element exactly once in ascending order.
    ///
    /// The tree is borrowed for the duration of the walk, so it cannot be
    /// modified from within `visit`.
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for element in self {
            visit(element);
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts an element into the tree.
    ///
    /// If an equal element is already stored the tree is left unchanged and
    /// the new element is dropped: the first insert for a key wins.
    ///
    /// Returns `true` if the element was stored.
    pub fn insert(&mut self, element: T) -> bool {
        let (root, inserted) = insert(self.root.take(), element);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Searches for the element matching `key`.
    ///
    /// Any type the element can be borrowed as may be used as the key, so a
    /// tree of records can be searched by the record's key alone.
    pub fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.element.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.element),
            }
        }
        None
    }

    /// Returns `true` if an element matching `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts into the subtree rooted at `node`, returning the new subtree root
/// and whether the element was stored.
fn insert<T: Ord>(node: Link<T>, element: T) -> (Box<Node<T>>, bool) {
    let Some(mut node) = node else {
        return (Box::new(Node::leaf(element)), true);
    };

    let inserted = match element.cmp(&node.element) {
        Ordering::Less => {
            let (child, inserted) = insert(node.left.take(), element);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert(node.right.take(), element);
            node.right = Some(child);
            inserted
        }
        Ordering::Equal => false,
    };

    if inserted {
        (rebalance(node), true)
    } else {
        (node, false)
    }
}

fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node
            .right
            .as_ref()
            .is_some_and(|right| right.balance_factor() > 0)
        {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// An in-order iterator over the elements of a [`Tree`].
///
/// This type is returned by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
