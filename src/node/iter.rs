use std::collections::VecDeque;
use super::{drop_link, Link, LinkExt, Node};

/// An iterator over a tree's values in preorder: each node before its left subtree, and the
/// left subtree before the right.
///
/// Acquire through [`OrderedTree::preorder`](crate::OrderedTree::preorder),
/// [`OrderedTree::iter`](crate::OrderedTree::iter) or the `IntoIterator` trait:
///
/// ```
/// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
///
/// for value in &tree {
///     println!("{}", value);
/// }
/// ```
pub struct PreOrder<'a, T: 'a> {
    stack: Vec<&'a Node<T>>,
    size: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, size: usize) -> Self {
        PreOrder { stack: root.as_node_ref().into_iter().collect(), size: size }
    }
}

impl<'a, T> Clone for PreOrder<'a, T> {
    fn clone(&self) -> Self { PreOrder { stack: self.stack.clone(), size: self.size } }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.size -= 1;
        self.stack.extend(node.right.as_node_ref());
        self.stack.extend(node.left.as_node_ref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> {}

/// An iterator over a tree's values in ascending order according to the tree's comparator.
///
/// Acquire through [`OrderedTree::inorder`](crate::OrderedTree::inorder).
pub struct InOrder<'a, T: 'a> {
    stack: Vec<&'a Node<T>>,
    size: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, size: usize) -> Self {
        let mut it = InOrder { stack: vec![], size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link.as_node_ref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self { InOrder { stack: self.stack.clone(), size: self.size } }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.size -= 1;
        self.descend(&node.right);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> {}

/// An iterator over a tree's values one depth level at a time, each level from left to right.
///
/// Acquire through [`OrderedTree::levelorder`](crate::OrderedTree::levelorder).
pub struct LevelOrder<'a, T: 'a> {
    queue: VecDeque<&'a Node<T>>,
    size: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, size: usize) -> Self {
        LevelOrder { queue: root.as_node_ref().into_iter().collect(), size: size }
    }
}

impl<'a, T> Clone for LevelOrder<'a, T> {
    fn clone(&self) -> Self { LevelOrder { queue: self.queue.clone(), size: self.size } }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        self.size -= 1;
        self.queue.extend(node.left.as_node_ref());
        self.queue.extend(node.right.as_node_ref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> ExactSizeIterator for LevelOrder<'a, T> {}

/// An iterator that consumes a tree, yielding its values in ascending order.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
/// assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    size: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, size: usize) -> Self {
        let mut it = IntoIter { stack: vec![], size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.stack.pop()?;
        self.size -= 1;
        let right = node.right.take();
        self.descend(right);

        let Node { value, .. } = *node;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) { drop_link(&mut Some(node)); }
    }
}
