//! An ordered collection based on a binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug, Display};
use std::iter;
use tracing::{debug, trace};
use super::error::NotFoundError;
use super::node::{self, Dir, Left, Link, Right};

pub use super::node::iter::{InOrder, IntoIter, LevelOrder, PreOrder};

/// An ordered collection based on a binary search tree.
///
/// Values are kept in a plain binary search tree: nothing is rotated or recolored on insertion or
/// removal, so the tree's height depends on the order values arrive in. Call
/// [`rebalance`](#method.rebalance) to rebuild it at minimum height.
///
/// Equal values are allowed. An inserted value that compares equal to a node's value goes into
/// that node's right subtree.
///
/// The behavior of this tree is undefined if a value's ordering relative to any other value
/// changes while the value is in the tree. Besides `Cell`, `RefCell` or unsafe code, this can
/// happen through [`replace`](#method.replace).
pub struct OrderedTree<T, C = Natural<T>> where C: Compare<T> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> OrderedTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.inorder();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { OrderedTree::with_cmp(compare::natural()) }
}

impl<T, C> OrderedTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = ordtree::OrderedTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        OrderedTree { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of values in the tree, counting equal values separately.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all values from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.len(), 3);
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing tree");
        node::drop_link(&mut self.root);
        self.len = 0;
    }

    /// Inserts a value into the tree.
    ///
    /// The value always becomes a new leaf; the tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        node::insert(&mut self.root, &self.cmp, value);
        self.len += 1;
    }

    /// Returns a reference to a value in the tree equal to the given one, or `None` if there is
    /// none.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    /// assert_eq!(tree.find(&1), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn find<Q: ?Sized>(&self, value: &Q) -> Option<&T> where C: Compare<Q, T> {
        node::find(&self.root, &self.cmp, value)
    }

    /// Checks if the tree contains a value equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    /// assert!(!tree.contains(&1));
    ///
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool where C: Compare<Q, T> {
        self.find(value).is_some()
    }

    /// Removes one value equal to the given one from the tree and returns it.
    ///
    /// Of several equal values, the one nearest the root is removed. If the tree contains no
    /// equal value, the tree is left untouched and `NotFoundError` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::NotFoundError;
    ///
    /// let mut tree: ordtree::OrderedTree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(NotFoundError));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> Result<T, NotFoundError>
        where C: Compare<Q, T> {

        match node::remove(&mut self.root, &self.cmp, value) {
            Some(removed) => {
                self.len -= 1;
                Ok(removed)
            }
            None => {
                trace!(len = self.len, "no value to remove");
                Err(NotFoundError)
            }
        }
    }

    /// Replaces a value in the tree equal to `value` with `new_value`, returning the replaced
    /// value, or `None` if there is no equal value.
    ///
    /// The node keeps its position. `new_value` must order the same way as the value it
    /// replaces relative to every other value in the tree; this is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::with_cmp(|l: &(u8, char), r: &(u8, char)| l.0.cmp(&r.0));
    /// tree.insert((1, 'a'));
    ///
    /// assert_eq!(tree.replace(&(1, '_'), (1, 'b')), Some((1, 'a')));
    /// assert_eq!(tree.find(&(1, '_')), Some(&(1, 'b')));
    /// assert_eq!(tree.replace(&(2, '_'), (2, 'c')), None);
    /// ```
    pub fn replace<Q: ?Sized>(&mut self, value: &Q, new_value: T) -> Option<T>
        where C: Compare<Q, T> {

        node::replace(&mut self.root, &self.cmp, value, new_value)
    }

    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// A tree with a single value has height `0` and an empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend(vec![5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize { node::height(&self.root) }

    /// Checks if the tree's height is below `2·log2(len + 1) − 1`.
    ///
    /// This flags trees that have grown roughly twice as tall as necessary. An empty tree is
    /// not considered balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: ordtree::OrderedTree<_> = (0..32).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool { node::is_balanced(self.height(), self.len) }

    /// Returns every value `v` in the tree with `low <= v <= high`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&3, &7), [&3, &4, &5, &7]);
    /// assert!(tree.range_find(&7, &3).is_empty());
    /// ```
    pub fn range_find<Q: ?Sized>(&self, low: &Q, high: &Q) -> Vec<&T> where C: Compare<Q, T> {
        let mut found = node::range(&self.root, &self.cmp, low, high);
        found.sort_by(|l, r| self.cmp.compare(*l, *r));
        found
    }

    /// Rebuilds the tree at the minimum height for its length.
    ///
    /// Values keep their nodes; only the links between nodes change. Of the values in each
    /// subtree, the median (the lower one, for an even count) becomes the subtree's root.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: ordtree::OrderedTree<_> = (1..8).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().next(), Some(&4));
    /// ```
    pub fn rebalance(&mut self) {
        debug!(len = self.len, height = self.height(), "rebalancing tree");
        node::rebalance(&mut self.root, &self.cmp);
        debug!(height = self.height(), "rebalanced tree");
    }

    /// Returns a reference to the smallest value in the tree that is strictly greater than the
    /// given one, or `None` if there is none.
    ///
    /// The given value need not itself be present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&0), Some(&1));
    /// assert_eq!(tree.successor(&2), Some(&3));
    /// assert_eq!(tree.successor(&3), None);
    /// ```
    pub fn successor<Q: ?Sized>(&self, value: &Q) -> Option<&T> where C: Compare<Q, T> {
        Right::neighbor(&self.root, &self.cmp, value)
    }

    /// Returns a reference to the greatest value in the tree that is strictly less than the
    /// given one, or `None` if there is none.
    ///
    /// The given value need not itself be present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&4), Some(&3));
    /// assert_eq!(tree.predecessor(&2), Some(&1));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor<Q: ?Sized>(&self, value: &Q) -> Option<&T> where C: Compare<Q, T> {
        Left::neighbor(&self.root, &self.cmp, value)
    }

    /// Returns a reference to the tree's smallest value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> { Left::extremum(&self.root) }

    /// Returns a reference to the tree's greatest value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> { Right::extremum(&self.root) }

    /// Returns an iterator over the tree's values in preorder. Same as
    /// [`preorder`](#method.preorder).
    pub fn iter(&self) -> PreOrder<T> { self.preorder() }

    /// Returns an iterator over the tree's values in preorder: each value before the values in
    /// its left subtree, and those before the values in its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), [&5, &3, &1, &4, &8]);
    /// ```
    pub fn preorder(&self) -> PreOrder<T> { PreOrder::new(&self.root, self.len) }

    /// Returns an iterator over the tree's values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &3, &4, &5, &8]);
    /// ```
    pub fn inorder(&self) -> InOrder<T> { InOrder::new(&self.root, self.len) }

    /// Returns an iterator over the tree's values one depth level at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.levelorder().collect::<Vec<_>>(), [&5, &3, &8, &1, &4]);
    /// ```
    pub fn levelorder(&self) -> LevelOrder<T> { LevelOrder::new(&self.root, self.len) }
}

impl<T, C> Drop for OrderedTree<T, C> where C: Compare<T> {
    fn drop(&mut self) { node::drop_link(&mut self.root); }
}

impl<T, C> Clone for OrderedTree<T, C> where T: Clone, C: Clone + Compare<T> {
    fn clone(&self) -> Self {
        OrderedTree { root: node::clone_link(&self.root), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<T, C> Debug for OrderedTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated a quarter turn counterclockwise.
///
/// # Examples
///
/// ```
/// let tree: ordtree::OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T, C> Display for OrderedTree<T, C> where T: Display, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { node::fmt_sideways(&self.root, f) }
}

impl<T, C> Default for OrderedTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { OrderedTree::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for OrderedTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for value in it { self.insert(value); }
    }
}

impl<T, C> iter::FromIterator<T> for OrderedTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree: Self = Default::default();
        tree.extend(it);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = PreOrder<'a, T>;
    fn into_iter(self) -> PreOrder<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for OrderedTree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let root = self.root.take();
        IntoIter::new(root, self.len)
    }
}

impl<T, C> PartialEq for OrderedTree<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.inorder().zip(other.inorder()).all(|(l, r)| self.cmp.compares_eq(l, r))
    }
}

impl<T, C> Eq for OrderedTree<T, C> where C: Compare<T> {}
