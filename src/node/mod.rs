mod balance;
pub mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::{self, *};
use std::fmt;
use std::mem;

pub use self::balance::{is_balanced, rebalance};

pub type Link<T> = Option<Box<Node<T>>>;

pub trait LinkExt {
    type T;
    fn as_node_ref(&self) -> Option<&Node<Self::T>>;
}

impl<T> LinkExt for Link<T> {
    type T = T;

    fn as_node_ref(&self) -> Option<&Node<T>> { self.as_deref() }
}

pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    value: T,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { left: None, right: None, value: value }
    }
}

/// Attaches a new leaf holding `value`. Ties route right, so equal values end up below and to
/// the right of the first one inserted.
pub fn insert<T, C>(mut link: &mut Link<T>, cmp: &C, value: T) where C: Compare<T> {
    while let Some(node) = link {
        link = if cmp.compares_lt(&value, &node.value) { &mut node.left } else { &mut node.right };
    }

    *link = Some(Box::new(Node::new(value)));
}

pub fn find<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.value) {
            Equal => return Some(&node.value),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

// Returns the slot holding the first node equal to `key` on the search path, or the empty slot
// where the search fell off the tree.
fn find_slot<'a, T, C, Q: ?Sized>(mut link: &'a mut Link<T>, cmp: &C, key: &Q)
    -> &'a mut Link<T> where C: Compare<Q, T> {

    loop {
        let order = match *link {
            None => return link,
            Some(ref node) => cmp.compare(key, &node.value),
        };

        if order == Equal { return link; }

        link = match {link} {
            Some(node) => if order == Less { &mut node.left } else { &mut node.right },
            empty => return empty,
        };
    }
}

/// Removes the first node equal to `key` on the search path and returns its value.
///
/// A node with two children keeps its place in the tree: it takes over the maximum value of its
/// left subtree, and the node that held that maximum is spliced out instead.
pub fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, key: &Q) -> Option<T>
    where C: Compare<Q, T> {

    let link = find_slot(link, cmp, key);

    let lifted = match *link {
        None => return None,
        Some(ref mut node) if node.left.is_some() && node.right.is_some() =>
            Right::remove_extremum(&mut node.left).map(|max| mem::replace(&mut node.value, max)),
        Some(_) => None,
    };

    lifted.or_else(|| link.take().map(|node| {
        let Node { left, right, value } = *node;
        *link = if left.is_none() { right } else { left };
        value
    }))
}

/// Overwrites the value of the first node equal to `key`, leaving the tree's shape alone.
pub fn replace<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, key: &Q, value: T) -> Option<T>
    where C: Compare<Q, T> {

    match *find_slot(link, cmp, key) {
        Some(ref mut node) => Some(mem::replace(&mut node.value, value)),
        None => None,
    }
}

/// Returns the number of edges on the longest path from `link` down to a leaf, or `-1` for an
/// empty link.
pub fn height<T>(link: &Link<T>) -> isize {
    let mut height = -1;
    let mut stack: Vec<(&Node<T>, isize)> = link.as_node_ref().map(|node| (node, 0)).into_iter().collect();

    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left.as_node_ref().map(|left| (left, depth + 1)));
        stack.extend(node.right.as_node_ref().map(|right| (right, depth + 1)));
    }

    height
}

/// Collects every value `v` with `low <= v <= high`, skipping subtrees that cannot hold one.
///
/// The values come out in visiting order, not sorted order.
pub fn range<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, low: &Q, high: &Q) -> Vec<&'a T>
    where C: Compare<Q, T> {

    let mut found = vec![];
    let mut stack: Vec<&'a Node<T>> = link.as_node_ref().into_iter().collect();

    while let Some(node) = stack.pop() {
        let above_low = cmp.compares_le(low, &node.value);
        let below_high = cmp.compares_ge(high, &node.value);

        if above_low && below_high { found.push(&node.value); }
        if below_high { stack.extend(node.right.as_node_ref()); }
        if above_low { stack.extend(node.left.as_node_ref()); }
    }

    found
}

/// Copies the tree node for node, keeping its exact shape.
pub fn clone_link<T>(link: &Link<T>) -> Link<T> where T: Clone {
    enum Task<'a, T: 'a> {
        Visit(Option<&'a Node<T>>),
        Build(&'a Node<T>),
    }

    let mut tasks = vec![Task::Visit(link.as_node_ref())];
    let mut built: Vec<Link<T>> = vec![];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(None) => built.push(None),
            Task::Visit(Some(node)) => {
                tasks.push(Task::Build(node));
                tasks.push(Task::Visit(node.right.as_node_ref()));
                tasks.push(Task::Visit(node.left.as_node_ref()));
            }
            Task::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node { left: left, right: right, value: node.value.clone() })));
            }
        }
    }

    built.pop().flatten()
}

/// Drops every node under `link` without recursing, so that a degenerate tree of any height can
/// be released.
pub fn drop_link<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Writes the tree rotated a quarter turn counterclockwise: one value per line, the right
/// subtree above its parent, each line indented by `"| "` per level of depth.
pub fn fmt_sideways<T>(link: &Link<T>, f: &mut fmt::Formatter) -> fmt::Result
    where T: fmt::Display {

    let mut stack: Vec<(&Node<T>, usize)> = vec![];
    let mut next = link.as_node_ref().map(|node| (node, 0));

    loop {
        while let Some((node, level)) = next {
            stack.push((node, level));
            next = node.right.as_node_ref().map(|right| (right, level + 1));
        }

        match stack.pop() {
            None => return Ok(()),
            Some((node, level)) => {
                writeln!(f, "{}{}", "| ".repeat(level), node.value)?;
                next = node.left.as_node_ref().map(|left| (left, level + 1));
            }
        }
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    /// The result of comparing a key with a node's value that sends a search this way.
    const ORDER: Ordering;

    fn forward<T>(node: &Node<T>) -> &Link<T>;
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T>;

    fn extremum<T>(mut link: &Link<T>) -> Option<&T> {
        let mut extremum = None;

        while let Some(node) = link.as_node_ref() {
            extremum = Some(&node.value);
            link = Self::forward(node);
        }

        extremum
    }

    /// Unlinks the node furthest in this direction and returns its value. The node's only
    /// possible child, on the opposite side, takes its slot.
    fn remove_extremum<T>(mut link: &mut Link<T>) -> Option<T> {
        loop {
            let at_end = match link.as_node_ref() {
                None => return None,
                Some(node) => Self::forward(node).is_none(),
            };

            if at_end { break; }

            link = match {link} {
                Some(node) => Self::forward_mut(&mut **node),
                None => return None,
            };
        }

        link.take().map(|node| {
            let mut node = *node;
            *link = Self::Opposite::forward_mut(&mut node).take();
            node.value
        })
    }

    /// Returns the value nearest to `key` that lies strictly past it in this direction.
    fn neighbor<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a T>
        where C: Compare<Q, T> {

        let mut closest = None;

        while let Some(node) = link.as_node_ref() {
            link = if cmp.compare(key, &node.value) == Self::Opposite::ORDER {
                closest = Some(&node.value);
                Self::Opposite::forward(node)
            } else {
                Self::forward(node)
            };
        }

        closest
    }
}

#[allow(unused)]
pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    const ORDER: Ordering = Less;

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.left }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.left }
}

#[allow(unused)]
pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    const ORDER: Ordering = Greater;

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.right }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.right }
}
