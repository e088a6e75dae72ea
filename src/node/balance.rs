use compare::Compare;
use super::{Link, Node};

/// Checks a tree's height against the heuristic bound `2·log2(len + 1) − 1`.
///
/// This is looser than the AVL condition. An empty tree (height `-1`) does not pass.
pub fn is_balanced(height: isize, len: usize) -> bool {
    (height as f64) < 2.0 * ((len + 1) as f64).log2() - 1.0
}

/// Rebuilds the tree under `link` at minimum height.
///
/// Every node is detached, the detached nodes are sorted by value, and the median of each
/// index range becomes the root of that range's subtree. The nodes themselves are reused.
pub fn rebalance<T, C>(link: &mut Link<T>, cmp: &C) where C: Compare<T> {
    let mut nodes = detach(link);
    nodes.sort_by(|l, r| cmp.compare(&l.value, &r.value));

    let mut slots: Vec<Link<T>> = nodes.into_iter().map(Some).collect();
    *link = build(&mut slots);
}

// Empties the tree, returning its nodes in preorder with no children attached.
fn detach<T>(link: &mut Link<T>) -> Vec<Box<Node<T>>> {
    let mut nodes = vec![];
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.right.take());
        stack.extend(node.left.take());
        nodes.push(node);
    }

    nodes
}

// Recursion depth is logarithmic in the number of slots.
fn build<T>(slots: &mut [Link<T>]) -> Link<T> {
    if slots.is_empty() { return None; }

    let (left, rest) = slots.split_at_mut((slots.len() - 1) / 2);
    let (middle, right) = rest.split_first_mut()?;

    let mut node = middle.take()?;
    node.left = build(left);
    node.right = build(right);
    Some(node)
}
