use ::quickcheck::{Arbitrary, Gen};
use compare::{natural, Natural};
use quickcheck_macros::quickcheck;
use super::{clone_link, drop_link, height, insert, rebalance, remove, replace, Dir, Left, Link, LinkExt, Node, Right};
use super::iter::{InOrder, PreOrder};

/// An operation on a bare link.
#[derive(Clone, Debug)]
enum Op {
    /// Insert a value.
    Insert(u8),
    /// Remove the value at index `n % len` of the ascending order.
    Remove(usize),
    /// Rebuild at minimum height.
    Rebalance,
}

impl Arbitrary for Op {
    fn arbitrary(gen: &mut Gen) -> Op {
        match gen.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(u8::arbitrary(gen)),
            1 => Op::Remove(usize::arbitrary(gen)),
            _ => Op::Rebalance,
        }
    }
}

fn count(link: &Link<u8>) -> usize { PreOrder::new(link, usize::MAX).count() }

fn sorted(link: &Link<u8>) -> Vec<u8> { InOrder::new(link, count(link)).cloned().collect() }

fn build(values: &[u8]) -> Link<u8> {
    let mut link = None;
    for &value in values { insert(&mut link, &natural(), value); }
    link
}

fn root_value(link: &Link<u8>) -> Option<u8> { link.as_node_ref().map(|node| node.value) }

impl Op {
    fn exec(self, link: &mut Link<u8>) {
        let cmp: Natural<u8> = natural();

        match self {
            Op::Insert(value) => insert(link, &cmp, value),
            Op::Remove(index) => {
                let values = sorted(link);
                if !values.is_empty() {
                    let value = values[index % values.len()];
                    assert_eq!(remove(link, &cmp, &value), Some(value));
                }
            }
            Op::Rebalance => rebalance(link, &cmp),
        }
    }
}

// Every value in a left subtree is at most its parent's, every value in a right subtree at
// least. Equal values may sit on either side once the tree has been rebuilt.
fn assert_ordered(link: &Link<u8>) {
    let mut stack: Vec<(&Node<u8>, u8, u8)> =
        link.as_node_ref().map(|node| (node, u8::MIN, u8::MAX)).into_iter().collect();

    while let Some((node, min, max)) = stack.pop() {
        assert!(min <= node.value && node.value <= max);
        stack.extend(node.left.as_node_ref().map(|left| (left, min, node.value)));
        stack.extend(node.right.as_node_ref().map(|right| (right, node.value, max)));
    }
}

fn node_addresses(link: &Link<u8>) -> Vec<usize> {
    let mut addresses = vec![];
    let mut stack: Vec<&Node<u8>> = link.as_node_ref().into_iter().collect();

    while let Some(node) = stack.pop() {
        addresses.push(node as *const Node<u8> as usize);
        stack.extend(node.left.as_node_ref());
        stack.extend(node.right.as_node_ref());
    }

    addresses.sort();
    addresses
}

fn minimum_height(len: usize) -> isize {
    (usize::BITS - len.leading_zeros()) as isize - 1
}

#[quickcheck]
fn ops_keep_order(ops: Vec<Op>) -> bool {
    let mut link = None;
    for op in ops { op.exec(&mut link); }
    assert_ordered(&link);
    true
}

#[test]
fn example_tree() {
    let mut link = build(&[5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(sorted(&link), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(height(&link), 2);

    assert_eq!(remove(&mut link, &natural(), &5), Some(5));
    assert_eq!(root_value(&link), Some(4));
    assert_eq!(sorted(&link), [1, 3, 4, 7, 8, 9]);

    rebalance(&mut link, &natural());
    assert_eq!(height(&link), 2);
    assert_ordered(&link);
}

#[test]
fn ties_route_right() {
    let link = build(&[5, 5, 5]);
    let root = link.as_node_ref().unwrap();

    assert!(root.left.is_none());
    assert_eq!(root.right.as_node_ref().map(|node| node.value), Some(5));
    assert_eq!(height(&link), 2);
}

#[test]
fn remove_leaf() {
    let mut link = build(&[2, 1, 3]);
    assert_eq!(remove(&mut link, &natural(), &1), Some(1));

    let root = link.as_node_ref().unwrap();
    assert!(root.left.is_none());
    assert_eq!(sorted(&link), [2, 3]);
}

#[test]
fn remove_with_only_right_child() {
    let mut link = build(&[1, 2, 3]);
    assert_eq!(remove(&mut link, &natural(), &1), Some(1));
    assert_eq!(root_value(&link), Some(2));
    assert_eq!(height(&link), 1);
}

#[test]
fn remove_with_only_left_child() {
    let mut link = build(&[5, 4, 3, 6]);
    assert_eq!(remove(&mut link, &natural(), &4), Some(4));

    let root = link.as_node_ref().unwrap();
    assert_eq!(root.left.as_node_ref().map(|node| node.value), Some(3));
    assert_eq!(sorted(&link), [3, 5, 6]);
}

#[test]
fn remove_with_two_children_lifts_left_maximum() {
    // The left subtree's maximum (6) has a left child (5) that must take its place.
    let mut link = build(&[8, 2, 9, 1, 6, 5]);
    assert_eq!(remove(&mut link, &natural(), &8), Some(8));

    assert_eq!(root_value(&link), Some(6));
    assert_eq!(sorted(&link), [1, 2, 5, 6, 9]);

    let root = link.as_node_ref().unwrap();
    let left = root.left.as_node_ref().unwrap();
    assert_eq!(left.right.as_node_ref().map(|node| node.value), Some(5));
}

#[test]
fn remove_two_children_with_adjacent_maximum() {
    // The left child is itself the maximum of the left subtree.
    let mut link = build(&[5, 3, 8, 1]);
    assert_eq!(remove(&mut link, &natural(), &5), Some(5));

    assert_eq!(root_value(&link), Some(3));
    let root = link.as_node_ref().unwrap();
    assert_eq!(root.left.as_node_ref().map(|node| node.value), Some(1));
}

#[test]
fn remove_last_value_empties_link() {
    let mut link = build(&[7]);
    assert_eq!(remove(&mut link, &natural(), &7), Some(7));
    assert!(link.is_none());
    assert_eq!(height(&link), -1);
}

#[test]
fn remove_absent_leaves_shape() {
    let mut link = build(&[5, 3, 8, 1, 4]);
    let before: Vec<u8> = PreOrder::new(&link, 5).cloned().collect();

    assert_eq!(remove(&mut link, &natural(), &6), None);

    let after: Vec<u8> = PreOrder::new(&link, 5).cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn remove_duplicate_takes_one() {
    let mut link = build(&[4, 4, 2, 4]);
    assert_eq!(remove(&mut link, &natural(), &4), Some(4));
    assert_eq!(sorted(&link), [2, 4, 4]);
    assert_ordered(&link);
}

#[test]
fn slot_search_reaches_deep_and_missing_slots() {
    let mut link = build(&[50, 20, 80, 10, 30, 70, 90, 25]);

    assert_eq!(remove(&mut link, &natural(), &25), Some(25));
    assert_eq!(remove(&mut link, &natural(), &99), None);
    assert_eq!(replace(&mut link, &natural(), &75, 75), None);

    assert_eq!(Left::remove_extremum(&mut link), Some(10));
    assert_eq!(Right::remove_extremum(&mut link), Some(90));
    assert_eq!(sorted(&link), [20, 30, 50, 70, 80]);

    let mut empty: Link<u8> = None;
    assert_eq!(Right::remove_extremum(&mut empty), None);
    assert_eq!(remove(&mut empty, &natural(), &1), None);
}

#[test]
fn replace_keeps_shape() {
    let mut link = build(&[5, 3, 8]);
    let cmp = |l: &(u8, u8), r: &(u8, u8)| l.0.cmp(&r.0);

    let mut pairs: Link<(u8, u8)> = None;
    for value in [5, 3, 8] { insert(&mut pairs, &cmp, (value, 0)); }

    assert_eq!(replace(&mut pairs, &cmp, &(3, 0), (3, 1)), Some((3, 0)));
    assert_eq!(replace(&mut pairs, &cmp, &(4, 0), (4, 1)), None);

    let root = pairs.as_node_ref().unwrap();
    assert_eq!(root.left.as_node_ref().map(|node| node.value), Some((3, 1)));

    assert_eq!(replace(&mut link, &natural(), &8, 8), Some(8));
    assert_eq!(sorted(&link), [3, 5, 8]);
}

#[test]
fn height_counts_edges() {
    assert_eq!(height(&build(&[])), -1);
    assert_eq!(height(&build(&[1])), 0);
    assert_eq!(height(&build(&[1, 2])), 1);
    assert_eq!(height(&build(&[2, 1, 3])), 1);
    assert_eq!(height(&build(&[1, 2, 3, 4])), 3);
}

#[test]
fn rebalance_picks_lower_median() {
    let mut link = build(&[1, 2, 3, 4, 5, 6, 7]);
    rebalance(&mut link, &natural());

    let root = link.as_node_ref().unwrap();
    assert_eq!(root.value, 4);
    assert_eq!(root.left.as_node_ref().map(|node| node.value), Some(2));
    assert_eq!(root.right.as_node_ref().map(|node| node.value), Some(6));

    let mut link = build(&[1, 2, 3, 4]);
    rebalance(&mut link, &natural());
    assert_eq!(root_value(&link), Some(2));
}

#[test]
fn rebalance_empty() {
    let mut link: Link<u8> = None;
    rebalance(&mut link, &natural());
    assert!(link.is_none());
}

#[quickcheck]
fn rebalance_reuses_nodes(values: Vec<u8>) -> bool {
    let mut link = build(&values);
    let before = node_addresses(&link);
    rebalance(&mut link, &natural());
    before == node_addresses(&link)
}

#[quickcheck]
fn rebalance_reaches_minimum_height(values: Vec<u8>) -> bool {
    let mut link = build(&values);
    let mut expected = values.clone();
    expected.sort();

    rebalance(&mut link, &natural());

    height(&link) == minimum_height(values.len()) && sorted(&link) == expected
}

#[quickcheck]
fn extrema_agree_with_sorted(values: Vec<u8>) -> bool {
    let link = build(&values);
    let sorted = sorted(&link);

    Left::extremum(&link) == sorted.first() && Right::extremum(&link) == sorted.last()
}

#[quickcheck]
fn remove_extremum_takes_maximum(values: Vec<u8>) -> bool {
    let mut link = build(&values);
    let mut expected = values.clone();
    expected.sort();
    let max = expected.pop();

    Right::remove_extremum(&mut link) == max && sorted(&link) == expected
}

#[quickcheck]
fn clone_keeps_shape(values: Vec<u8>) -> bool {
    let link = build(&values);
    let clone = clone_link(&link);

    PreOrder::new(&link, values.len()).eq(PreOrder::new(&clone, values.len()))
        && height(&link) == height(&clone)
}

#[test]
fn degenerate_tree_does_not_overflow_stack() {
    const LEN: u32 = 500_000;

    let mut link: Link<u32> = None;
    for value in (0..LEN).rev() {
        link = Some(Box::new(Node { left: None, right: link, value: value }));
    }

    assert_eq!(height(&link), LEN as isize - 1);

    let mut clone = clone_link(&link);
    assert_eq!(height(&clone), LEN as isize - 1);
    drop_link(&mut clone);
    assert!(clone.is_none());

    rebalance(&mut link, &natural());
    assert_eq!(height(&link), 18);

    drop_link(&mut link);
}
