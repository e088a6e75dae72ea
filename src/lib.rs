//! An ordered collection based on a binary search tree that is rebalanced on demand.
//!
//! [`OrderedTree`] keeps its values in a plain binary search tree. Insertion and removal never
//! restructure the tree beyond the nodes they touch, so inserting values in sorted order
//! produces a tree as tall as a linked list. [`OrderedTree::rebalance`] rebuilds the tree at
//! minimum height from its sorted contents, and [`OrderedTree::is_balanced`] reports when a
//! rebuild is worthwhile.
//!
//! Every operation walks the tree with an explicit loop or stack, so the depth of a degenerate
//! tree never translates into call-stack depth.
//!
//! # Examples
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.height(), 2);
//!
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.len(), 6);
//!
//! assert_eq!(tree.successor(&4), Some(&7));
//! assert_eq!(tree.predecessor(&4), Some(&3));
//! assert_eq!(tree.range_find(&2, &8), [&3, &4, &7, &8]);
//! ```

#![warn(missing_docs)]

mod error;
mod node;
pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::NotFoundError;
pub use tree::OrderedTree;
