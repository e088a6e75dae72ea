use thiserror::Error;

/// The error returned by [`OrderedTree::remove`](crate::OrderedTree::remove) when
/// the tree holds no value equal to the given one.
///
/// A failed removal leaves the tree unchanged.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[error("value not found in tree")]
pub struct NotFoundError;
