use ::ordered_iter::OrderedSetIterator;
use super::tree::{InOrder, IntoIter};

impl<'a, T> OrderedSetIterator for InOrder<'a, T> where T: Ord {}

impl<T> OrderedSetIterator for IntoIter<T> where T: Ord {}
