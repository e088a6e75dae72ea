use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;
use super::OrderedTree;

impl<T, C> Arbitrary for OrderedTree<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { Vec::<T>::arbitrary(gen).into_iter().collect() }

    // Inserting values in preorder rebuilds the same shape, so shrinking keeps the tree's
    // structure as well as its contents.
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<T> = self.preorder().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
