use quickcheck::{Arbitrary, Gen};

mod heap;
mod quickselect;
mod tree;

/// An enum for the various kinds of "things" to do to a
/// container in a quicktest. Positions are reduced modulo the
/// container's length when the operation is applied.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add the T to the container
    Insert(T),
    /// Remove something equal to the T from the container
    Remove(T),
    /// Remove whatever sits at some position
    RemoveAt(usize),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RemoveAt(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
