use super::dynamic_strides::Strides;
use super::fixed_rank_strides::FixedRankStrides;
use super::layout::{FirstOrder, LastOrder, Layout, Order};
use super::shape::{Degenerate, FirstOrderFold, If, LastOrderFold, Ones, StaticExtents, StaticShape, ValueList};
use crate::error::{Result, StridesError};
use generic_array::ArrayLength;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Index;
use typenum::U1;

/// Type operator that outputs the strides of the implementor shape for
/// the layout `L`, as a type-level list:
/// * the all-ones list if the shape is a vector or a scalar,
/// * the `FirstOrderFold` or `LastOrderFold` of the shape otherwise.
pub trait StridesOf<L> {
    type Output: ValueList;
}

impl<S> StridesOf<FirstOrder> for S
where
    S: Degenerate + Ones + FirstOrderFold<U1>,
    <S as Degenerate>::Output: If<<S as Ones>::Output, <S as FirstOrderFold<U1>>::Output>,
    <<S as Degenerate>::Output as If<<S as Ones>::Output, <S as FirstOrderFold<U1>>::Output>>::Output:
        ValueList,
{
    type Output =
        <<S as Degenerate>::Output as If<<S as Ones>::Output, <S as FirstOrderFold<U1>>::Output>>::Output;
}

impl<S> StridesOf<LastOrder> for S
where
    S: Degenerate + Ones + LastOrderFold,
    <S as Degenerate>::Output: If<<S as Ones>::Output, <S as LastOrderFold>::Output>,
    <<S as Degenerate>::Output as If<<S as Ones>::Output, <S as LastOrderFold>::Output>>::Output:
        ValueList,
{
    type Output =
        <<S as Degenerate>::Output as If<<S as Ones>::Output, <S as LastOrderFold>::Output>>::Output;
}

/// Strides of a shape known at compile time.
///
/// `StaticStrides` is zero-sized: the strides are the type-level list
/// `<S as StridesOf<L>>::Output`, resolved by the compiler, and every
/// read returns one of its constants. All the instances of a given
/// `(S, L)` pair therefore share the same table.
///
/// The type can only be used with a valid shape. A zero extent is
/// rejected when the program is compiled:
///
/// ```compile_fail
/// use strata::prelude::*;
/// use typenum::{U0, U2};
///
/// let strides: StaticStrides<Shape2D<U2, U0>, FirstOrder> = StaticStrides::new();
/// ```
///
/// # Example
///
/// ```
/// use strata::prelude::*;
/// use typenum::{U2, U3, U4};
///
/// let strides: StaticStrides<Shape3D<U2, U3, U4>, RowMajor> = StaticStrides::new();
/// assert_eq!(strides.to_vec(), vec![12, 4, 1]);
/// assert_eq!(strides[0], 12);
/// ```
pub struct StaticStrides<S, L> {
    _phantoms: PhantomData<(S, L)>,
}

impl<S, L> StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    pub const fn new() -> Self {
        StaticStrides {
            _phantoms: PhantomData,
        }
    }

    /// Builds the strides of `extents`. The instance is ignored since the
    /// type already holds the whole shape.
    pub fn from_extents(_extents: &StaticExtents<S>) -> Self {
        Self::new()
    }

    #[inline]
    pub fn layout(&self) -> Order {
        L::ORDER
    }

    /// Number of strides, i.e. the rank of the shape.
    #[inline]
    pub fn rank(&self) -> usize {
        <S as StridesOf<L>>::Output::LEN
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rank() == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        <S as StridesOf<L>>::Output::get(index).copied()
    }

    pub fn at(&self, index: usize) -> Result<usize> {
        self.get(index).ok_or(StridesError::OutOfRange {
            index,
            rank: self.rank(),
        })
    }

    /// Stride of the last axis, `None` for a rank 0 shape.
    #[inline]
    pub fn back(&self) -> Option<usize> {
        self.rank().checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn iter(&self) -> Iter<S, L> {
        Iter {
            front: 0,
            back: self.rank(),
            _phantoms: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        <S as StridesOf<L>>::Output::to_vec()
    }

    /// Copies the strides into a runtime table.
    pub fn to_dyn(&self) -> Strides<usize, L> {
        Strides::from_computed(self.to_vec())
    }
}

impl<S, L> Default for StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, L> Clone for StaticStrides<S, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, L> Copy for StaticStrides<S, L> {}

impl<S, L> PartialEq for StaticStrides<S, L> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<S, L> Eq for StaticStrides<S, L> {}

impl<S, L> Debug for StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticStrides")
            .field("layout", &L::ORDER)
            .field("strides", &self.to_vec())
            .finish()
    }
}

/// Unchecked in the sense of the slice API: panics if `index` is out of range.
impl<S, L> Index<usize> for StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        match <S as StridesOf<L>>::Output::get(index) {
            Some(stride) => stride,
            None => panic!(
                "index {} out of range for static strides of rank {}",
                index,
                self.rank()
            ),
        }
    }
}

impl<S, L> PartialEq<Strides<usize, L>> for StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    fn eq(&self, other: &Strides<usize, L>) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<S, L> PartialEq<StaticStrides<S, L>> for Strides<usize, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    fn eq(&self, other: &StaticStrides<S, L>) -> bool {
        other == self
    }
}

impl<S, N, L> PartialEq<FixedRankStrides<usize, N, L>> for StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    N: ArrayLength<usize>,
    L: Layout,
{
    fn eq(&self, other: &FixedRankStrides<usize, N, L>) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<'a, S, L> IntoIterator for &'a StaticStrides<S, L>
where
    S: StaticShape + StridesOf<L>,
    L: Layout,
{
    type Item = usize;
    type IntoIter = Iter<S, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the strides of a `StaticStrides`.
pub struct Iter<S, L> {
    front: usize,
    back: usize,
    _phantoms: PhantomData<(S, L)>,
}

impl<S, L> Iterator for Iter<S, L>
where
    S: StridesOf<L>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        let stride = <S as StridesOf<L>>::Output::get(self.front).copied();
        self.front += 1;

        stride
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<S, L> DoubleEndedIterator for Iter<S, L>
where
    S: StridesOf<L>,
{
    fn next_back(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;

        <S as StridesOf<L>>::Output::get(self.back).copied()
    }
}

impl<S, L> ExactSizeIterator for Iter<S, L> where S: StridesOf<L> {}

impl<S, L> FusedIterator for Iter<S, L> where S: StridesOf<L> {}
