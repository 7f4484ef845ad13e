use super::compute_strides;
use super::dynamic_strides::Strides;
use super::extents::Extents;
use super::layout::{Layout, Order};
use crate::error::{Result, StridesError};
use crate::extent::Extent;
use generic_array::{ArrayLength, GenericArray};
use std::marker::PhantomData;
use std::ops::Deref;

/// Strides of a shape whose rank `N` is a type-level integer and whose
/// extents are only known at runtime.
///
/// The table is computed once by `new` and stored inline in a
/// `GenericArray`, so it does not allocate. It cannot be modified
/// afterwards, only replaced as a whole. Read access goes through
/// `Deref<Target = [T]>`; indexing with `[]` panics out of range while
/// `at` reports an error.
///
/// # Example
///
/// ```
/// use strata::prelude::*;
/// use typenum::U3;
///
/// let strides: FixedRankStrides<usize, U3, ColumnMajor> = FixedRankStrides::new(&[2, 3, 4]).unwrap();
/// assert_eq!(strides.as_slice(), &[1, 2, 6]);
///
/// let err = FixedRankStrides::<usize, U3, ColumnMajor>::new(&[2, 3]).unwrap_err();
/// assert_eq!(err, StridesError::LengthMismatch { expected: 3, got: 2 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedRankStrides<T, N, L>
where
    N: ArrayLength<T>,
{
    data: GenericArray<T, N>,
    _phantoms: PhantomData<L>,
}

impl<T, N, L> FixedRankStrides<T, N, L>
where
    T: Extent,
    N: ArrayLength<T>,
    L: Layout,
{
    /// Computes the strides of `extents`, whose rank must be `N`.
    pub fn new<E>(extents: &E) -> Result<Self>
    where
        E: Extents<Value = T> + ?Sized,
    {
        if extents.rank() != N::USIZE {
            tracing::debug!(
                "rejecting {} strides for {:?}: expected rank {}",
                L::ORDER,
                extents.as_slice(),
                N::USIZE,
            );
            return Err(StridesError::LengthMismatch {
                expected: N::USIZE,
                got: extents.rank(),
            });
        }

        let mut data: GenericArray<T, N> = GenericArray::default();
        compute_strides::<L, E>(extents, data.as_mut_slice())?;

        Ok(FixedRankStrides {
            data,
            _phantoms: PhantomData,
        })
    }

    #[inline]
    pub fn layout(&self) -> Order {
        L::ORDER
    }

    /// Number of strides, always `N`.
    #[inline]
    pub fn rank(&self) -> usize {
        N::USIZE
    }

    pub fn at(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(StridesError::OutOfRange {
                index,
                rank: N::USIZE,
            })
    }

    /// Stride of the last axis, `None` when `N` is zero.
    #[inline]
    pub fn back(&self) -> Option<T> {
        self.data.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T, N, L> Deref for FixedRankStrides<T, N, L>
where
    N: ArrayLength<T>,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.data.as_slice()
    }
}

impl<'a, T, N, L> IntoIterator for &'a FixedRankStrides<T, N, L>
where
    N: ArrayLength<T>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, N, L> From<FixedRankStrides<T, N, L>> for Strides<T, L>
where
    T: Extent,
    N: ArrayLength<T>,
    L: Layout,
{
    fn from(strides: FixedRankStrides<T, N, L>) -> Self {
        Strides::from_computed(strides.data.to_vec())
    }
}
