use super::compute_strides;
use super::extents::Extents;
use super::layout::{Layout, Order};
use crate::error::{Result, StridesError};
use crate::extent::Extent;
use std::marker::PhantomData;
use std::ops::Deref;

/// `Vec`-backed strides of a shape whose rank and extents are both
/// known at runtime only.
///
/// The table is allocated once with the exact rank of the shape and
/// never grows nor changes afterwards. Like `FixedRankStrides`, read
/// access goes through `Deref<Target = [T]>` and `at`.
///
/// `Strides` is the default runtime table and should be prefered
/// unless the rank is known at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strides<T, L> {
    data: Vec<T>,
    _phantoms: PhantomData<L>,
}

impl<T, L> Strides<T, L>
where
    T: Extent,
    L: Layout,
{
    /// Computes the strides of `extents`, of any rank.
    pub fn new<E>(extents: &E) -> Result<Self>
    where
        E: Extents<Value = T> + ?Sized,
    {
        let mut data = vec![T::ONE; extents.rank()];
        compute_strides::<L, E>(extents, &mut data)?;

        Ok(Strides {
            data,
            _phantoms: PhantomData,
        })
    }

    /// Wraps strides that were already computed for the layout `L`.
    pub(crate) fn from_computed(data: Vec<T>) -> Self {
        Strides {
            data,
            _phantoms: PhantomData,
        }
    }

    #[inline]
    pub fn layout(&self) -> Order {
        L::ORDER
    }

    /// Number of strides, i.e. the rank of the shape.
    #[inline]
    pub fn rank(&self) -> usize {
        self.data.len()
    }

    pub fn at(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(StridesError::OutOfRange {
                index,
                rank: self.rank(),
            })
    }

    /// Stride of the last axis, `None` for a rank 0 shape.
    #[inline]
    pub fn back(&self) -> Option<T> {
        self.data.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, L> Deref for Strides<T, L> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.data.as_slice()
    }
}

impl<'a, T, L> IntoIterator for &'a Strides<T, L> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
