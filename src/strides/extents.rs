//! `extents` is the facade through which stride tables read a runtime shape.
//!
//! Any contiguous sequence of `Extent` values can act as a shape: slices,
//! `Vec`s, arrays and `GenericArray`s all implement `Extents`.

use crate::error::{Result, StridesError};
use crate::extent::Extent;
use generic_array::{ArrayLength, GenericArray};
use std::ops::Range;

/// Read-only view on the extents of a shape, one per axis.
pub trait Extents {
    type Value: Extent;

    fn as_slice(&self) -> &[Self::Value];

    /// Number of axes.
    #[inline]
    fn rank(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Extent of `axis`.
    fn at(&self, axis: usize) -> Result<Self::Value> {
        self.as_slice()
            .get(axis)
            .copied()
            .ok_or(StridesError::OutOfRange {
                index: axis,
                rank: self.rank(),
            })
    }

    /// True if there is at least one axis and all extents are 1.
    fn is_scalar(&self) -> bool {
        !self.is_empty() && self.as_slice().iter().all(|&e| e == Self::Value::ONE)
    }

    /// True for a single axis longer than 1, or when one of the first two
    /// extents is 1, the other is greater than 1 and all remaining extents
    /// are 1.
    fn is_vector(&self) -> bool {
        let extents = self.as_slice();
        let one = Self::Value::ONE;

        match extents.len() {
            0 => false,
            1 => extents[0] > one,
            _ => {
                let head = &extents[..2];
                head.iter().any(|&e| e > one)
                    && head.iter().any(|&e| e == one)
                    && extents[2..].iter().all(|&e| e == one)
            }
        }
    }

    /// True if no extent is zero.
    fn is_valid(&self) -> bool {
        self.first_invalid_axis().is_none()
    }

    /// First axis whose extent is zero.
    fn first_invalid_axis(&self) -> Option<usize> {
        self.as_slice()
            .iter()
            .position(|&e| e == Self::Value::ZERO)
    }

    /// Product of the extents of the axes in `axes`, 1 for an empty range.
    fn product(&self, axes: Range<usize>) -> Result<Self::Value> {
        let rank = self.rank();
        if axes.start > axes.end || axes.end > rank {
            return Err(StridesError::OutOfRange {
                index: axes.end.max(axes.start),
                rank,
            });
        }

        let extents = &self.as_slice()[axes.clone()];
        extents
            .iter()
            .zip(axes)
            .try_fold(Self::Value::ONE, |acc, (&e, axis)| {
                acc.checked_product(e).ok_or(StridesError::Overflow { axis })
            })
    }
}

impl<T> Extents for [T]
where
    T: Extent,
{
    type Value = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Extents for Vec<T>
where
    T: Extent,
{
    type Value = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self[..]
    }
}

impl<T, const N: usize> Extents for [T; N]
where
    T: Extent,
{
    type Value = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self[..]
    }
}

impl<T, N> Extents for GenericArray<T, N>
where
    T: Extent,
    N: ArrayLength<T>,
{
    type Value = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self[..]
    }
}
