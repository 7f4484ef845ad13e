//! `layout` defines the two traversal orders a stride table can be built for.
//!
//! The order is always part of the type of a table: `FirstOrder`
//! (column-major, the leftmost axis varies fastest) or `LastOrder`
//! (row-major, the rightmost axis varies fastest).

use crate::error::{Result, StridesError};
use crate::extent::Extent;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

/// Runtime descriptor of a `Layout`, mostly useful for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Column-major order.
    First,
    /// Row-major order.
    Last,
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Order::First => write!(f, "first-order"),
            Order::Last => write!(f, "last-order"),
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::FirstOrder {}
    impl Sealed for super::LastOrder {}
}

/// Type-level traversal order of a stride table.
///
/// This trait is sealed: `FirstOrder` and `LastOrder` are the only layouts.
pub trait Layout:
    private::Sealed + Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    const ORDER: Order;

    /// Writes into `strides` the cumulative products of `extents` taken in
    /// the traversal order of the layout.
    ///
    /// Both slices must have the same length, at least 2.
    fn cumulative_strides<T: Extent>(extents: &[T], strides: &mut [T]) -> Result<()>;
}

/// Column-major layout: strides increase from left to right.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirstOrder;

/// Row-major layout: strides increase from right to left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastOrder;

pub type ColumnMajor = FirstOrder;
pub type RowMajor = LastOrder;

impl Layout for FirstOrder {
    const ORDER: Order = Order::First;

    fn cumulative_strides<T: Extent>(extents: &[T], strides: &mut [T]) -> Result<()> {
        debug_assert_eq!(extents.len(), strides.len());

        strides[0] = T::ONE;
        for k in 1..strides.len() {
            strides[k] = strides[k - 1]
                .checked_product(extents[k - 1])
                .ok_or(StridesError::Overflow { axis: k })?;
        }

        Ok(())
    }
}

impl Layout for LastOrder {
    const ORDER: Order = Order::Last;

    fn cumulative_strides<T: Extent>(extents: &[T], strides: &mut [T]) -> Result<()> {
        debug_assert_eq!(extents.len(), strides.len());

        let last = strides.len() - 1;
        strides[last] = T::ONE;
        for k in (0..last).rev() {
            strides[k] = strides[k + 1]
                .checked_product(extents[k + 1])
                .ok_or(StridesError::Overflow { axis: k })?;
        }

        Ok(())
    }
}
