//! `strides` computes the stride tables that map multi-dimensional indices
//! to linear offsets, for column-major (`FirstOrder`) and row-major
//! (`LastOrder`) layouts.
//!
//! Three tables are available, all producing the same values for the same
//! shape and layout:
//! * `Strides` when both rank and extents are known at runtime,
//! * `FixedRankStrides` when the rank is a type-level integer,
//! * `StaticStrides` when the whole shape is a type-level list, in which
//!   case the strides are resolved at compile time.
//!
//! For a multi-index `idx`, the offset of an element is the sum of
//! `idx[i] * stride[i]`. Computing it, and checking `idx` against the
//! extents, is left to the consumer of the table.

pub mod dynamic_strides;
pub mod extents;
pub mod fixed_rank_strides;
pub mod layout;
pub mod prelude;
pub mod shape;
pub mod static_strides;

use crate::error::{Result, StridesError};
use crate::extent::Extent;
use extents::Extents;
use layout::Layout;

/// Fills `strides` with the strides of `extents` for the layout `L`.
///
/// Vectors and scalars get all-ones strides, other valid shapes the
/// cumulative products of their extents. `strides` must have the rank of
/// `extents`.
pub(crate) fn compute_strides<L, E>(extents: &E, strides: &mut [E::Value]) -> Result<()>
where
    L: Layout,
    E: Extents + ?Sized,
{
    let rank = extents.rank();
    debug_assert_eq!(rank, strides.len());

    strides.iter_mut().for_each(|stride| *stride = E::Value::ONE);

    if extents.is_empty() {
        return Ok(());
    }

    if let Some(axis) = extents.first_invalid_axis() {
        tracing::debug!(
            "rejecting {} strides for {:?}: extent of axis {} is zero",
            L::ORDER,
            extents.as_slice(),
            axis,
        );
        return Err(StridesError::InvalidShape { axis });
    }

    if extents.is_vector() || extents.is_scalar() {
        return Ok(());
    }

    if rank < 2 {
        tracing::debug!(
            "rejecting {} strides for {:?}: rank {} is too small",
            L::ORDER,
            extents.as_slice(),
            rank,
        );
        return Err(StridesError::RankTooSmall(rank));
    }

    if let Err(err) = L::cumulative_strides(extents.as_slice(), strides) {
        tracing::debug!("rejecting {} strides for {:?}: {}", L::ORDER, extents.as_slice(), err);
        return Err(err);
    }

    tracing::trace!(
        "computed {} strides {:?} for {:?}",
        L::ORDER,
        strides,
        extents.as_slice(),
    );

    Ok(())
}
