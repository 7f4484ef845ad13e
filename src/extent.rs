//! `extent` defines the `Extent` trait implemented by the unsigned
//! integer types that can hold extents and strides.
//!
//! It is implemented for all unsigned primitive types
//! thanks to the `expand_impl` procedural macro from
//! `strata_macros` crate.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use strata_macros::expand_impl;

pub trait Extent: Copy + Default + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// Product of `self` and `rhs`, or `None` on overflow.
    fn checked_product(self, rhs: Self) -> Option<Self>;
}

#[expand_impl(
    _u128<T=u128>,
    _u64<T=u64>,
    _u32<T=u32>,
    _u16<T=u16>,
    _u8<T=u8>,
    _usize<T=usize>,
)]
impl<T> Extent for T {
    const ZERO: T = 0;
    const ONE: T = 1;

    #[inline]
    fn checked_product(self, rhs: T) -> Option<T> {
        self.checked_mul(rhs)
    }
}
