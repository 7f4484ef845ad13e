//! `shape` contains the tools to complement the `typenum` crate and use
//! its type-level arrays as compile-time shapes.
//!
//! A static shape is a `TArr` of non-zero type-level unsigned integers
//! terminated by `ATerm`, the first element being the extent of axis 0.
//! The aliases `Shape1D` to `Shape6D` spell them in axis order.
//!
//! As in `typenum`, this module contains two kinds of traits:
//! * type operators that act like type-level functions on type-level entities,
//! * marker traits that provide functions to interact with type-level entities at runtime.
//!
//! Type operators all share the Output associated
//! type that contains the type-level result of the operation the
//! trait represents.

use crate::error::{Result, StridesError};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Mul};
use typenum::marker_traits::{Bit, NonZero, Unsigned};
use typenum::operator_aliases::{And, Eq as EqTo, Gr, Or, Prod};
use typenum::type_operators::{IsEqual, IsGreater};
use typenum::{ATerm, TArr, B0, B1, U1};

/// Marker trait implemented on the type-level unsigned integers that are
/// valid extents, i.e. all of them but `U0`.
pub trait StaticDim: Unsigned + NonZero {}
impl<D> StaticDim for D where D: Unsigned + NonZero {}

/// Marker trait implemented on `TArr` lists of type-level unsigned integers.
/// Provides the `LEN` constant and runtime access to the values.
pub trait ValueList {
    /// Number of elements in the list.
    const LEN: usize;

    /// Value at `index`. The reference points to a compile-time constant.
    fn get(index: usize) -> Option<&'static usize>;

    /// Outputs a `Vec` containing the runtime version of the list.
    fn to_vec() -> Vec<usize> {
        (0..Self::LEN)
            .filter_map(|index| Self::get(index).copied())
            .collect()
    }
}

impl ValueList for ATerm {
    const LEN: usize = 0;

    #[inline]
    fn get(_index: usize) -> Option<&'static usize> {
        None
    }
}

impl<V, A> ValueList for TArr<V, A>
where
    V: Unsigned,
    A: ValueList,
{
    const LEN: usize = A::LEN + 1;

    #[inline]
    fn get(index: usize) -> Option<&'static usize> {
        if index == 0 {
            Some(&V::USIZE)
        } else {
            A::get(index - 1)
        }
    }
}

/// Marker trait implemented on lists containing `StaticDim`s only.
/// A shape that contains `U0` does not implement it, which rejects
/// invalid static shapes at compile time.
pub trait StaticShape: ValueList {
    /// Number of elements in the tensor, i.e. product of all extents of the shape.
    const NUM_ELEMENTS: usize;
}

impl StaticShape for ATerm {
    const NUM_ELEMENTS: usize = 1;
}

impl<D, A> StaticShape for TArr<D, A>
where
    D: StaticDim,
    A: StaticShape,
{
    const NUM_ELEMENTS: usize = D::USIZE * A::NUM_ELEMENTS;
}

/// Conditionnal trait operator:
/// * outputs T if the implementor is B1,
/// * outputs Else otherwise.
pub trait If<T, Else> {
    type Output;
}

impl<T, Else> If<T, Else> for B1 {
    type Output = T;
}

impl<T, Else> If<T, Else> for B0 {
    type Output = Else;
}

/// Type operator that outputs B1 if all the extents of the implementor
/// shape are U1 (including the empty shape).
pub trait AllOnes {
    type Output;
}

impl AllOnes for ATerm {
    type Output = B1;
}

impl<D, A> AllOnes for TArr<D, A>
where
    D: IsEqual<U1>,
    A: AllOnes,
    EqTo<D, U1>: BitAnd<<A as AllOnes>::Output>,
{
    type Output = And<EqTo<D, U1>, <A as AllOnes>::Output>;
}

/// Type operator that outputs B1 if the implementor shape has at least
/// one axis and all its extents are U1.
pub trait IsScalar {
    type Output;
}

impl IsScalar for ATerm {
    type Output = B0;
}

impl<D, A> IsScalar for TArr<D, A>
where
    Self: AllOnes,
{
    type Output = <Self as AllOnes>::Output;
}

/// Type operator that outputs B1 if the implementor shape is a vector:
/// * a single axis whose extent is greater than U1,
/// * or at least two axes where one of the first two extents is U1, the
///   other is greater than U1 and all the remaining extents are U1.
pub trait IsVector {
    type Output;
}

impl IsVector for ATerm {
    type Output = B0;
}

impl<D> IsVector for TArr<D, ATerm>
where
    D: IsGreater<U1>,
{
    type Output = Gr<D, U1>;
}

impl<D0, D1, A> IsVector for TArr<D0, TArr<D1, A>>
where
    D0: IsGreater<U1> + IsEqual<U1>,
    D1: IsGreater<U1> + IsEqual<U1>,
    A: AllOnes,
    Gr<D0, U1>: BitOr<Gr<D1, U1>>,
    EqTo<D0, U1>: BitOr<EqTo<D1, U1>>,
    Or<Gr<D0, U1>, Gr<D1, U1>>: BitAnd<Or<EqTo<D0, U1>, EqTo<D1, U1>>>,
    And<Or<Gr<D0, U1>, Gr<D1, U1>>, Or<EqTo<D0, U1>, EqTo<D1, U1>>>:
        BitAnd<<A as AllOnes>::Output>,
{
    type Output = And<
        And<Or<Gr<D0, U1>, Gr<D1, U1>>, Or<EqTo<D0, U1>, EqTo<D1, U1>>>,
        <A as AllOnes>::Output,
    >;
}

/// Type operator that outputs B1 if the implementor shape is a scalar or
/// a vector, the shapes whose strides are all ones.
pub trait Degenerate {
    type Output;
}

impl<S> Degenerate for S
where
    S: IsScalar + IsVector,
    <S as IsScalar>::Output: BitOr<<S as IsVector>::Output>,
{
    type Output = Or<<S as IsScalar>::Output, <S as IsVector>::Output>;
}

/// Type operator that replaces every extent of the implementor shape with U1.
pub trait Ones {
    type Output;
}

impl Ones for ATerm {
    type Output = ATerm;
}

impl<D, A> Ones for TArr<D, A>
where
    A: Ones,
{
    type Output = TArr<U1, <A as Ones>::Output>;
}

/// Type operator that outputs the product of all the extents of the
/// implementor shape, U1 for the empty shape.
pub trait Volume {
    type Output;
}

impl Volume for ATerm {
    type Output = U1;
}

impl<D, A> Volume for TArr<D, A>
where
    A: Volume,
    D: Mul<<A as Volume>::Output>,
{
    type Output = Prod<D, <A as Volume>::Output>;
}

/// Type operator that folds the implementor shape from left to right,
/// `Acc` being the product of the extents already walked. Each axis gets
/// the accumulator as stride, so starting from U1 yields first-order
/// (column-major) strides.
pub trait FirstOrderFold<Acc> {
    type Output;
}

impl<Acc> FirstOrderFold<Acc> for ATerm {
    type Output = ATerm;
}

impl<Acc, D, A> FirstOrderFold<Acc> for TArr<D, A>
where
    Acc: Mul<D>,
    A: FirstOrderFold<Prod<Acc, D>>,
{
    type Output = TArr<Acc, <A as FirstOrderFold<Prod<Acc, D>>>::Output>;
}

/// Type operator that gives each axis of the implementor shape the
/// product of the extents to its right, which yields last-order
/// (row-major) strides ending with U1.
pub trait LastOrderFold {
    type Output;
}

impl LastOrderFold for ATerm {
    type Output = ATerm;
}

impl<D, A> LastOrderFold for TArr<D, A>
where
    A: LastOrderFold + Volume,
{
    type Output = TArr<<A as Volume>::Output, <A as LastOrderFold>::Output>;
}

/// Zero-sized stand-in for an instance of the static shape `S`.
///
/// It carries no information beyond its type, and is mostly used to build
/// static strides the same way as runtime ones.
pub struct StaticExtents<S> {
    _phantoms: PhantomData<S>,
}

impl<S> StaticExtents<S>
where
    S: StaticShape,
{
    pub const fn new() -> Self {
        StaticExtents {
            _phantoms: PhantomData,
        }
    }

    /// Number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        S::LEN
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        S::LEN == 0
    }

    #[inline]
    pub fn get(&self, axis: usize) -> Option<usize> {
        S::get(axis).copied()
    }

    pub fn at(&self, axis: usize) -> Result<usize> {
        self.get(axis).ok_or(StridesError::OutOfRange {
            index: axis,
            rank: S::LEN,
        })
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        S::NUM_ELEMENTS
    }

    pub fn to_vec(&self) -> Vec<usize> {
        S::to_vec()
    }

    pub fn is_scalar(&self) -> bool
    where
        S: IsScalar,
        <S as IsScalar>::Output: Bit,
    {
        <S as IsScalar>::Output::BOOL
    }

    pub fn is_vector(&self) -> bool
    where
        S: IsVector,
        <S as IsVector>::Output: Bit,
    {
        <S as IsVector>::Output::BOOL
    }
}

impl<S> Default for StaticExtents<S>
where
    S: StaticShape,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for StaticExtents<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StaticExtents<S> {}

impl<S> Debug for StaticExtents<S>
where
    S: StaticShape,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticExtents").field(&S::to_vec()).finish()
    }
}

/// 1D shape alias.
pub type Shape1D<S0> = TArr<S0, ATerm>;
/// 2D shape alias.
pub type Shape2D<S0, S1> = TArr<S0, TArr<S1, ATerm>>;
/// 3D shape alias.
pub type Shape3D<S0, S1, S2> = TArr<S0, TArr<S1, TArr<S2, ATerm>>>;
/// 4D shape alias.
pub type Shape4D<S0, S1, S2, S3> = TArr<S0, TArr<S1, TArr<S2, TArr<S3, ATerm>>>>;
/// 5D shape alias.
pub type Shape5D<S0, S1, S2, S3, S4> = TArr<S0, TArr<S1, TArr<S2, TArr<S3, TArr<S4, ATerm>>>>>;
/// 6D shape alias.
pub type Shape6D<S0, S1, S2, S3, S4, S5> =
    TArr<S0, TArr<S1, TArr<S2, TArr<S3, TArr<S4, TArr<S5, ATerm>>>>>>;

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{U2, U3, U4, U5};

    #[test]
    fn shape() {
        assert_eq!(<Shape3D<U2, U3, U4> as ValueList>::to_vec(), vec![2, 3, 4]);
        assert_eq!(<Shape3D<U2, U3, U4> as ValueList>::LEN, 3);
        assert_eq!(<Shape3D<U2, U3, U4> as StaticShape>::NUM_ELEMENTS, 24);
        assert_eq!(<ATerm as StaticShape>::NUM_ELEMENTS, 1);
        assert_eq!(<Shape2D<U5, U3> as ValueList>::get(1), Some(&3));
        assert_eq!(<Shape2D<U5, U3> as ValueList>::get(2), None);
    }

    #[test]
    fn folds() {
        assert_eq!(<<Shape3D<U2, U3, U4> as FirstOrderFold<U1>>::Output as ValueList>::to_vec(), vec![1, 2, 6]);
        assert_eq!(<<Shape3D<U2, U3, U4> as LastOrderFold>::Output as ValueList>::to_vec(), vec![12, 4, 1]);
        assert_eq!(<<Shape3D<U2, U3, U4> as Ones>::Output as ValueList>::to_vec(), vec![1, 1, 1]);
        assert_eq!(<Shape3D<U2, U3, U4> as Volume>::Output::USIZE, 24);
        assert_eq!(<<ATerm as LastOrderFold>::Output as ValueList>::LEN, 0);
    }

    #[test]
    fn shape_predicates() {
        assert_eq!(<Shape1D<U5> as IsVector>::Output::BOOL, true);
        assert_eq!(<Shape1D<U1> as IsVector>::Output::BOOL, false);
        assert_eq!(<Shape1D<U1> as IsScalar>::Output::BOOL, true);
        assert_eq!(<Shape2D<U1, U5> as IsVector>::Output::BOOL, true);
        assert_eq!(<Shape3D<U5, U1, U1> as IsVector>::Output::BOOL, true);
        assert_eq!(<Shape2D<U2, U3> as IsVector>::Output::BOOL, false);
        assert_eq!(<Shape3D<U4, U1, U3> as IsVector>::Output::BOOL, false);
        assert_eq!(<Shape3D<U1, U1, U1> as IsScalar>::Output::BOOL, true);
        assert_eq!(<Shape3D<U1, U1, U4> as Degenerate>::Output::BOOL, false);
        assert_eq!(<ATerm as Degenerate>::Output::BOOL, false);
    }

    #[test]
    fn static_extents() {
        let extents = StaticExtents::<Shape3D<U2, U3, U4>>::new();
        assert_eq!(extents.rank(), 3);
        assert_eq!(extents.at(2), Ok(4));
        assert_eq!(extents.at(3), Err(StridesError::OutOfRange { index: 3, rank: 3 }));
        assert_eq!(extents.num_elements(), 24);
        assert!(!extents.is_vector());
        assert!(StaticExtents::<Shape2D<U1, U4>>::new().is_vector());
        assert!(StaticExtents::<Shape2D<U1, U1>>::new().is_scalar());
        assert_eq!(format!("{:?}", extents), "StaticExtents([2, 3, 4])");
    }
}
