pub use super::dynamic_strides::Strides;
pub use super::extents::Extents;
pub use super::fixed_rank_strides::FixedRankStrides;
pub use super::layout::{ColumnMajor, FirstOrder, LastOrder, Layout, Order, RowMajor};
pub use super::shape::{
    Shape1D, Shape2D, Shape3D, Shape4D, Shape5D, Shape6D, StaticExtents, StaticShape,
};
pub use super::static_strides::{StaticStrides, StridesOf};
