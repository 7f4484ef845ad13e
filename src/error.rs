//! Errors reported while building or reading stride tables.

/// Error returned by stride construction and checked access.
///
/// Invalid static shapes never reach this type: they are rejected when the
/// program is compiled.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StridesError {
    /// The extents do not have the rank the strides were declared with.
    #[error("extents have rank {got} but the strides were declared with rank {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// An extent is zero.
    #[error("shape is not valid: extent of axis {axis} is zero")]
    InvalidShape { axis: usize },

    /// A shape that is neither a vector nor a scalar has less than two axes.
    #[error("strides of a shape that is neither a vector nor a scalar need rank >= 2, got {0}")]
    RankTooSmall(usize),

    /// Checked positional access past the last axis.
    #[error("position {index} is out of range for rank {rank}")]
    OutOfRange { index: usize, rank: usize },

    /// A cumulative product does not fit in the stride value type.
    #[error("stride of axis {axis} overflows the value type")]
    Overflow { axis: usize },
}

pub type Result<T> = std::result::Result<T, StridesError>;
