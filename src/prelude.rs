pub use crate::error::StridesError;
pub use crate::extent::Extent;
pub use crate::strides::prelude::*;
