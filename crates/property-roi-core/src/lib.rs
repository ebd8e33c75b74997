pub mod error;
pub mod formatting;
pub mod rounding;
pub mod types;

#[cfg(feature = "property_roi")]
pub mod property_roi;

pub use error::RoiError;
pub use types::*;

/// Standard result type for all property-roi operations
pub type RoiResult<T> = Result<T, RoiError>;
