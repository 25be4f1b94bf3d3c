pub mod error;
pub mod lookup;
pub mod time_value;
pub mod types;

#[cfg(feature = "rental_yield")]
pub mod rental_yield;

#[cfg(feature = "rent_points")]
pub mod rent_points;

#[cfg(feature = "compound_growth")]
pub mod compound_growth;

#[cfg(feature = "lease")]
pub mod lease;

pub use error::VastgoedError;
pub use types::*;

/// Standard result type for all vastgoed operations
pub type VastgoedResult<T> = Result<T, VastgoedError>;
