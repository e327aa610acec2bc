//! Gateway types module
//!
//! - [`extract`]: request extractors (`JsonBody`, `OrderIdPath`)
//! - [`response`]: error and response types

pub mod extract;
pub mod response;

// Re-export commonly used types at module root
pub use extract::{JsonBody, OrderIdPath};
pub use response::{ApiError, ApiResult, ErrorBody, MessageResponse, ok};
