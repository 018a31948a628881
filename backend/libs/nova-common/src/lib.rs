//! Nova Common Library
//!
//! Shared error type and HTTP client used by Nova services to pull data
//! from upstream APIs.

pub mod error;
pub mod http_client;

pub use error::{Result, ServiceError};
pub use http_client::{ServiceClient, CORRELATION_HEADER};
