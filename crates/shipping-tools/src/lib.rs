//! Shipping API tool catalog + HTTP runtime.
//!
//! The catalog is a fixed table of tool descriptors. A call is validated against the tool's
//! parameter schema, renamed into the backend's field layout and sent as a single request.

pub mod catalog;
pub mod error;
pub mod response;
pub mod runtime;
pub mod safety;
pub mod schema;
pub mod semantics;
pub mod translate;

pub use error::{CallError, Result, ShippingToolsError};
pub use runtime::{ClientConfig, DEFAULT_BASE_URL, ShippingToolSource};
