//! Export encoding for crop results.
//!
//! All operations are synchronous and run on the caller's thread.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
