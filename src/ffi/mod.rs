//! FFI bindings to the OpenXR loader.
//!
//! This module contains low-level C declarations. Users should prefer the
//! owning wrappers in the parent modules.

pub mod error;
pub mod handles;
pub mod raw;

pub use error::{check_result, error_from_result};
pub use handles::*;
pub use raw::*;
