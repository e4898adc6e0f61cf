//! An optional value container with an explicit presence flag.
//!
//! [`Optional<T>`] distinguishes "no value" from any value of `T`, including
//! `T`'s default, and maps absence to JSON `null`.

pub mod error;
pub mod json;
mod optional;

pub use error::{DecodeError, Result};
pub use optional::{Optional, ZeroDefault};
