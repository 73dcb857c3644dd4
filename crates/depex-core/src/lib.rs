#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core value types for the depex dependency-expression compiler.
//!
//! The compiler and bytecode crates both operate on module identifiers;
//! this crate holds the shared [`Guid`] value type and its wire encoding
//! so neither has to depend on the other for it.

mod guid;

pub use guid::{Guid, ParseGuidError};
