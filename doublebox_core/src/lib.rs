//! # Doublebox Core
//!
//! A compact, self-describing encoding that packs a dynamically-typed value
//! into a single 64-bit IEEE 754 double, exploiting the unused NaN payload
//! space ("NaN-boxing").
//!
//! This crate provides the foundational codec shared by anything speaking the
//! doublebox convention:
//!
//! - **Value Type**: [`DoubleBox`], an 8-byte `Copy` tagged union over the
//!   64-bit bit pattern
//! - **Tag Space**: reserved tag constants, masks, and the closed [`Kind`]
//!   enumeration with exhaustive classification
//! - **Short Strings**: [`ShortStr`], the 5-byte inline string payload with
//!   endianness-independent packing
//! - **Error Handling**: the [`ParseBitsError`] type for the hex-word
//!   diagnostic entry point

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod short_str;
pub mod tag;
pub mod value;

pub use error::{BoxResult, ParseBitsError};
pub use short_str::ShortStr;
pub use tag::Kind;
pub use value::DoubleBox;

/// Doublebox codec version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
