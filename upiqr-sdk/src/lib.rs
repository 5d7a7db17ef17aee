//! Shared types and intent building for UPI payment QR codes.
//!
//! This crate has no rendering dependencies: it owns the configuration
//! objects, the validation rules and the `upi://pay` URI serializer.
//! Rendering lives in `upiqr-core`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod intent;
pub mod objects;
