//! Core value types for rootsum

mod digest;

pub use digest::Digest;
