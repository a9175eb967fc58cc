//! Numeric primitives for a perceptual-hashing pipeline.
//!
//! This crate implements the two deterministic building blocks the hashing
//! pipeline needs before bit-packing:
//!
//! - [`median`] - Torben-style median selection, used to pick the threshold
//!   that splits transform coefficients into hash bits.
//! - [`dct`] - the fixed 16x64 cosine basis that projects a 64-wide sample
//!   grid down to 16 frequency coefficients per axis.
//!
//! # Determinism
//!
//! Both components are pure: the same input always produces the same output,
//! and the basis table is computed once per process and byte-identical across
//! runs on the same platform. Image decoding, the projection multiply, and
//! hash bit-packing live in the consuming pipeline, which calls in with
//! already-prepared `f32` buffers.

pub mod dct;
pub mod median;

// Re-export main entry points at crate root
pub use dct::{basis_matrix, BasisMatrix, BASIS_COLS, BASIS_ROWS};
pub use median::torben_median;
