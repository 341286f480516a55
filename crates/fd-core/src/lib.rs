//! # fd-core
//!
//! Core types, error definitions, and settings for fdcalc.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error type with its
//! `ensure!` family of macros, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_arg!` macros.
pub mod errors;

/// Global library settings (derivative strategy, grid tolerance).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes, interval counts, and derivative orders.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{DerivativeStrategy, ScopedSettings, Settings};
