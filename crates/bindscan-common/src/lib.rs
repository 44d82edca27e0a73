//! Common types and utilities for bindscan.
//!
//! This crate provides foundational types used across all bindscan crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Boundary errors (`InvalidInputError`)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (character offsets from the producing parser)
pub mod span;
pub use span::Span;

// Errors raised at the extraction boundary
pub mod diagnostics;
pub use diagnostics::InvalidInputError;
