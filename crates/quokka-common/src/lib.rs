//! Shared utilities for the Quokka renderer.
//!
//! Currently this crate only holds the deduplicated warning channel used by
//! the DOM and CSS crates to report unexpected-but-recoverable conditions
//! (unsupported features, failed standalone style computations, and the
//! like) without spamming the terminal.

/// Deduplicated warning output for unexpected-but-recoverable conditions.
pub mod warning;
