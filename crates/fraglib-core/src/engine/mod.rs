//! # Engine Module
//!
//! This module implements the combinatorial enumeration engine of FragLib:
//! index generation over the fragment pools and the string splicing that turns
//! index tuples into finished molecules.
//!
//! ## Overview
//!
//! The engine is deliberately single-threaded and pull-based. A generator
//! hands out reaction tuples one at a time; the concatenation machinery
//! splices the referenced fragments with collision-free two-digit ring-closure
//! labels. Nothing here blocks, spawns, or retries; callers drive the loop
//! and decide how far to run it.
//!
//! ## Architecture
//!
//! - **Index Generation** ([`generator`]) - The full cartesian and
//!   scheme-restricted reaction generators and their shared trait
//! - **Concatenation** ([`concat`]) - Pure splice operations over text buffers
//! - **Ring Numbering** ([`numbering`]) - The per-molecule label allocator
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Cancellation** ([`cancel`]) - The cooperative stop flag polled between
//!   molecules
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod cancel;
pub(crate) mod concat;
pub mod error;
pub mod generator;
pub(crate) mod numbering;
pub mod progress;
