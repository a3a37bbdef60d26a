//! # I/O Module
//!
//! Narrow capability traits at the library boundary, [`traits::FragmentSource`]
//! for fragment input and [`traits::MoleculeSink`] for molecule output, plus
//! the file-backed and in-memory adapters shipped with the library. UI-bound
//! or otherwise exotic adapters live outside the core and implement the same
//! traits.

pub mod file;
pub mod memory;
pub mod traits;
