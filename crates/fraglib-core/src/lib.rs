//! # FragLib Core Library
//!
//! A library for enumerating combinatorial chemical libraries by textually splicing
//! annotated SMILES fragments (scaffolds, linkers, and building blocks) into complete,
//! syntactically valid molecule strings.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Fragment`, `Scaffold`,
//!   `Linker`, `BuildingBlock`), the notation sub-grammar (normalization and conformity
//!   checking), the read-only `FragmentPool`, and I/O adapters.
//!
//! - **[`engine`]: The Logic Core.** Contains the combinatorial index generators
//!   (full cartesian and scheme-restricted), the string concatenation engine with
//!   collision-free ring-closure numbering, progress reporting, and cooperative
//!   cancellation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together into a cancellable enumeration loop that
//!   emits finished `(identifier, SMILES)` pairs to an external sink.

pub mod core;
pub mod engine;
pub mod workflows;
