//! # Core Module
//!
//! This module provides the fundamental building blocks for combinatorial library
//! assembly in FragLib, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the fragment notation sub-grammar and the data
//! structures required to splice annotated SMILES fragments. It covers parsing
//! and validation of raw fragment strings, extraction of per-fragment metadata
//! (attachment sites, pre-existing ring-closure numbers), and the read-only
//! fragment pool the enumeration engine draws from.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of fragment handling:
//!
//! - **Notation Grammar** ([`notation`]) - Site-marker scanning, normalization, and
//!   conformity checking of raw fragment strings
//! - **Fragment Models** ([`models`]) - Typed scaffold/linker/building-block records
//!   with their splice metadata
//! - **Fragment Pool** ([`pool`]) - The ordered, read-only collections built from
//!   validated fragments
//! - **File I/O** ([`io`]) - Fragment sources and molecule sinks at the library
//!   boundary
//!
//! ## Key Capabilities
//!
//! - **Lexical validation** of fragment strings against the notation's structural rules
//! - **Canonical normalization** guaranteeing every site marker is preceded by an atom
//! - **Metadata extraction** performed once at construction, never re-derived
//! - **Cross-pool ring-number queries** backing collision-free splice numbering

pub mod io;
pub mod models;
pub mod notation;
pub mod pool;
