//! # Fragment Models Module
//!
//! This module contains the typed fragment records the enumeration engine
//! splices: scaffolds, linkers, and building blocks.
//!
//! ## Overview
//!
//! All three fragment kinds share a common record ([`fragment::Fragment`])
//! holding the identifier, the raw input text, the normalized text, and the
//! set of two-digit ring-closure numbers the fragment already uses. Each kind
//! adds its own splice metadata, extracted once at construction:
//!
//! - [`scaffold`] - Variable-site tokens and their site numbers
//! - [`linker`] - Empty-form detection plus the attachment insertion point
//! - [`building_block`] - The attachment insertion point
//!
//! Fragments are immutable after construction and owned exclusively by the
//! [`crate::core::pool::FragmentPool`].

pub mod building_block;
pub mod fragment;
pub mod linker;
pub mod scaffold;
