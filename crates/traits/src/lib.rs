//! Core digest traits for the workspace.
//!
//! This crate provides the trait every hash implementation conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | One-shot cryptographic hash functions | SHA-256 |
//!
//! # Error Types
//!
//! - [`MessageTooLong`] - The message bit length does not fit the algorithm's length field
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::MessageTooLong;
