//! Cartfront Core - Shared types library.
//!
//! This crate provides common types used across all Cartfront components:
//! - `cartfront` - the cart page loader and its catalog client
//! - `integration-tests` - end-to-end tests against a mock catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
