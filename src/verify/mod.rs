// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked input wrappers and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked wrappers** (`SortedSlice`, `RotatedSlice`, `DigitString`) that
//!    validate a precondition once at construction. If you hold one, the
//!    algorithm's precondition holds.
//!
//! 2. **Runtime contracts** that panic in debug builds when an algorithm's
//!    invariant is violated. Zero-cost in release, but catch bugs during
//!    development.
//!
//! The bare algorithms in `search` and `stack` never validate their input.
//! Unsorted input to a partition search is a caller bug, not an error value.
//! The wrappers are where untrusted input (CLI arguments, batch files) gets
//! checked.

mod types;
pub mod contracts;

pub use types::*;
