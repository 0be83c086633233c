// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trichess display library.
//!
//! Maps the abstract three-sector board onto a fixed drawing surface,
//! resolves pointer input to squares, and hands completed two-click
//! move selections to a game loop blocked on a one-shot request.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod app;
pub mod board_widget;
pub mod geometry;
pub mod input;
pub mod move_request;
pub mod snapshot;
pub mod worker;
