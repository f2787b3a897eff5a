// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: host-clocked animatable scalars.
//!
//! This crate provides [`AnimatedScalar`], a single numeric channel with
//! mutable bounds that can be:
//! - Snapped to a value immediately.
//! - Animated toward a target with an [`AnimationSpec`] (eased tween or spring).
//! - Released with an initial velocity and left to come to rest under a
//!   [`DecaySpec`] (fling).
//!
//! A channel holds **at most one** motion. Every request replaces whatever is
//! in flight, so the last write wins and no cancellation handle is needed.
//! Each request returns a [`Ticket`]; [`AnimatedScalar::status`] reports
//! whether that request is still running or has settled (reached its end or
//! was superseded by a newer request on the same channel).
//!
//! The crate owns no clock and spawns nothing. Hosts call
//! [`AnimatedScalar::advance`] once per frame with the elapsed time and read
//! the current value back. Several channels advanced side by side behave like
//! concurrently running animations; joining them is a matter of checking that
//! all of their tickets have settled.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_motion::{AnimatedScalar, AnimationSpec, Easing, TicketStatus};
//!
//! let mut scale = AnimatedScalar::with_bounds(1.0, 0.5, 4.0);
//! let ticket = scale.animate_to(
//!     2.0,
//!     AnimationSpec::Tween {
//!         duration: Duration::from_millis(100),
//!         easing: Easing::Linear,
//!     },
//! );
//!
//! scale.advance(Duration::from_millis(50));
//! assert!((scale.value() - 1.5).abs() < 1e-9);
//! assert_eq!(scale.status(ticket), TicketStatus::Running);
//!
//! scale.advance(Duration::from_millis(50));
//! assert_eq!(scale.value(), 2.0);
//! assert_eq!(scale.status(ticket), TicketStatus::Settled);
//! ```
//!
//! ## Bounds
//!
//! Values never leave `[lower_bound, upper_bound]`. When a motion would step
//! outside the bounds the value is pinned to the bound and the motion ends,
//! which gives the usual decay-to-edge behavior for flings.
//!
//! This crate is `no_std`; enable either the `std` (default) or the `libm`
//! feature to provide the float functions used by springs and decay.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_motion requires either the `std` or the `libm` feature");

mod channel;
mod easing;
mod spec;

pub use channel::{AnimatedScalar, Ticket, TicketStatus};
pub use easing::Easing;
pub use spec::{AnimationSpec, DecaySpec, Spring};
