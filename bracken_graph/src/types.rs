// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the event graph: propagation directions and errors.
//!
//! ## Overview
//!
//! These types describe how an emission travels and how the library reports
//! misuse. They are carried on every [`Event`](crate::event::Event) and
//! returned by the mutating methods of [`Node`](crate::node::Node).

/// Direction of one emission.
///
/// Fixed at emit time and carried unchanged on the
/// [`Event`](crate::event::Event) envelope for every hop of that emission.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Deliver to the target's own listeners only.
    Flat,
    /// Deliver to the target, then recurse through parent links.
    Up,
    /// Deliver to the target, then recurse through child links.
    Down,
    /// Deliver to the target, then to the other children of each parent.
    Sibling,
}

/// Errors reported by mutating node operations.
///
/// All other edge conditions (removing an unknown listener, unlinking an
/// absent edge, emitting with no listeners registered) are silent no-ops.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The node's destroy latch is set; its listener and link state is
    /// frozen and every mutating operation is rejected.
    #[error("node has been destroyed and is permanently inert")]
    Destroyed,
}
