// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_graph --heading-base-level=0

//! Bracken Graph: hierarchical event distribution over linked nodes.
//!
//! ## Overview
//!
//! This crate models a set of [`Node`](crate::node::Node)s joined by directed
//! parent/child links into an arbitrary graph: trees, diamonds, several
//! disconnected islands, even cycles. Any node can emit a named event with a
//! payload, and the emission travels one of four shapes:
//!
//! - [`emit`](crate::node::Node::emit): the target's own listeners only.
//! - [`emit_up`](crate::node::Node::emit_up): the target, then parents, then
//!   grandparents, level by level.
//! - [`emit_down`](crate::node::Node::emit_down): the target, then children,
//!   then grandchildren.
//! - [`emit_sibling`](crate::node::Node::emit_sibling): the target, then the
//!   other children of each of its parents.
//!
//! Cyclic links are fine to build and to
//! [`destroy`](crate::node::Node::destroy), but upward and downward
//! traversal keeps no visited set: an emission that enters a cycle does not
//! terminate on its own, and a listener has to end the walk through the
//! stop latch.
//!
//! ## Listeners
//!
//! Listeners are registered per event name with
//! [`on`](crate::node::Node::on) or [`once`](crate::node::Node::once) and run
//! in registration order. Each registration returns a
//! [`Subscription`](crate::node::Subscription) that removes exactly that
//! listener; [`off`](crate::node::Node::off) clears a whole event name at
//! once.
//!
//! ## Stop and transform
//!
//! Every emission threads a single [`Event`](crate::event::Event) envelope
//! through all of its hops. A listener can set the envelope's one-way stop
//! latch, which lets the current hop finish and then ends upward or downward
//! traversal, or it can replace the payload wholesale, so later hops observe
//! the transformed values. Sibling delivery ignores the latch and always
//! hands out the payload the emission started with.
//!
//! ## Destroy
//!
//! [`destroy`](crate::node::Node::destroy) unlinks a node from its parents,
//! cascades into children that have no other parent, unlinks the rest,
//! drops all listeners, and latches the node permanently: every later
//! mutating call fails with [`Error::Destroyed`](crate::types::Error).
//!
//! ## Re-entrancy and ownership
//!
//! Listener callbacks may freely re-enter the graph: emit again, register
//! or remove listeners, relink nodes, or destroy them, all while a
//! traversal is in flight. Each hop works on a snapshot of the listener
//! list taken when the hop starts, and link changes take effect from the
//! next hop onward.
//!
//! Handles are `Rc`-based and single-threaded. Child links are strong and
//! parent links are weak, so a graph is owned from its roots. A listener
//! that captures a handle to its own node keeps that node alive until the
//! listener is removed or the node is destroyed.
//!
//! ```
//! use bracken_graph::node::Node;
//!
//! // A panel aggregates sensor reports through a zone controller.
//! let panel: Node<String> = Node::new();
//! let zone = Node::new();
//! let sensor = Node::new();
//! panel.link_child(&zone).unwrap().link_child(&sensor).unwrap();
//!
//! zone.on("alarm", |event, report| {
//!     // Annotate the report as it passes through.
//!     let mut tagged = report.to_vec();
//!     tagged.push("confirmed by zone".to_owned());
//!     event.transform_values(tagged);
//! })
//! .unwrap();
//!
//! panel.on("alarm", |_, report| {
//!     assert_eq!(report.len(), 2);
//!     assert_eq!(report[1], "confirmed by zone");
//! })
//! .unwrap();
//!
//! sensor
//!     .emit_up("alarm", vec!["motion in hallway".to_owned()])
//!     .unwrap();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod dispatch;

pub mod embed;
pub mod event;
pub mod node;
pub mod types;
