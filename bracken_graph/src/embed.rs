// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedding the node surface in host types.
//!
//! ## Overview
//!
//! There is no inheritance here: a host type gains graph participation by
//! owning a [`Node`] and pointing [`AsNode::as_node`] at it. Every other
//! method comes for free, and hosts, plain nodes, and other hosts all link
//! and emit interchangeably.
//!
//! ```
//! use bracken_graph::embed::AsNode;
//! use bracken_graph::node::Node;
//!
//! struct Chassis {
//!     node: Node<u32>,
//! }
//!
//! impl AsNode<u32> for Chassis {
//!     fn as_node(&self) -> &Node<u32> {
//!         &self.node
//!     }
//! }
//!
//! let chassis = Chassis { node: Node::new() };
//! let wheel = Chassis { node: Node::new() };
//! chassis.link_child(&wheel)?;
//! chassis.on("brake", |_, force| println!("braking at {force:?}"))?;
//! wheel.emit_up("brake", vec![3])?;
//! # Ok::<(), bracken_graph::types::Error>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::event::Event;
use crate::node::{Node, Subscription};
use crate::types::Error;

/// Grants a host type the full node surface by delegation.
///
/// Implementors provide [`as_node`](Self::as_node); everything else has a
/// default that forwards to the embedded node. [`Node`] implements this
/// trait itself, so APIs written against `impl AsNode<V>` accept bare
/// nodes and hosts alike.
pub trait AsNode<V: 'static> {
    /// The embedded node that carries this host's graph presence.
    fn as_node(&self) -> &Node<V>;

    /// See [`Node::on`].
    fn on<F>(&self, event: &str, callback: F) -> Result<Subscription<V>, Error>
    where
        F: Fn(&Event<V>, &[V]) + 'static,
    {
        self.as_node().on(event, callback)
    }

    /// See [`Node::once`].
    fn once<F>(&self, event: &str, callback: F) -> Result<Subscription<V>, Error>
    where
        F: Fn(&Event<V>, &[V]) + 'static,
    {
        self.as_node().once(event, callback)
    }

    /// See [`Node::off`].
    fn off(&self, event: &str) -> Result<(), Error> {
        self.as_node().off(event)
    }

    /// See [`Node::emit`].
    fn emit(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        self.as_node().emit(event, values)
    }

    /// See [`Node::emit_up`].
    fn emit_up(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        self.as_node().emit_up(event, values)
    }

    /// See [`Node::emit_down`].
    fn emit_down(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        self.as_node().emit_down(event, values)
    }

    /// See [`Node::emit_sibling`].
    fn emit_sibling(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        self.as_node().emit_sibling(event, values)
    }

    /// See [`Node::link_child`].
    fn link_child(&self, other: &impl AsNode<V>) -> Result<Node<V>, Error> {
        self.as_node().link_child(other.as_node())
    }

    /// See [`Node::link_parent`].
    fn link_parent(&self, other: &impl AsNode<V>) -> Result<Node<V>, Error> {
        self.as_node().link_parent(other.as_node())
    }

    /// See [`Node::unlink_child`].
    fn unlink_child(&self, other: &impl AsNode<V>) -> Result<(), Error> {
        self.as_node().unlink_child(other.as_node())
    }

    /// See [`Node::unlink_parent`].
    fn unlink_parent(&self, other: &impl AsNode<V>) -> Result<(), Error> {
        self.as_node().unlink_parent(other.as_node())
    }

    /// See [`Node::destroy`].
    fn destroy(&self) -> Result<(), Error> {
        self.as_node().destroy()
    }

    /// See [`Node::is_destroyed`].
    fn is_destroyed(&self) -> bool {
        self.as_node().is_destroyed()
    }

    /// See [`Node::parent_links`].
    fn parent_links(&self) -> Vec<Node<V>> {
        self.as_node().parent_links()
    }

    /// See [`Node::child_links`].
    fn child_links(&self) -> Vec<Node<V>> {
        self.as_node().child_links()
    }

    /// See [`Node::listener_count`].
    fn listener_count(&self, event: &str) -> usize {
        self.as_node().listener_count(event)
    }

    /// See [`Node::has_listeners`].
    fn has_listeners(&self, event: &str) -> bool {
        self.as_node().has_listeners(event)
    }

    /// See [`Node::event_names`].
    fn event_names(&self) -> Vec<String> {
        self.as_node().event_names()
    }
}

impl<V: 'static> AsNode<V> for Node<V> {
    fn as_node(&self) -> &Node<V> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    struct Relay {
        node: Node<i32>,
    }

    impl Relay {
        fn new() -> Self {
            Self { node: Node::new() }
        }
    }

    impl AsNode<i32> for Relay {
        fn as_node(&self) -> &Node<i32> {
            &self.node
        }
    }

    #[test]
    fn a_host_gains_the_full_surface() {
        let relay = Relay::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        relay.on("tick", move |_, args| h.set(h.get() + args[0])).unwrap();
        assert!(relay.has_listeners("tick"));
        assert_eq!(relay.listener_count("tick"), 1);
        relay.emit("tick", vec![4]).unwrap();
        assert_eq!(hits.get(), 4);
        relay.off("tick").unwrap();
        assert!(relay.event_names().is_empty());
    }

    #[test]
    fn hosts_link_and_propagate_through_the_trait() {
        let upstream = Relay::new();
        let downstream = Relay::new();
        upstream.link_child(&downstream).unwrap();
        assert_eq!(downstream.parent_links(), vec![upstream.node.clone()]);
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        upstream.on("tick", move |_, _| h.set(h.get() + 1)).unwrap();
        downstream.emit_up("tick", vec![]).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn hosts_and_bare_nodes_interoperate() {
        let relay = Relay::new();
        let bare: Node<i32> = Node::new();
        relay.link_child(&bare).unwrap();
        assert_eq!(relay.child_links(), vec![bare.clone()]);
        relay.unlink_child(&bare).unwrap();
        assert!(relay.child_links().is_empty());
    }

    #[test]
    fn destroying_through_the_trait_latches_the_node() {
        let relay = Relay::new();
        relay.destroy().unwrap();
        assert!(relay.is_destroyed());
        assert_eq!(relay.emit("tick", vec![]), Err(Error::Destroyed));
    }

    #[test]
    fn two_hosts_keep_independent_state() {
        let one = Relay::new();
        let two = Relay::new();
        one.on("tick", |_, _| {}).unwrap();
        assert!(one.has_listeners("tick"));
        assert!(!two.has_listeners("tick"));
    }
}
