// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nodes: link structure, listener registry, and the destroy lifecycle.
//!
//! ## Overview
//!
//! A [`Node`] is a cheap handle over shared per-node state. Cloning a node
//! clones the handle, not the node: every clone observes and mutates the
//! same links, listeners, and destroy latch. Equality is identity.
//!
//! Edges are recorded symmetrically on both endpoints. Child links hold
//! strong references and parent links hold weak back-references, so a graph
//! is kept alive from its roots (and by any handle the host still holds),
//! and dropping the last handle to a root releases the subtree that only it
//! owned.
//!
//! ## See Also
//!
//! [`Event`](crate::event::Event) for the envelope listeners receive, and
//! [`AsNode`](crate::embed::AsNode) for embedding a node in a host type.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::dispatch;
use crate::event::Event;
use crate::types::{Direction, Error};

/// A participant in the event graph.
///
/// Each node owns a per-event-name listener registry, an ordered list of
/// parent links, an ordered list of child links, and a one-way destroy
/// latch. All of it is reachable from any clone of the handle.
///
/// Repeated linking of the same pair is not deduplicated: two `link_child`
/// calls record two edges, and traversal dispatches once per edge.
///
/// A listener that captures a handle to its own node keeps that node alive
/// until the registration is removed; [`destroy`](Node::destroy) and
/// [`off`](Node::off) both break such cycles.
pub struct Node<V: 'static> {
    state: Rc<NodeState<V>>,
}

struct NodeState<V: 'static> {
    parents: RefCell<Vec<Weak<NodeState<V>>>>,
    children: RefCell<Vec<Node<V>>>,
    listeners: RefCell<BTreeMap<String, Vec<Rc<ListenerEntry<V>>>>>,
    next_key: Cell<u64>,
    destroyed: Cell<bool>,
}

pub(crate) struct ListenerEntry<V: 'static> {
    pub(crate) key: u64,
    pub(crate) once: bool,
    pub(crate) spent: Cell<bool>,
    pub(crate) callback: Box<dyn Fn(&Event<V>, &[V])>,
}

impl<V: 'static> Clone for Node<V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<V: 'static> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<V: 'static> Eq for Node<V> {}

impl<V: 'static> Default for Node<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: 'static> core::fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("parents", &self.state.parents.borrow().len())
            .field("children", &self.state.children.borrow().len())
            .field("events", &self.state.listeners.borrow().len())
            .field("destroyed", &self.state.destroyed.get())
            .finish_non_exhaustive()
    }
}

impl<V: 'static> Node<V> {
    /// Create an isolated node with empty listener and link state.
    pub fn new() -> Self {
        Self {
            state: Rc::new(NodeState {
                parents: RefCell::new(Vec::new()),
                children: RefCell::new(Vec::new()),
                listeners: RefCell::new(BTreeMap::new()),
                next_key: Cell::new(0),
                destroyed: Cell::new(false),
            }),
        }
    }

    /// Record `other` as a child of this node, on both endpoints.
    ///
    /// Returns a handle to `other` so links can be chained:
    /// `a.link_child(&b)?.link_child(&c)?` builds a two-level chain.
    ///
    /// Fails when either endpoint is destroyed.
    pub fn link_child(&self, other: &Self) -> Result<Self, Error> {
        self.ensure_live()?;
        other.ensure_live()?;
        self.state.children.borrow_mut().push(other.clone());
        other
            .state
            .parents
            .borrow_mut()
            .push(Rc::downgrade(&self.state));
        Ok(other.clone())
    }

    /// Record `other` as a parent of this node, on both endpoints.
    ///
    /// Returns a handle to `other`. Fails when either endpoint is destroyed.
    pub fn link_parent(&self, other: &Self) -> Result<Self, Error> {
        other.link_child(self)?;
        Ok(other.clone())
    }

    /// Remove the first recorded `self → other` child edge, on both
    /// endpoints. A missing edge is a silent no-op.
    pub fn unlink_child(&self, other: &Self) -> Result<(), Error> {
        self.ensure_live()?;
        self.remove_child_entry(other);
        other.remove_parent_entry(self);
        Ok(())
    }

    /// Remove the first recorded `other → self` child edge, on both
    /// endpoints. A missing edge is a silent no-op.
    pub fn unlink_parent(&self, other: &Self) -> Result<(), Error> {
        self.ensure_live()?;
        other.remove_child_entry(self);
        self.remove_parent_entry(other);
        Ok(())
    }

    /// Append `callback` to the listener list for `event`, creating the
    /// list if absent.
    ///
    /// Listeners run in registration order. The returned [`Subscription`]
    /// removes exactly this registration.
    pub fn on<F>(&self, event: &str, callback: F) -> Result<Subscription<V>, Error>
    where
        F: Fn(&Event<V>, &[V]) + 'static,
    {
        self.register(event, callback, false)
    }

    /// Like [`on`](Self::on), but the listener fires at most once and then
    /// removes itself, no matter how many emissions occur.
    pub fn once<F>(&self, event: &str, callback: F) -> Result<Subscription<V>, Error>
    where
        F: Fn(&Event<V>, &[V]) + 'static,
    {
        self.register(event, callback, true)
    }

    /// Delete the entire listener list for `event`.
    ///
    /// An unknown event name is a silent no-op. Removing a single
    /// registration goes through [`Subscription::unsubscribe`].
    pub fn off(&self, event: &str) -> Result<(), Error> {
        self.ensure_live()?;
        self.state.listeners.borrow_mut().remove(event);
        Ok(())
    }

    /// Invoke this node's own listeners for `event`. No traversal.
    pub fn emit(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        dispatch::emit(self, Direction::Flat, event, values)
    }

    /// Invoke this node's listeners, then recurse through parent links
    /// level by level until the stop latch is set or no parents remain.
    pub fn emit_up(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        dispatch::emit(self, Direction::Up, event, values)
    }

    /// Invoke this node's listeners, then recurse through child links
    /// level by level until the stop latch is set or no children remain.
    pub fn emit_down(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        dispatch::emit(self, Direction::Down, event, values)
    }

    /// Invoke this node's listeners plus, for every parent, the listeners
    /// of that parent's other children.
    ///
    /// The sibling set is snapshotted before any listener runs, is not
    /// deduplicated across parents, and is delivered even if a target
    /// listener sets the stop latch.
    pub fn emit_sibling(&self, event: &str, values: Vec<V>) -> Result<(), Error> {
        dispatch::emit(self, Direction::Sibling, event, values)
    }

    /// Destroy this node.
    ///
    /// In order: unlink every parent edge; for each child, cascade-destroy
    /// it when this node was its only remaining parent and merely unlink it
    /// otherwise; clear the listener registry; set the permanent destroy
    /// latch. After that, every mutating call fails with
    /// [`Error::Destroyed`].
    pub fn destroy(&self) -> Result<(), Error> {
        self.ensure_live()?;
        for parent in self.parent_links() {
            parent.remove_child_entry(self);
            self.remove_parent_entry(&parent);
        }
        // Entries whose parent was dropped outright upgrade to nothing;
        // sweep them so the frozen state is fully empty.
        self.state.parents.borrow_mut().clear();
        for child in self.child_links() {
            // A cascade earlier in this loop may already have taken it.
            if child.is_destroyed() {
                continue;
            }
            let parents = child.parent_links();
            if parents.len() == 1 && parents[0] == *self {
                child.destroy()?;
            } else {
                self.remove_child_entry(&child);
                child.remove_parent_entry(self);
            }
        }
        self.state.listeners.borrow_mut().clear();
        self.state.destroyed.set(true);
        Ok(())
    }

    /// Whether the destroy latch is set.
    pub fn is_destroyed(&self) -> bool {
        self.state.destroyed.get()
    }

    /// Handles to the current parents, in link order, duplicates included.
    pub fn parent_links(&self) -> Vec<Self> {
        self.state
            .parents
            .borrow()
            .iter()
            .filter_map(|weak| weak.upgrade().map(|state| Self { state }))
            .collect()
    }

    /// Handles to the current children, in link order, duplicates included.
    pub fn child_links(&self) -> Vec<Self> {
        self.state.children.borrow().clone()
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.state
            .listeners
            .borrow()
            .get(event)
            .map_or(0, Vec::len)
    }

    /// Whether any listener is registered for `event`.
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    /// Event names that currently have at least one listener, in order.
    pub fn event_names(&self) -> Vec<String> {
        self.state.listeners.borrow().keys().cloned().collect()
    }

    // --- internals ---

    pub(crate) fn ensure_live(&self) -> Result<(), Error> {
        if self.state.destroyed.get() {
            Err(Error::Destroyed)
        } else {
            Ok(())
        }
    }

    /// Clone of the listener list for `event`, released before any
    /// callback runs.
    pub(crate) fn listener_snapshot(&self, event: &str) -> Vec<Rc<ListenerEntry<V>>> {
        self.state
            .listeners
            .borrow()
            .get(event)
            .cloned()
            .unwrap_or_default()
    }

    /// Remove one registration by key; prunes the event's entry when the
    /// list empties. Missing keys and missing events are no-ops.
    pub(crate) fn remove_listener(&self, event: &str, key: u64) {
        let mut listeners = self.state.listeners.borrow_mut();
        if let Some(entries) = listeners.get_mut(event) {
            entries.retain(|entry| entry.key != key);
            if entries.is_empty() {
                listeners.remove(event);
            }
        }
    }

    fn register<F>(&self, event: &str, callback: F, once: bool) -> Result<Subscription<V>, Error>
    where
        F: Fn(&Event<V>, &[V]) + 'static,
    {
        self.ensure_live()?;
        let key = self.state.next_key.get();
        self.state.next_key.set(key + 1);
        let entry = Rc::new(ListenerEntry {
            key,
            once,
            spent: Cell::new(false),
            callback: Box::new(callback),
        });
        self.state
            .listeners
            .borrow_mut()
            .entry(event.to_owned())
            .or_default()
            .push(entry);
        Ok(Subscription {
            node: Rc::downgrade(&self.state),
            event: event.to_owned(),
            key,
        })
    }

    fn remove_child_entry(&self, child: &Self) {
        let mut children = self.state.children.borrow_mut();
        if let Some(pos) = children.iter().position(|c| c == child) {
            children.remove(pos);
        }
    }

    fn remove_parent_entry(&self, parent: &Self) {
        let target = Rc::as_ptr(&parent.state);
        let mut parents = self.state.parents.borrow_mut();
        // Address comparison alone could match a dead entry whose
        // allocation was reused; require a live backreference.
        if let Some(pos) = parents
            .iter()
            .position(|weak| weak.strong_count() > 0 && weak.as_ptr() == target)
        {
            parents.remove(pos);
        }
    }
}

/// One listener registration, as returned by [`Node::on`] and
/// [`Node::once`].
///
/// Holds no strong reference to the node, so an outstanding subscription
/// never keeps a graph alive.
pub struct Subscription<V: 'static> {
    node: Weak<NodeState<V>>,
    event: String,
    key: u64,
}

impl<V: 'static> Clone for Subscription<V> {
    fn clone(&self) -> Self {
        Self {
            node: Weak::clone(&self.node),
            event: self.event.clone(),
            key: self.key,
        }
    }
}

impl<V: 'static> core::fmt::Debug for Subscription<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("key", &self.key)
            .field("attached", &(self.node.strong_count() > 0))
            .finish()
    }
}

impl<V: 'static> Subscription<V> {
    /// Remove the registration this subscription was returned for.
    ///
    /// Idempotent: once the registration is gone (or the whole node has
    /// been dropped), further calls are silent no-ops. Fails with
    /// [`Error::Destroyed`] when the node was destroyed, like any other
    /// mutating call on it.
    pub fn unsubscribe(&self) -> Result<(), Error> {
        let Some(state) = self.node.upgrade() else {
            return Ok(());
        };
        let node = Node { state };
        node.ensure_live()?;
        node.remove_listener(&self.event, self.key);
        Ok(())
    }
}
