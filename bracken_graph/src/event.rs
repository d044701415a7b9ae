// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event envelope shared by every hop of one emission.
//!
//! ## Overview
//!
//! An [`Event`] is created once per outward-facing emit call and passed by
//! reference to every listener that emission reaches. Its name, direction,
//! and target never change. Its stop latch and payload are interior-mutable
//! so that a write from one hop is visible to the rest of the propagation.
//!
//! ## See Also
//!
//! [`Node`](crate::node::Node) for the emit methods that create envelopes.

use alloc::borrow::ToOwned;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::node::Node;
use crate::types::Direction;

/// Envelope for a single emission.
///
/// Listeners receive `&Event<V>` as their first argument and may set the
/// stop latch or replace the payload through it. The payload slot holds an
/// `Rc<[V]>` so each hop can snapshot it by bumping a reference count
/// rather than cloning values.
pub struct Event<V: 'static> {
    name: String,
    direction: Direction,
    target: Node<V>,
    stopped: Cell<bool>,
    values: RefCell<Rc<[V]>>,
}

impl<V: 'static> core::fmt::Debug for Event<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("stopped", &self.stopped.get())
            .field("values_len", &self.values.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<V: 'static> Event<V> {
    pub(crate) fn new(name: &str, direction: Direction, target: Node<V>, values: Vec<V>) -> Self {
        Self {
            name: name.to_owned(),
            direction,
            target,
            stopped: Cell::new(false),
            values: RefCell::new(Rc::from(values)),
        }
    }

    /// The event name this emission was fired under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direction this emission travels in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The node on which the emission was initiated.
    ///
    /// This is the original target for every hop, not the node currently
    /// being dispatched.
    pub fn target(&self) -> &Node<V> {
        &self.target
    }

    /// The current payload, reflecting the latest
    /// [`transform_values`](Self::transform_values) call.
    ///
    /// The argument slice a listener receives is the payload as it stood
    /// when its hop began; this accessor always reads the live slot.
    pub fn values(&self) -> Rc<[V]> {
        self.values.borrow().clone()
    }

    /// Atomically replace the payload.
    ///
    /// The replacement is visible to subsequent hops of up or down
    /// traversal. It does not change the argument slice already handed to
    /// the current hop's listeners, and sibling delivery keeps the payload
    /// the emission started with.
    pub fn transform_values(&self, values: Vec<V>) {
        *self.values.borrow_mut() = Rc::from(values);
    }

    /// Set the one-way stop latch.
    ///
    /// The remaining listeners of the current hop still run; recursion into
    /// further up or down hops does not. There is no way to clear the latch.
    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    /// Whether the stop latch has been set during this emission.
    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Reload the payload slot for the next branch of a traversal.
    pub(crate) fn set_values(&self, values: Rc<[V]>) {
        *self.values.borrow_mut() = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn envelope(direction: Direction, values: Vec<i32>) -> Event<i32> {
        Event::new("test", direction, Node::new(), values)
    }

    #[test]
    fn accessors_reflect_construction() {
        let target: Node<i32> = Node::new();
        let event = Event::new("resize", Direction::Down, target.clone(), vec![3, 4]);
        assert_eq!(event.name(), "resize");
        assert_eq!(event.direction(), Direction::Down);
        assert_eq!(event.target(), &target);
        assert_eq!(&*event.values(), &[3, 4]);
    }

    #[test]
    fn stop_latch_is_one_way() {
        let event = envelope(Direction::Up, vec![]);
        assert!(!event.is_propagation_stopped());
        event.stop_propagation();
        assert!(event.is_propagation_stopped());
        // A second set is a no-op, not a toggle.
        event.stop_propagation();
        assert!(event.is_propagation_stopped());
    }

    #[test]
    fn transform_replaces_the_whole_payload() {
        let event = envelope(Direction::Up, vec![1, 2, 3]);
        event.transform_values(vec![9]);
        assert_eq!(&*event.values(), &[9]);
        event.transform_values(vec![]);
        assert!(event.values().is_empty());
    }

    #[test]
    fn snapshots_survive_a_transform() {
        let event = envelope(Direction::Up, vec![5]);
        let before = event.values();
        event.transform_values(vec![15]);
        assert_eq!(&*before, &[5], "hop snapshots keep the older payload");
        assert_eq!(&*event.values(), &[15]);
    }
}
