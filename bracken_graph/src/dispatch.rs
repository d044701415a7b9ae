// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal and listener invocation for the four emission shapes.
//!
//! ## Overview
//!
//! One envelope is created per public emission and threaded through every
//! hop. At each hop the listener list is snapshotted and the borrow
//! released before any callback runs, so listeners are free to mutate the
//! node, its links, or the graph at large while the traversal is in
//! flight. Links are re-read after each hop, which lets listeners steer
//! where the emission goes next.

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::event::Event;
use crate::node::Node;
use crate::types::{Direction, Error};

/// Entry point for all four emission shapes on a live target.
pub(crate) fn emit<V: 'static>(
    target: &Node<V>,
    direction: Direction,
    name: &str,
    values: Vec<V>,
) -> Result<(), Error> {
    target.ensure_live()?;
    let event = Event::new(name, direction, target.clone(), values);
    match direction {
        Direction::Flat => run_hop(target, &event),
        Direction::Up | Direction::Down => {
            let initial = event.values();
            propagate(target, direction, &event, initial);
        }
        Direction::Sibling => {
            let siblings = sibling_set(target);
            let initial = event.values();
            run_hop(target, &event);
            for sibling in siblings {
                event.set_values(Rc::clone(&initial));
                run_hop(&sibling, &event);
            }
        }
    }
    Ok(())
}

/// Visit `node`, then recurse along the direction's links level by level.
///
/// The envelope's payload is reloaded from `args` on entry, so sibling
/// branches of the caller all start from the same payload no matter what
/// an earlier branch transformed. The payload captured after this hop is
/// what every branch below it receives.
fn propagate<V: 'static>(node: &Node<V>, direction: Direction, event: &Event<V>, args: Rc<[V]>) {
    event.set_values(args);
    run_hop(node, event);
    if event.is_propagation_stopped() {
        return;
    }
    let outgoing = event.values();
    let links = match direction {
        Direction::Up => node.parent_links(),
        _ => node.child_links(),
    };
    for link in links {
        propagate(&link, direction, event, Rc::clone(&outgoing));
    }
}

/// Run one node's listeners for the envelope's event.
///
/// Nodes destroyed since the traversal began are skipped silently. All
/// listeners of the hop observe the same payload slice, snapshotted
/// before the first of them runs.
fn run_hop<V: 'static>(node: &Node<V>, event: &Event<V>) {
    if node.is_destroyed() {
        return;
    }
    let entries = node.listener_snapshot(event.name());
    if entries.is_empty() {
        return;
    }
    let args = event.values();
    for entry in entries {
        if entry.once {
            // Mark before invoking so a re-entrant traversal that reaches
            // this entry again cannot fire it twice.
            if entry.spent.replace(true) {
                continue;
            }
            (entry.callback)(event, &args);
            node.remove_listener(event.name(), entry.key);
        } else {
            (entry.callback)(event, &args);
        }
    }
}

/// The target's siblings, fixed before any listener runs: for each parent
/// in order, that parent's children minus one occurrence of the target.
/// Shared children appear once per parent.
fn sibling_set<V: 'static>(target: &Node<V>) -> Vec<Node<V>> {
    let mut siblings = Vec::new();
    for parent in target.parent_links() {
        let mut peers = parent.child_links();
        if let Some(pos) = peers.iter().position(|peer| peer == target) {
            peers.remove(pos);
        }
        siblings.extend(peers);
    }
    siblings
}
