// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling emission across overlapping groups.
//!
//! A primary server announces a takeover to its peers. It belongs to two
//! replication groups, so the announcement reaches the other children of
//! both parents; the standby sits in both groups and hears it once per
//! shared parent.
//!
//! Run:
//! - `cargo run -p bracken_demos --example sibling_broadcast`

use bracken_graph::node::Node;

fn main() {
    let group_a: Node<String> = Node::new();
    let group_b = Node::new();
    let primary = Node::new();
    let standby = Node::new();
    let logger = Node::new();

    group_a.link_child(&primary).unwrap();
    group_a.link_child(&standby).unwrap();
    group_b.link_child(&primary).unwrap();
    group_b.link_child(&standby).unwrap();
    group_b.link_child(&logger).unwrap();

    primary
        .on("leader", |_, args| println!("  primary announced {args:?}"))
        .unwrap();
    standby
        .on("leader", |_, args| println!("  standby heard {args:?}"))
        .unwrap();
    logger
        .on("leader", |_, args| println!("  logger heard {args:?}"))
        .unwrap();

    println!("== primary announces to every peer group ==");
    println!("   (standby is in both groups, so it hears the announcement twice)");
    primary
        .emit_sibling("leader", vec!["primary-1 takes over".to_owned()])
        .unwrap();
}
