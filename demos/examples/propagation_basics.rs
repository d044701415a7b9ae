// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linking and the four emission shapes.
//!
//! Builds a three-level monitoring tree and shows how flat, upward,
//! downward, and sibling emissions travel it.
//!
//! Run:
//! - `cargo run -p bracken_demos --example propagation_basics`

use bracken_graph::node::Node;

fn main() {
    let panel: Node<String> = Node::new();
    let zone = Node::new();
    let hallway = Node::new();
    let lobby = Node::new();
    panel.link_child(&zone).unwrap();
    zone.link_child(&hallway).unwrap();
    zone.link_child(&lobby).unwrap();

    panel
        .on("report", |_, args| println!("  panel heard {args:?}"))
        .unwrap();
    zone.on("report", |_, args| println!("  zone heard {args:?}"))
        .unwrap();
    hallway
        .on("report", |_, args| println!("  hallway heard {args:?}"))
        .unwrap();
    lobby
        .on("report", |_, args| println!("  lobby heard {args:?}"))
        .unwrap();

    println!("== flat: hallway.emit ==");
    hallway.emit("report", vec!["motion".to_owned()]).unwrap();

    println!("== up: hallway.emit_up ==");
    hallway.emit_up("report", vec!["motion".to_owned()]).unwrap();

    println!("== down: panel.emit_down ==");
    panel.emit_down("report", vec!["drill".to_owned()]).unwrap();

    println!("== sibling: hallway.emit_sibling ==");
    hallway
        .emit_sibling("report", vec!["handoff".to_owned()])
        .unwrap();
}
