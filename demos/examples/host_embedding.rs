// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedding nodes in host types.
//!
//! Domain types gain the full graph surface by owning a node and
//! implementing `AsNode`. Hosts link to hosts directly and emissions flow
//! between them exactly as between bare nodes.
//!
//! Run:
//! - `cargo run -p bracken_demos --example host_embedding`

use bracken_graph::embed::AsNode;
use bracken_graph::node::Node;

struct Device {
    label: &'static str,
    node: Node<String>,
}

impl Device {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            node: Node::new(),
        }
    }
}

impl AsNode<String> for Device {
    fn as_node(&self) -> &Node<String> {
        &self.node
    }
}

fn main() {
    let hub = Device::new("hub");
    let thermostat = Device::new("thermostat");
    let valve = Device::new("valve");
    hub.link_child(&thermostat).unwrap();
    hub.link_child(&valve).unwrap();

    let hub_label = hub.label;
    hub.on("reading", move |_, args| {
        println!("  {hub_label} aggregated {args:?}");
    })
    .unwrap();
    let valve_label = valve.label;
    valve
        .on("calibrate", move |_, args| {
            println!("  {valve_label} calibrating with {args:?}");
        })
        .unwrap();
    let thermostat_label = thermostat.label;
    thermostat
        .on("calibrate", move |_, args| {
            println!("  {thermostat_label} calibrating with {args:?}");
        })
        .unwrap();

    println!("== thermostat reports upward ==");
    thermostat
        .emit_up("reading", vec!["21.5 C".to_owned()])
        .unwrap();

    println!("== hub broadcasts downward ==");
    hub.emit_down("calibrate", vec!["offset +0.3".to_owned()])
        .unwrap();
}
