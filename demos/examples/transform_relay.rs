// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload transformation and the stop latch.
//!
//! An alarm climbs from a sensor through a floor controller to the
//! building panel. The floor annotates the report in flight; during quiet
//! hours it absorbs the alarm instead, and a subscription restores normal
//! escalation afterwards.
//!
//! Run:
//! - `cargo run -p bracken_demos --example transform_relay`

use bracken_graph::node::Node;

fn main() {
    let building: Node<String> = Node::new();
    let floor = Node::new();
    let sensor = Node::new();
    building
        .link_child(&floor)
        .unwrap()
        .link_child(&sensor)
        .unwrap();

    floor
        .on("alarm", |event, args| {
            println!("  floor saw {args:?}");
            let mut tagged = args.to_vec();
            tagged.push("confirmed by floor 2".to_owned());
            event.transform_values(tagged);
        })
        .unwrap();

    building
        .on("alarm", |_, args| println!("  building received {args:?}"))
        .unwrap();

    println!("== alarm travels up and grows ==");
    sensor.emit_up("alarm", vec!["smoke".to_owned()]).unwrap();

    let quiet = floor
        .on("alarm", |event, _| {
            println!("  floor absorbed the alarm (quiet hours)");
            event.stop_propagation();
        })
        .unwrap();

    println!("== alarm stops at the floor ==");
    sensor.emit_up("alarm", vec!["smoke".to_owned()]).unwrap();

    quiet.unsubscribe().unwrap();

    println!("== escalation restored ==");
    sensor.emit_up("alarm", vec!["smoke".to_owned()]).unwrap();
}
