// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The destroy lifecycle.
//!
//! Destroying a region takes its sole-parented server with it, spares a
//! cache that another region still links, and leaves the region
//! permanently inert.
//!
//! Run:
//! - `cargo run -p bracken_demos --example destroy_cascade`

use bracken_graph::node::Node;

fn main() {
    let fleet: Node<String> = Node::new();
    let region = Node::new();
    let server = Node::new();
    let shared_cache = Node::new();
    let other_region = Node::new();

    fleet.link_child(&region).unwrap().link_child(&server).unwrap();
    fleet.link_child(&other_region).unwrap();
    region.link_child(&shared_cache).unwrap();
    other_region.link_child(&shared_cache).unwrap();

    println!("== before ==");
    println!("  fleet children: {}", fleet.child_links().len());
    println!("  cache parents:  {}", shared_cache.parent_links().len());

    region.destroy().unwrap();

    println!("== after destroy(region) ==");
    println!("  region destroyed: {}", region.is_destroyed());
    println!("  server destroyed: {} (region was its only parent)", server.is_destroyed());
    println!("  cache destroyed:  {} (other region still links it)", shared_cache.is_destroyed());
    println!("  cache parents:    {}", shared_cache.parent_links().len());
    println!("  fleet children:   {}", fleet.child_links().len());

    match region.emit("ping", vec![]) {
        Err(err) => println!("  emitting on the region now fails: {err}"),
        Ok(()) => println!("  unexpected success"),
    }
}
