// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bracken_graph::node::Node;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Root-to-leaf chain of `depth` links, one counting listener per level.
fn build_chain(depth: usize) -> (Node<u64>, Node<u64>) {
    let root: Node<u64> = Node::new();
    root.on("tick", |_, args| {
        black_box(args.len());
    })
    .unwrap();
    let mut tip = root.clone();
    for _ in 0..depth {
        let next = Node::new();
        next.on("tick", |_, args| {
            black_box(args.len());
        })
        .unwrap();
        tip.link_child(&next).unwrap();
        tip = next;
    }
    (root, tip)
}

/// One parent with `breadth` children, each carrying a listener.
fn build_fanout(breadth: usize) -> (Node<u64>, Node<u64>) {
    let root: Node<u64> = Node::new();
    let first = Node::new();
    root.link_child(&first).unwrap();
    first
        .on("tick", |_, args| {
            black_box(args.len());
        })
        .unwrap();
    for _ in 1..breadth {
        let child = Node::new();
        child
            .on("tick", |_, args| {
                black_box(args.len());
            })
            .unwrap();
        root.link_child(&child).unwrap();
    }
    (root, first)
}

/// Chain where every level rewrites the payload on the way up.
fn build_relay_chain(depth: usize) -> (Node<u64>, Node<u64>) {
    let root: Node<u64> = Node::new();
    let mut tip = root.clone();
    for _ in 0..depth {
        let next = Node::new();
        next.on("acc", |event, args| {
            event.transform_values(vec![args[0] + 1]);
        })
        .unwrap();
        tip.link_child(&next).unwrap();
        tip = next;
    }
    root.on("acc", |_, args| {
        black_box(args[0]);
    })
    .unwrap();
    (root, tip)
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");
    for &n in &[1usize, 16, 256] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("emit_listeners_n{}", n), |b| {
            b.iter_batched(
                || {
                    let node: Node<u64> = Node::new();
                    for _ in 0..n {
                        node.on("tick", |_, args| {
                            black_box(args.len());
                        })
                        .unwrap();
                    }
                    node
                },
                |node| {
                    node.emit("tick", vec![1, 2, 3]).unwrap();
                    black_box(&node);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("up");
    for &depth in &[4usize, 16, 64] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("emit_up_depth{}", depth), |b| {
            b.iter_batched(
                || build_chain(depth),
                |(root, leaf)| {
                    leaf.emit_up("tick", vec![7]).unwrap();
                    black_box(&root);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_down(c: &mut Criterion) {
    let mut group = c.benchmark_group("down");
    for &breadth in &[16usize, 256] {
        group.throughput(Throughput::Elements(breadth as u64));
        group.bench_function(format!("emit_down_breadth{}", breadth), |b| {
            b.iter_batched(
                || build_fanout(breadth),
                |(root, _first)| {
                    root.emit_down("tick", vec![7]).unwrap();
                    black_box(&root);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_sibling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sibling");
    for &breadth in &[16usize, 256] {
        group.throughput(Throughput::Elements(breadth as u64));
        group.bench_function(format!("emit_sibling_breadth{}", breadth), |b| {
            b.iter_batched(
                || build_fanout(breadth),
                |(root, first)| {
                    first.emit_sibling("tick", vec![7]).unwrap();
                    black_box(&root);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_transform_relay(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for &depth in &[16usize, 64] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("relay_depth{}", depth), |b| {
            b.iter_batched(
                || build_relay_chain(depth),
                |(root, leaf)| {
                    leaf.emit_up("acc", vec![0]).unwrap();
                    black_box(&root);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_destroy_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("destroy");
    for &breadth in &[16usize, 256] {
        group.throughput(Throughput::Elements(breadth as u64));
        group.bench_function(format!("cascade_breadth{}", breadth), |b| {
            b.iter_batched(
                || build_fanout(breadth),
                |(root, first)| {
                    root.destroy().unwrap();
                    black_box(first.is_destroyed());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flat,
    bench_up,
    bench_down,
    bench_sibling,
    bench_transform_relay,
    bench_destroy_cascade,
);
criterion_main!(benches);
