//! 两种布局共用的契约测试，以及随机操作序列下的差分测试

use super::{EdgeListGraph, VertexListGraph, WeightedGraph};
use crate::types::Weight;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

fn s(v: &str) -> String {
    v.to_string()
}

fn set_of(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|l| s(l)).collect()
}

fn map_of(entries: &[(&str, Weight)]) -> BTreeMap<String, Weight> {
    entries.iter().map(|(l, w)| (s(l), *w)).collect()
}

/// 对每种布局生成同一组契约测试
macro_rules! contract_tests {
    ($name:ident, $ctor:expr) => {
        mod $name {
            use super::*;

            fn empty() -> impl WeightedGraph<String> {
                $ctor
            }

            #[test]
            fn initial_graph_is_empty() {
                let graph = empty();
                assert!(graph.vertices().is_empty());
                assert!(graph.sources(&s("A")).is_empty());
                assert!(graph.targets(&s("A")).is_empty());
            }

            #[test]
            fn add_twice() {
                let mut graph = empty();
                assert!(graph.add(s("v")));
                assert!(!graph.add(s("v")));
                assert_eq!(graph.vertices(), set_of(&["v"]));
            }

            #[test]
            fn set_then_reweight() {
                let mut graph = empty();
                assert_eq!(graph.set(s("a"), s("b"), 5), 0);
                assert_eq!(graph.set(s("a"), s("b"), 8), 5);
                assert_eq!(graph.targets(&s("a")), map_of(&[("b", 8)]));
                assert_eq!(graph.sources(&s("b")), map_of(&[("a", 8)]));
                assert!(graph.sources(&s("a")).is_empty());
                assert!(graph.targets(&s("b")).is_empty());
            }

            #[test]
            fn set_adds_missing_endpoints() {
                let mut graph = empty();
                graph.add(s("a"));
                graph.set(s("a"), s("b"), 1);
                assert_eq!(graph.vertices(), set_of(&["a", "b"]));
            }

            #[test]
            fn zero_weight_on_missing_edge() {
                let mut graph = empty();
                graph.add(s("a"));
                graph.add(s("b"));
                assert_eq!(graph.set(s("a"), s("b"), 0), 0);
                assert_eq!(graph.vertices(), set_of(&["a", "b"]));
                assert!(graph.targets(&s("a")).is_empty());
            }

            #[test]
            fn zero_weight_adds_endpoints() {
                let mut graph = empty();
                assert_eq!(graph.set(s("a"), s("b"), 0), 0);
                assert_eq!(graph.vertices(), set_of(&["a", "b"]));
                assert_eq!(graph.edge_count(), 0);
            }

            #[test]
            fn zero_weight_deletes_only_that_direction() {
                let mut graph = empty();
                graph.set(s("a"), s("b"), 2);
                graph.set(s("b"), s("a"), 3);
                assert_eq!(graph.set(s("a"), s("b"), 0), 2);
                assert!(graph.targets(&s("a")).is_empty());
                assert_eq!(graph.targets(&s("b")), map_of(&[("a", 3)]));
            }

            #[test]
            fn negative_weights_are_edges() {
                let mut graph = empty();
                assert_eq!(graph.set(s("a"), s("b"), -4), 0);
                assert_eq!(graph.set(s("a"), s("b"), -1), -4);
                assert_eq!(graph.sources(&s("b")), map_of(&[("a", -1)]));
            }

            #[test]
            fn remove_cascades() {
                let mut graph = empty();
                graph.set(s("a"), s("b"), 5);
                assert!(graph.remove(&s("a")));
                assert_eq!(graph.vertices(), set_of(&["b"]));
                assert!(graph.sources(&s("b")).is_empty());
            }

            #[test]
            fn remove_target_cascades() {
                let mut graph = empty();
                graph.set(s("a"), s("b"), 5);
                graph.set(s("c"), s("b"), 6);
                graph.set(s("a"), s("c"), 7);
                assert!(graph.remove(&s("b")));
                assert_eq!(graph.targets(&s("a")), map_of(&[("c", 7)]));
                assert!(graph.targets(&s("c")).is_empty());
            }

            #[test]
            fn remove_missing_vertex() {
                let mut graph = empty();
                graph.set(s("a"), s("b"), 5);
                assert!(!graph.remove(&s("z")));
                assert_eq!(graph.vertices(), set_of(&["a", "b"]));
                assert_eq!(graph.edge_count(), 1);
            }

            #[test]
            fn removed_vertex_can_return() {
                let mut graph = empty();
                graph.set(s("a"), s("b"), 5);
                graph.remove(&s("a"));
                assert!(graph.add(s("a")));
                assert!(graph.targets(&s("a")).is_empty());
                assert_eq!(graph.set(s("a"), s("b"), 9), 0);
            }

            #[test]
            fn self_loop() {
                let mut graph = empty();
                assert_eq!(graph.set(s("a"), s("a"), 3), 0);
                assert_eq!(graph.targets(&s("a")), map_of(&[("a", 3)]));
                assert_eq!(graph.sources(&s("a")), map_of(&[("a", 3)]));
                assert!(graph.remove(&s("a")));
                assert!(graph.vertices().is_empty());
                assert_eq!(graph.edge_count(), 0);
            }

            #[test]
            fn snapshots_do_not_change() {
                let mut graph = empty();
                graph.set(s("a"), s("b"), 1);
                let vertices = graph.vertices();
                let targets = graph.targets(&s("a"));
                let sources = graph.sources(&s("b"));

                graph.set(s("a"), s("c"), 2);
                graph.remove(&s("b"));

                assert_eq!(vertices, set_of(&["a", "b"]));
                assert_eq!(targets, map_of(&[("b", 1)]));
                assert_eq!(sources, map_of(&[("a", 1)]));
            }

            #[test]
            fn fan_in_and_fan_out() {
                let mut graph = empty();
                graph.set(s("hub"), s("x"), 1);
                graph.set(s("hub"), s("y"), 2);
                graph.set(s("x"), s("sink"), 3);
                graph.set(s("y"), s("sink"), 4);
                graph.set(s("hub"), s("sink"), 5);

                assert_eq!(
                    graph.targets(&s("hub")),
                    map_of(&[("x", 1), ("y", 2), ("sink", 5)])
                );
                assert_eq!(
                    graph.sources(&s("sink")),
                    map_of(&[("x", 3), ("y", 4), ("hub", 5)])
                );
                assert_eq!(graph.edge_count(), 5);
            }

            #[test]
            fn worked_scenario() {
                let mut graph = empty();
                assert!(graph.add(s("A")));
                assert_eq!(graph.set(s("A"), s("B"), 10), 0);
                assert_eq!(graph.set(s("A"), s("B"), 20), 10);
                assert_eq!(graph.set(s("A"), s("B"), 0), 20);
                assert_eq!(graph.vertices(), set_of(&["A", "B"]));
                assert!(graph.targets(&s("A")).is_empty());
                assert!(graph.remove(&s("B")));
                assert_eq!(graph.vertices(), set_of(&["A"]));
            }

            #[test]
            fn rendering_lists_everything() {
                let mut graph = empty();
                graph.add(s("iso"));
                graph.set(s("a"), s("b"), 10);
                graph.set(s("b"), s("b"), -2);

                let text = graph.to_string();
                assert!(text.contains("iso"));
                assert!(text.contains("a -> b (weight: 10)"));
                assert!(text.contains("b -> b (weight: -2)"));
            }
        }
    };
}

contract_tests!(edge_list, EdgeListGraph::<String>::new());
contract_tests!(vertex_list, VertexListGraph::<String>::new());

/// 差分测试中的一步操作
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Set(String, String, Weight),
    Remove(String),
}

fn pick(rng: &mut StdRng, alphabet: &[&str]) -> String {
    s(alphabet[rng.gen_range(0..alphabet.len())])
}

fn random_op(rng: &mut StdRng, alphabet: &[&str]) -> Op {
    match rng.gen_range(0..10) {
        0 | 1 => Op::Add(pick(rng, alphabet)),
        2 => Op::Remove(pick(rng, alphabet)),
        3 | 4 => Op::Set(pick(rng, alphabet), pick(rng, alphabet), 0),
        _ => {
            let (a, b) = (pick(rng, alphabet), pick(rng, alphabet));
            Op::Set(a, b, rng.gen_range(-5..=20))
        }
    }
}

/// 对两种布局执行同一操作，比较返回值
fn apply_both(
    edges: &mut EdgeListGraph<String>,
    vertices: &mut VertexListGraph<String>,
    op: &Op,
) {
    match op {
        Op::Add(v) => assert_eq!(edges.add(v.clone()), vertices.add(v.clone()), "{:?}", op),
        Op::Set(a, b, w) => assert_eq!(
            edges.set(a.clone(), b.clone(), *w),
            vertices.set(a.clone(), b.clone(), *w),
            "{:?}",
            op
        ),
        Op::Remove(v) => assert_eq!(edges.remove(v), vertices.remove(v), "{:?}", op),
    }
}

fn assert_same_queries(
    edges: &EdgeListGraph<String>,
    vertices: &VertexListGraph<String>,
    alphabet: &[&str],
    step: usize,
) {
    assert_eq!(edges.vertices(), vertices.vertices(), "step {}", step);
    for label in alphabet {
        let label = s(label);
        assert_eq!(
            edges.sources(&label),
            vertices.sources(&label),
            "step {} sources({})",
            step,
            label
        );
        assert_eq!(
            edges.targets(&label),
            vertices.targets(&label),
            "step {} targets({})",
            step,
            label
        );
    }
    assert_eq!(edges.snapshot(), vertices.snapshot(), "step {}", step);
    assert_eq!(edges.edge_count(), vertices.edge_count(), "step {}", step);
}

#[test]
fn differential_random_sequences() {
    let alphabet = ["A", "B", "C", "D", "E", "F"];

    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = EdgeListGraph::new();
        let mut vertices = VertexListGraph::new();

        for step in 0..400 {
            let op = random_op(&mut rng, &alphabet);
            apply_both(&mut edges, &mut vertices, &op);
            assert_same_queries(&edges, &vertices, &alphabet, step);
        }
    }
}

#[test]
fn differential_stored_weights_never_zero() {
    let alphabet = ["p", "q", "r"];
    let mut rng = StdRng::seed_from_u64(7);
    let mut edges = EdgeListGraph::new();
    let mut vertices = VertexListGraph::new();

    for _ in 0..1000 {
        let op = random_op(&mut rng, &alphabet);
        apply_both(&mut edges, &mut vertices, &op);

        let snapshot = vertices.snapshot();
        for e in &snapshot.edges {
            assert_ne!(e.weight(), 0);
            assert!(snapshot.vertices.contains(e.source()));
            assert!(snapshot.vertices.contains(e.target()));
        }
    }
}
