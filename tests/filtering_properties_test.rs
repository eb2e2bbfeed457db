//! Output properties checked against an independent computation over a mixed snapshot.

use std::collections::{HashMap, HashSet};

use depgraph::domain::classify::ClassifiedEdges;
use depgraph::domain::edge::EdgeKind;
use depgraph::domain::metatype::Metatype;
use depgraph::domain::snapshot::TypeSnapshot;
use depgraph::domain::render::render_dot;
use depgraph::dot::RenderOptions;

fn mixed_snapshot() -> TypeSnapshot {
    let mut s = TypeSnapshot::new();
    let kinds = Metatype::ALL;
    for i in 0..24 {
        s = s.with_type(&format!("p.T{i}"), kinds[i % 4]);
    }
    // Deterministic pseudo-random wiring.
    for i in 0..24usize {
        let a = format!("p.T{i}");
        let b = format!("p.T{}", (i * 7 + 3) % 24);
        let c = format!("p.T{}", (i * 5 + 11) % 24);
        match i % 3 {
            0 => s = s.with_relation(EdgeKind::Extends, &a, &b),
            1 => s = s.with_relation(EdgeKind::Implements, &a, &b),
            _ => {}
        }
        if i % 4 == 0 {
            s = s.with_relation(EdgeKind::Reference, &a, &c);
        }
        if i % 8 == 0 {
            s = s.with_relation(EdgeKind::Implements, &b, &c);
        }
    }
    s
}

fn degrees(edges: &ClassifiedEdges) -> HashMap<&str, usize> {
    let mut counter: HashMap<&str, usize> = HashMap::new();
    for (a, b) in edges.extends.iter().chain(edges.implements.iter()) {
        *counter.entry(a.as_str()).or_default() += 1;
        *counter.entry(b.as_str()).or_default() += 1;
    }
    counter
}

#[test]
fn test_implements_split_is_a_partition() {
    let s = mixed_snapshot();
    let edges = ClassifiedEdges::classify(&s);

    assert!(edges.interface_extends.is_disjoint(&edges.implements));
    let union: HashSet<_> = edges
        .interface_extends
        .union(&edges.implements)
        .cloned()
        .collect();
    assert_eq!(union, s.implements);
    for (a, b) in &edges.interface_extends {
        assert!(s.interfaces.contains(a) && s.interfaces.contains(b));
    }
}

#[test]
fn test_declared_iff_nonzero_degree() {
    let s = mixed_snapshot();
    let edges = ClassifiedEdges::classify(&s);
    let degree = degrees(&edges);
    let dot = render_dot(&s);
    let options = RenderOptions::default();

    for name in s.all_types() {
        let declared = dot.contains(&format!("\n        {}\n", options.node_line(name)));
        let connected = degree.get(name).copied().unwrap_or(0) > 0;
        assert_eq!(declared, connected, "type {}", name);
    }
}

#[test]
fn test_edge_emitted_iff_one_endpoint_connected() {
    let s = mixed_snapshot();
    let edges = ClassifiedEdges::classify(&s);
    let degree = degrees(&edges);
    let dot = render_dot(&s);
    let options = RenderOptions::default();

    for kind in [
        EdgeKind::Extends,
        EdgeKind::InterfaceExtends,
        EdgeKind::Implements,
        EdgeKind::Reference,
    ] {
        for (a, b) in edges.get(kind) {
            let isolated = |n: &str| degree.get(n).copied().unwrap_or(0) == 0;
            let expected = !(isolated(a.as_str()) && isolated(b.as_str()));
            let emitted = dot.contains(&options.edge_line(a, b));
            assert_eq!(emitted, expected, "{:?} edge {} -> {}", kind, a, b);
        }
    }
}

#[test]
fn test_rendering_twice_is_identical() {
    let s = mixed_snapshot();
    assert_eq!(render_dot(&s), render_dot(&s));
}
