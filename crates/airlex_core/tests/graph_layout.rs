use airlex_core::graph::{
    compute_layout, connection_counts, layout_nodes, neighbors_of, node_radius, related_edges,
    GraphEdge, LayoutNode, TapAction, TapTracker, CANVAS_HEIGHT, CANVAS_WIDTH,
};
use airlex_core::corpus;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn corpus_category_ids() -> Vec<&'static str> {
    corpus::categories().iter().map(|c| c.id).collect()
}

#[test]
fn corpus_edges_are_deduplicated_undirected() {
    let edges = related_edges();
    for (index, edge) in edges.iter().enumerate() {
        for other in &edges[index + 1..] {
            let same = (edge.source == other.source && edge.target == other.target)
                || (edge.source == other.target && edge.target == other.source);
            assert!(!same, "duplicate edge {} - {}", edge.source, edge.target);
        }
    }
}

#[test]
fn layout_produces_one_in_bounds_position_per_node() {
    let nodes = layout_nodes();
    let edges = related_edges();
    let mut rng = StdRng::seed_from_u64(7);
    let layout = compute_layout(&corpus_category_ids(), &nodes, &edges, &mut rng);

    assert_eq!(layout.positions.len(), nodes.len());
    for (id, point) in &layout.positions {
        assert!(point.x.is_finite() && point.y.is_finite(), "{id} not finite");
        assert!((40.0..=CANVAS_WIDTH - 40.0).contains(&point.x), "{id} x out of bounds");
        assert!((40.0..=CANVAS_HEIGHT - 40.0).contains(&point.y), "{id} y out of bounds");
    }
    assert_eq!(layout.anchors.len(), corpus::categories().len());
}

#[test]
fn seeded_layouts_are_reproducible() {
    let nodes = layout_nodes();
    let edges = related_edges();
    let categories = corpus_category_ids();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let layout_a = compute_layout(&categories, &nodes, &edges, &mut rng_a);
    let layout_b = compute_layout(&categories, &nodes, &edges, &mut rng_b);

    for (id, point) in &layout_a.positions {
        let other = layout_b.positions.get(id).unwrap();
        assert_eq!(point.x, other.x);
        assert_eq!(point.y, other.y);
    }
}

#[test]
fn attraction_pulls_connected_pairs_closer_than_unconnected() {
    // Synthetic single-category graph: three connected pairs, the rest
    // unconnected, so the only systematic difference is the spring force.
    let ids = ["n0", "n1", "n2", "n3", "n4", "n5", "n6", "n7"];
    let nodes: Vec<LayoutNode> = ids
        .iter()
        .map(|&id| LayoutNode {
            id,
            category_id: "only",
        })
        .collect();
    let edges = vec![
        GraphEdge { source: "n0", target: "n1" },
        GraphEdge { source: "n2", target: "n3" },
        GraphEdge { source: "n4", target: "n5" },
    ];

    let mut rng = StdRng::seed_from_u64(11);
    let layout = compute_layout(&["only"], &nodes, &edges, &mut rng);

    let distance = |a: &str, b: &str| {
        let pa = layout.positions[a];
        let pb = layout.positions[b];
        ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt()
    };

    let connected: Vec<f64> = edges
        .iter()
        .map(|edge| distance(edge.source, edge.target))
        .collect();
    let mut unconnected = Vec::new();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            let is_edge = edges.iter().any(|edge| {
                (edge.source == *a && edge.target == *b)
                    || (edge.source == *b && edge.target == *a)
            });
            if !is_edge {
                unconnected.push(distance(a, b));
            }
        }
    }

    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
    assert!(
        mean(&connected) < mean(&unconnected),
        "connected mean {} >= unconnected mean {}",
        mean(&connected),
        mean(&unconnected)
    );
}

#[test]
fn edges_to_unknown_nodes_are_skipped() {
    let nodes = vec![
        LayoutNode { id: "a", category_id: "cat" },
        LayoutNode { id: "b", category_id: "cat" },
    ];
    let edges = vec![
        GraphEdge { source: "a", target: "ghost" },
        GraphEdge { source: "ghost", target: "b" },
    ];

    let mut rng = StdRng::seed_from_u64(3);
    let layout = compute_layout(&["cat"], &nodes, &edges, &mut rng);
    assert_eq!(layout.positions.len(), 2);
    assert!(!layout.positions.contains_key("ghost"));
}

#[test]
fn coincident_nodes_stay_finite() {
    // Constant-step RNG gives both uncategorized nodes identical jitter,
    // so they start at exactly the same point.
    let nodes = vec![
        LayoutNode { id: "x", category_id: "unknown_cat" },
        LayoutNode { id: "y", category_id: "unknown_cat" },
    ];

    let mut rng = StepRng::new(0, 0);
    let layout = compute_layout(&["listed_cat"], &nodes, &[], &mut rng);
    for point in layout.positions.values() {
        assert!(point.x.is_finite());
        assert!(point.y.is_finite());
    }
}

#[test]
fn connection_counts_cover_every_corpus_article() {
    let edges = related_edges();
    let counts = connection_counts(&edges);
    assert_eq!(counts.len(), corpus::all_articles().len());

    // law73_2 declares four relations and is declared by three more.
    assert!(counts["law73_2"] >= 4);
    // Every endpoint contributes exactly two endpoint increments per edge.
    let total: usize = counts.values().sum();
    let known_endpoint_edges = edges
        .iter()
        .flat_map(|edge| [edge.source, edge.target])
        .filter(|id| corpus::article_by_id(id).is_some())
        .count();
    assert_eq!(total, known_endpoint_edges);
}

#[test]
fn node_radius_grows_with_connections_within_bounds() {
    assert_eq!(node_radius(0), 10.0);
    assert!(node_radius(3) > node_radius(1));
    assert_eq!(node_radius(100), 20.0);
}

#[test]
fn neighbors_are_looked_up_in_both_directions() {
    let edges = related_edges();
    let neighbors = neighbors_of("law73", &edges);
    // Declared by law73 itself.
    assert!(neighbors.contains("rule163"));
    // Declared only by the other side (om_sup2ii lists law73).
    assert!(neighbors.contains("om_sup2ii"));
}

#[test]
fn second_tap_within_window_opens_detail() {
    let mut tracker = TapTracker::new();
    assert_eq!(tracker.tap("law73", 1_000), TapAction::Selected("law73"));
    assert_eq!(tracker.tap("law73", 1_200), TapAction::OpenDetail("law73"));
    assert_eq!(tracker.selected(), Some("law73"));
}

#[test]
fn slow_second_tap_toggles_selection_off() {
    let mut tracker = TapTracker::new();
    tracker.tap("law73", 1_000);
    assert_eq!(tracker.tap("law73", 1_600), TapAction::Deselected);
    assert_eq!(tracker.selected(), None);
}

#[test]
fn tapping_another_node_moves_selection() {
    let mut tracker = TapTracker::new();
    tracker.tap("law73", 1_000);
    assert_eq!(tracker.tap("law74", 1_100), TapAction::Selected("law74"));
    assert_eq!(tracker.selected(), Some("law74"));
}
