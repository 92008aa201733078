//! Relationship graph over the article corpus.
//!
//! # Responsibility
//! - Derive the deduplicated undirected edge list from declared
//!   cross-references.
//! - Provide node sizing, neighbor lookup and tap-gesture helpers for the
//!   graph view.
//!
//! # Invariants
//! - An edge between A and B appears once, regardless of which side(s)
//!   declared it.
//! - Edges naming unknown node ids are tolerated; the layout engine skips
//!   them.

use std::collections::{BTreeMap, BTreeSet};

use crate::corpus;

mod layout;

pub use layout::{
    compute_layout, layout_nodes, GraphLayout, LayoutNode, Point, CANVAS_HEIGHT, CANVAS_WIDTH,
};

/// Node radius bounds and growth per connection, in canvas units.
const RADIUS_BASE: f64 = 8.0;
const RADIUS_PER_CONNECTION: f64 = 2.0;
const RADIUS_MIN: f64 = 10.0;
const RADIUS_MAX: f64 = 20.0;

/// Two taps on the same node within this window open the detail view.
const DOUBLE_TAP_WINDOW_MS: u64 = 400;

/// One undirected relation between two articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: &'static str,
    pub target: &'static str,
}

/// Derives the undirected edge list from the corpus `related_to` relation,
/// deduplicated by sorted id pair: an edge is emitted once even when both
/// directions are declared.
pub fn related_edges() -> Vec<GraphEdge> {
    let mut seen = BTreeSet::new();
    let mut edges = Vec::new();
    for article in corpus::all_articles() {
        for &target in article.related_to {
            let key = if article.id <= target {
                (article.id, target)
            } else {
                (target, article.id)
            };
            if seen.insert(key) {
                edges.push(GraphEdge {
                    source: article.id,
                    target,
                });
            }
        }
    }
    edges
}

/// Connection count per corpus article. Articles with no edges are present
/// with a zero count so node sizing never misses a lookup.
pub fn connection_counts(edges: &[GraphEdge]) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> = corpus::all_articles()
        .iter()
        .map(|article| (article.id, 0))
        .collect();
    for edge in edges {
        for endpoint in [edge.source, edge.target] {
            if let Some(count) = counts.get_mut(endpoint) {
                *count += 1;
            }
        }
    }
    counts
}

/// Node radius for the given connection count, clamped to the display
/// range.
pub fn node_radius(connections: usize) -> f64 {
    (RADIUS_BASE + RADIUS_PER_CONNECTION * connections as f64).clamp(RADIUS_MIN, RADIUS_MAX)
}

/// Direct neighbors of one node over the given edge list.
pub fn neighbors_of(node_id: &str, edges: &[GraphEdge]) -> BTreeSet<&'static str> {
    let mut neighbors = BTreeSet::new();
    for edge in edges {
        if edge.source == node_id {
            neighbors.insert(edge.target);
        }
        if edge.target == node_id {
            neighbors.insert(edge.source);
        }
    }
    neighbors
}

/// Outcome of one tap on a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// The node became the current selection.
    Selected(&'static str),
    /// The tap cleared the current selection.
    Deselected,
    /// Second tap on the selected node within the window: open the full
    /// detail view instead of toggling.
    OpenDetail(&'static str),
}

/// Resolves single-tap selection toggling vs double-tap detail opening.
///
/// The caller supplies tap timestamps in milliseconds, keeping this helper
/// free of any clock.
#[derive(Debug, Clone, Default)]
pub struct TapTracker {
    selected: Option<&'static str>,
    last_tap_ms: u64,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected node, if any.
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Registers a tap on `node_id` at `at_ms` and returns what the view
    /// should do.
    pub fn tap(&mut self, node_id: &'static str, at_ms: u64) -> TapAction {
        if self.selected == Some(node_id)
            && at_ms.saturating_sub(self.last_tap_ms) < DOUBLE_TAP_WINDOW_MS
        {
            self.last_tap_ms = 0;
            return TapAction::OpenDetail(node_id);
        }

        self.last_tap_ms = at_ms;
        if self.selected == Some(node_id) {
            self.selected = None;
            TapAction::Deselected
        } else {
            self.selected = Some(node_id);
            TapAction::Selected(node_id)
        }
    }
}
