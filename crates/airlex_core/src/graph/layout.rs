//! Force-directed layout engine for the relationship graph.
//!
//! # Responsibility
//! - Compute a stable 2D position for every article node, clustered near
//!   its category anchor with connected nodes pulled together.
//!
//! # Invariants
//! - Exactly one output position per input node, always inside canvas
//!   bounds.
//! - The simulation runs a fixed number of steps with a linearly decaying
//!   influence factor; there is no convergence detection.
//! - All randomness comes from the injected `Rng`, so a seeded source
//!   yields reproducible layouts.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use rand::Rng;

use crate::corpus;

use super::GraphEdge;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 800.0;

/// Category anchors sit on this circle around the canvas center.
const ANCHOR_RADIUS: f64 = 220.0;
const SIMULATION_STEPS: usize = 60;
const REPULSION_STRENGTH: f64 = 800.0;
/// Distance floor keeping the inverse-square repulsion finite.
const MIN_DISTANCE: f64 = 1.0;
const IDEAL_EDGE_LENGTH: f64 = 90.0;
const ATTRACTION_STRENGTH: f64 = 0.02;
const CATEGORY_GRAVITY: f64 = 0.005;
const CENTER_GRAVITY: f64 = 0.001;
const DAMPING: f64 = 0.6;
const BOUNDS_MARGIN: f64 = 40.0;
/// Initial fan-out radius around the category anchor.
const SPREAD_BASE: f64 = 50.0;
const SPREAD_PER_SIBLING: f64 = 8.0;
/// Random jitter amplitude breaking exact symmetry at initialization.
const JITTER: f64 = 20.0;

/// One node handed to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutNode {
    pub id: &'static str,
    pub category_id: &'static str,
}

/// A 2D canvas position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Final layout: node positions plus per-category anchor points for zone
/// markers.
#[derive(Debug, Clone)]
pub struct GraphLayout {
    pub positions: BTreeMap<&'static str, Point>,
    pub anchors: BTreeMap<&'static str, Point>,
    pub width: f64,
    pub height: f64,
}

/// Builds the layout node list for the full corpus.
pub fn layout_nodes() -> Vec<LayoutNode> {
    corpus::categories()
        .iter()
        .flat_map(|category| {
            category.articles.iter().map(|article| LayoutNode {
                id: article.id,
                category_id: category.id,
            })
        })
        .collect()
}

struct SimNode {
    id: &'static str,
    category_id: &'static str,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

/// Runs the force simulation and returns final positions.
///
/// `category_ids` fixes the anchor order around the circle; nodes whose
/// category is not listed start at the canvas center. Edges referencing
/// unknown node ids are skipped.
pub fn compute_layout<R: Rng>(
    category_ids: &[&'static str],
    nodes: &[LayoutNode],
    edges: &[GraphEdge],
    rng: &mut R,
) -> GraphLayout {
    let cx = CANVAS_WIDTH / 2.0;
    let cy = CANVAS_HEIGHT / 2.0;

    // Anchors evenly spaced around a circle, starting at 12 o'clock.
    let mut anchors = BTreeMap::new();
    for (index, category_id) in category_ids.iter().enumerate() {
        let angle = (index as f64 / category_ids.len() as f64) * PI * 2.0 - PI / 2.0;
        anchors.insert(
            *category_id,
            Point {
                x: cx + angle.cos() * ANCHOR_RADIUS,
                y: cy + angle.sin() * ANCHOR_RADIUS,
            },
        );
    }

    // Fan nodes out around their anchor; jitter breaks exact symmetry so
    // coincident nodes cannot lock into a zero-distance equilibrium.
    let mut sim: Vec<SimNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let anchor = anchors
            .get(node.category_id)
            .copied()
            .unwrap_or(Point { x: cx, y: cy });
        let siblings: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, other)| other.category_id == node.category_id)
            .map(|(index, _)| index)
            .collect();
        let position_in_category = siblings
            .iter()
            .position(|&index| nodes[index].id == node.id)
            .unwrap_or(0);
        let angle =
            position_in_category as f64 / siblings.len().max(1) as f64 * PI * 2.0;
        let spread = SPREAD_BASE + siblings.len() as f64 * SPREAD_PER_SIBLING;
        sim.push(SimNode {
            id: node.id,
            category_id: node.category_id,
            x: anchor.x + angle.cos() * spread + (rng.gen::<f64>() - 0.5) * JITTER,
            y: anchor.y + angle.sin() * spread + (rng.gen::<f64>() - 0.5) * JITTER,
            vx: 0.0,
            vy: 0.0,
        });
    }

    let index_of: BTreeMap<&str, usize> = sim
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id, index))
        .collect();
    let resolved_edges: Vec<(usize, usize)> = edges
        .iter()
        .filter_map(|edge| {
            let a = *index_of.get(edge.source)?;
            let b = *index_of.get(edge.target)?;
            Some((a, b))
        })
        .collect();

    for step in 0..SIMULATION_STEPS {
        let alpha = 1.0 - step as f64 / SIMULATION_STEPS as f64;

        // Pairwise repulsion, inverse-square with a distance floor.
        for i in 0..sim.len() {
            for j in (i + 1)..sim.len() {
                let dx = sim[j].x - sim[i].x;
                let dy = sim[j].y - sim[i].y;
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = REPULSION_STRENGTH / (dist * dist) * alpha;
                let fx = dx / dist * force;
                let fy = dy / dist * force;
                sim[i].vx -= fx;
                sim[i].vy -= fy;
                sim[j].vx += fx;
                sim[j].vy += fy;
            }
        }

        // Spring attraction toward the ideal edge length.
        for &(a, b) in &resolved_edges {
            let dx = sim[b].x - sim[a].x;
            let dy = sim[b].y - sim[a].y;
            let dist = (dx * dx + dy * dy).sqrt();
            let force = (dist - IDEAL_EDGE_LENGTH) * ATTRACTION_STRENGTH * alpha;
            let fx = dx / dist.max(MIN_DISTANCE) * force;
            let fy = dy / dist.max(MIN_DISTANCE) * force;
            sim[a].vx += fx;
            sim[a].vy += fy;
            sim[b].vx -= fx;
            sim[b].vy -= fy;
        }

        for node in &mut sim {
            // Category gravity.
            if let Some(anchor) = anchors.get(node.category_id) {
                node.vx += (anchor.x - node.x) * CATEGORY_GRAVITY * alpha;
                node.vy += (anchor.y - node.y) * CATEGORY_GRAVITY * alpha;
            }
            // Center gravity.
            node.vx += (cx - node.x) * CENTER_GRAVITY * alpha;
            node.vy += (cy - node.y) * CENTER_GRAVITY * alpha;

            // Damp, integrate, clamp to bounds.
            node.vx *= DAMPING;
            node.vy *= DAMPING;
            node.x = (node.x + node.vx).clamp(BOUNDS_MARGIN, CANVAS_WIDTH - BOUNDS_MARGIN);
            node.y = (node.y + node.vy).clamp(BOUNDS_MARGIN, CANVAS_HEIGHT - BOUNDS_MARGIN);
        }
    }

    GraphLayout {
        positions: sim
            .into_iter()
            .map(|node| (node.id, Point { x: node.x, y: node.y }))
            .collect(),
        anchors,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    }
}
