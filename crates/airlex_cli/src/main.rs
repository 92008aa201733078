//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `airlex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use airlex_core::{corpus, graph};

fn main() {
    println!("airlex_core ping={}", airlex_core::ping());
    println!("airlex_core version={}", airlex_core::core_version());
    println!(
        "corpus categories={} articles={} edges={}",
        corpus::categories().len(),
        corpus::all_articles().len(),
        graph::related_edges().len()
    );
}
