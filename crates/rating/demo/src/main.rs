#![deny(unsafe_code)]
//! Rating gate demo.
//!
//! Builds the built-in catalog, creates a handful of viewers and runs them
//! through the access gate, then prints catalog statistics and exercises
//! the legacy string entry point.
//!
//! Usage: `rating-demo [CONFIG.json]`. Log level follows `RUST_LOG`.

use anyhow::Context;
use rating_catalog::ContentCatalog;
use rating_gate::{AccessGate, GateConfig};
use rating_types::{Classification, Viewer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn section(title: &str) {
    println!();
    println!("=== {} ===", title);
    println!();
}

fn check(gate: &AccessGate, viewer: &Viewer, title: &str) {
    println!(
        "Viewer: {} (age {}, ceiling: {})",
        viewer.name(),
        viewer.age(),
        viewer.ceiling().label()
    );
    println!("Title:  {}", title);
    match gate.decide_by_title(viewer, title) {
        Ok(verdict) => println!("Result: {}", verdict.reason()),
        Err(e) => println!("Error:  {}", e),
    }
    println!();
}

fn load_config() -> anyhow::Result<GateConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading gate config {}", path))?;
            Ok(GateConfig::from_json(&raw)?)
        }
        None => Ok(GateConfig::default()),
    }
}

fn run_demo() -> anyhow::Result<()> {
    let config = load_config()?;
    let catalog = Arc::new(ContentCatalog::with_seed_titles()?);
    let gate = AccessGate::new(catalog.clone()).with_config(config);

    let child = Viewer::with_default_ceiling("Alice", 8)?;
    let teenager = Viewer::with_default_ceiling("Bob", 15)?;
    let adult = Viewer::new("Charlie", 25, Classification::Eighteen)?;
    let restricted_adult = Viewer::new("Diana", 30, Classification::Pg)?;

    section("Access Checks");
    check(&gate, &child, "Baby's Day Out");
    check(&gate, &child, "The Matrix");
    check(&gate, &teenager, "Inception");
    check(&gate, &teenager, "Deadpool");
    check(&gate, &adult, "The Dark Knight");
    check(&gate, &restricted_adult, "Finding Nemo");
    check(&gate, &restricted_adult, "The Matrix");

    section("Unknown Titles");
    check(&gate, &child, "NonExistentMovie");

    section("Catalog Statistics");
    for (classification, count) in catalog.count_by_classification() {
        println!("{}: {} titles", classification.label(), count);
    }

    section("Legacy Check");
    println!(
        "Legacy result: {}",
        gate.legacy_check("Baby's Day Out", "PG")
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting rating gate demo");

    if let Err(e) = run_demo() {
        eprintln!("Demo failed: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("Rating gate demo completed");
}
