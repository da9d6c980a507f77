use crate::app::CollabGraphApp;
use crate::colors::ColorScheme;
use crate::utils::format_number;
use collabgraph_core::{CollaborationGraph, ConstructionReport, Edge, SeedOutcome};

pub fn display_run_info(app: &CollabGraphApp, colors: &ColorScheme) {
    println!(
        "🎵 Building collaboration graph from {} seed artists",
        colors.number(&format_number(app.seeds.len()))
    );
    println!(
        "⚡ Admitting collaborators with popularity >= {} in {} genres",
        colors.number(&app.inclusion.min_popularity.to_string()),
        colors.number(&format_number(app.inclusion.genres.len()))
    );
    println!("🔍 Scanning \"{}\" releases...", app.spotify.include_groups);
}

pub fn display_graph_summary(
    graph: &CollaborationGraph,
    report: &ConstructionReport,
    top: usize,
    colors: &ColorScheme,
) {
    println!(
        "{} Built graph with {} artists and {} collaborations",
        colors.success("✅"),
        colors.number(&format_number(graph.node_count())),
        colors.number(&format_number(graph.edge_count()))
    );

    let heaviest = graph.heaviest_edges(top);
    if !heaviest.is_empty() {
        println!();
        for (rank, edge) in heaviest.iter().enumerate() {
            println!("{}", format_edge_line(rank, edge, colors));
        }
    }

    display_seed_problems(report, colors);
    display_statistics(graph, report, colors);
}

pub fn format_edge_line(rank: usize, edge: &Edge, colors: &ColorScheme) -> String {
    let position = format!("{}.", rank + 1);
    let plural = if edge.weight == 1 { "" } else { "s" };

    format!(
        "{:3} {} ↔ {} {}",
        colors.rank(&position),
        colors.artist_name(&format!("\"{}\"", edge.source)),
        colors.artist_name(&format!("\"{}\"", edge.target)),
        colors.weight(&format!("[{} track{}]", edge.weight, plural))
    )
}

fn display_seed_problems(report: &ConstructionReport, colors: &ColorScheme) {
    let skipped: Vec<&str> = report.skipped_seeds().collect();
    if !skipped.is_empty() {
        println!();
        println!(
            "{} Not found in catalog: {}",
            colors.warning("⚠️ "),
            skipped
                .iter()
                .map(|seed| colors.artist_name(&format!("\"{}\"", seed)).to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if let Some(failed) = report.failure() {
        if let SeedOutcome::Failed(reason) = &failed.outcome {
            println!();
            println!(
                "{} Stopped at {}: {} ({} seeds left unprocessed)",
                colors.error("❌"),
                colors.artist_name(&format!("\"{}\"", failed.seed)),
                reason,
                report.unprocessed
            );
        }
    }
}

fn display_statistics(graph: &CollaborationGraph, report: &ConstructionReport, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Processed {} seeds ({} co-credits) in {} sec",
        colors.heading("📊"),
        colors.number(&format_number(report.processed_count())),
        colors.number(&graph.total_weight().to_string()),
        colors.number(&format!("{:.3}", report.duration_ms as f64 / 1000.0))
    );
}
