use collabgraph::json_output::{JsonOutput, create_json_output};
use collabgraph_core::{
    CatalogError, CollaborationGraph, ConstructionReport, SeedOutcome, SeedReport, SeedSummary,
};

fn sample_run() -> (CollaborationGraph, ConstructionReport) {
    let mut graph = CollaborationGraph::new();
    graph.add_node("Migos");
    graph.add_collaboration("Migos", "Drake");
    graph.add_collaboration("Migos", "Drake");
    graph.add_collaboration("Migos", "Cardi B");
    graph.add_node("Nobody Known");

    let report = ConstructionReport {
        seeds: vec![
            SeedReport {
                seed: "Migos".to_string(),
                outcome: SeedOutcome::Processed(SeedSummary::default()),
            },
            SeedReport {
                seed: "Nobody Known".to_string(),
                outcome: SeedOutcome::NotFound,
            },
        ],
        aborted: false,
        unprocessed: 0,
        duration_ms: 1567,
    };

    (graph, report)
}

#[test]
fn test_json_output_lists_nodes_and_edges() {
    let (graph, report) = sample_run();

    let json_output = create_json_output(&graph, &report);

    let names: Vec<&str> = json_output.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Migos", "Drake", "Cardi B", "Nobody Known"]);
    assert!(json_output.nodes[0].seed);
    assert!(!json_output.nodes[1].seed);
    assert_eq!(json_output.nodes[0].degree, 2);

    assert_eq!(json_output.edges.len(), 2);
    assert_eq!(json_output.edges[0].source, "Migos");
    assert_eq!(json_output.edges[0].target, "Drake");
    assert_eq!(json_output.edges[0].weight, 2);
}

#[test]
fn test_json_output_stats() {
    let (graph, report) = sample_run();

    let json_output = create_json_output(&graph, &report);

    assert_eq!(json_output.stats.seeds_processed, 1);
    assert_eq!(json_output.stats.seeds_not_found, vec!["Nobody Known"]);
    assert!(json_output.stats.failed_seed.is_none());
    assert!(!json_output.stats.aborted);
    assert_eq!(json_output.stats.build_time_ms, 1567);
}

#[test]
fn test_json_output_records_failed_seed() {
    let (graph, mut report) = sample_run();
    report.seeds.push(SeedReport {
        seed: "Offset".to_string(),
        outcome: SeedOutcome::Failed(CatalogError::CatalogUnavailable("down".to_string())),
    });
    report.aborted = true;

    let json_output = create_json_output(&graph, &report);

    assert_eq!(json_output.stats.failed_seed.as_deref(), Some("Offset"));
    assert!(json_output.stats.aborted);
}

#[test]
fn test_json_output_serialization() {
    let (graph, report) = sample_run();
    let json_output = create_json_output(&graph, &report);

    let json_string = serde_json::to_string(&json_output).unwrap();
    assert!(json_string.contains(r#""source":"Migos""#));
    assert!(json_string.contains(r#""weight":2"#));
    assert!(!json_string.contains("failed_seed"));

    let parsed: JsonOutput = serde_json::from_str(&json_string).unwrap();
    assert_eq!(parsed.nodes.len(), 4);
    assert_eq!(parsed.edges.len(), 2);
}
