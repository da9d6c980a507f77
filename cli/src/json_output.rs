use collabgraph_core::{CollaborationGraph, ConstructionReport};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Graph hand-off for external renderers.
#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub nodes: Vec<JsonNode>,
    pub edges: Vec<JsonEdge>,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonNode {
    pub name: String,
    pub seed: bool,
    pub degree: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub seeds_processed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub seeds_not_found: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_seed: Option<String>,
    pub aborted: bool,
    pub build_time_ms: u64,
}

pub fn create_json_output(graph: &CollaborationGraph, report: &ConstructionReport) -> JsonOutput {
    let seeds: FxHashSet<&str> = report.seeds.iter().map(|r| r.seed.as_str()).collect();

    let nodes = graph
        .nodes()
        .map(|name| JsonNode {
            name: name.to_string(),
            seed: seeds.contains(name),
            degree: graph.degree(name),
        })
        .collect();

    let edges = graph
        .edges()
        .map(|edge| JsonEdge {
            source: edge.source.to_string(),
            target: edge.target.to_string(),
            weight: edge.weight,
        })
        .collect();

    JsonOutput {
        nodes,
        edges,
        stats: JsonStats {
            seeds_processed: report.processed_count(),
            seeds_not_found: report.skipped_seeds().map(str::to_string).collect(),
            failed_seed: report.failure().map(|failed| failed.seed.clone()),
            aborted: report.aborted,
            build_time_ms: report.duration_ms,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
