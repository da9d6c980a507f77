use clap::Parser;
use collabgraph::colors::ColorScheme;
use collabgraph::display::{display_graph_summary, display_run_info};
use collabgraph::json_output::{create_json_output, print_json_output};
use collabgraph::{Args, CollabGraphApp};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "collabgraph=warn,collabgraph_core=warn";

fn main() {
    // A missing .env file is fine; the token may come from the environment
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing();

    let colors = ColorScheme::new(!args.no_color);

    let app = match CollabGraphApp::new(&args) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
            std::process::exit(1);
        }
    };

    let show_progress = !args.quiet && !args.json;
    if show_progress {
        display_run_info(&app, &colors);
    }

    let progress = create_progress_bar(app.seeds.len() as u64, show_progress);
    let result = app.run(|_, seed_report| {
        progress.set_message(seed_report.seed.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let (graph, report) = match result {
        Ok(built) => built,
        Err(error) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
            std::process::exit(1);
        }
    };

    if args.json {
        print_json_output(&create_json_output(&graph, &report));
    } else {
        if show_progress {
            println!("\n---\n");
        }
        display_graph_summary(&graph, &report, args.top, &colors);
    }

    if report.aborted {
        std::process::exit(2);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create_progress_bar(seed_count: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(seed_count);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
    {
        progress.set_style(style.progress_chars("#>-"));
    }
    progress
}
