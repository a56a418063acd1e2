use canny_edges::config::load_config;
use canny_edges::diagnostics::EdgeReport;
use canny_edges::image::io::{
    load_grayscale_image, save_edge_mask, save_grayscale_f32, write_json_file, IoError,
};
use canny_edges::CannyDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    execute(Path::new(&config_path)).map_err(|e| e.to_string())
}

fn execute(config_path: &Path) -> Result<(), IoError> {
    let config = load_config(config_path)?;
    let detector = CannyDetector::new(config.canny.clone())?;

    let gray = load_grayscale_image(&config.input)?;
    let trace = detector.detect(&gray)?;
    let report = EdgeReport::from_trace(&trace, detector.params());

    save_edge_mask(&trace.edges, &config.output.edges_image)?;
    if let Some(path) = &config.output.suppressed_image {
        save_grayscale_f32(&trace.suppressed, path)?;
    }
    write_json_file(&config.output.summary_json, &report)?;

    println!(
        "Saved edge mask to {} ({} edge pixels, {:.3} ms)",
        config.output.edges_image.display(),
        report.edge_count,
        report.timings.total_ms
    );
    println!("Saved summary to {}", config.output.summary_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: canny_edges <config.json>".to_string()
}
