//! Plan a path across a color-keyed map image.
//!
//! Loads the map, runs RRT* with retries on an inflated copy, smooths the
//! result against the raw map and writes the path file plus an SVG.
//!
//! Usage:
//!   marga_plan --map maps/level.png
//!   marga_plan --map maps/level.png --seed 7 --world --output ./run1
//!
//! Enable debug logging to follow the search:
//!   RUST_LOG=debug marga_plan --map maps/level.png

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use marga_plan::{
    MapImage, MargaConfig, PathSmoother, Result, RrtStarPlanner, SvgConfig, SvgVisualizer,
    plan_with_retries, save_path,
};

/// RRT* path planner for map images
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map image (PNG) with obstacle, start and goal colors
    #[arg(short, long)]
    map: PathBuf,

    /// Configuration file path (defaults to configs/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base seed for the first attempt
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum planning attempts
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Output directory (overrides the configured file locations)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip path smoothing
    #[arg(long)]
    no_smooth: bool,

    /// Save the path in world coordinates
    #[arg(long)]
    world: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(false) when no path was found
fn run(args: Args) -> Result<bool> {
    let mut config = match args.config {
        Some(ref path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };
    apply_overrides(&mut config, &args);
    config.validate()?;

    let scan = MapImage::load(&args.map, &config.map.colors)?;
    println!(
        "Map {}: {}x{} cells, {} blocked",
        args.map.display(),
        scan.map.width(),
        scan.map.height(),
        scan.map.blocked_count()
    );
    println!(
        "Start ({:.0}, {:.0}) -> goal ({:.0}, {:.0})",
        scan.start.x, scan.start.y, scan.goal.x, scan.goal.y
    );

    // Markers keep their raw cells so one placed beside a wall can still plan
    let planning_map = scan
        .map
        .inflated_except(config.map.inflation_radius, &[scan.start, scan.goal]);
    let planner = RrtStarPlanner::new(&planning_map, config.planner.clone());
    let outcome = plan_with_retries(&planner, &config.retry, scan.start, scan.goal);
    let result = outcome.result;

    let svg_file = output_file(&args.output, &config.output.svg_file);
    if !result.success {
        let reason = result
            .failure_reason
            .map(|r| r.to_string())
            .unwrap_or_default();
        println!("No path found after {} attempt(s): {}", outcome.attempts, reason);
        if config.output.write_svg {
            SvgVisualizer::new(&scan.map, SvgConfig::default())
                .with_title(format!("No path ({})", reason))
                .with_tree(result.tree_edges)
                .with_endpoints(scan.start, scan.goal)
                .save(&svg_file)?;
        }
        return Ok(false);
    }

    let smoothed = if config.smoothing.enabled {
        PathSmoother::new(&scan.map, config.smoothing.clone()).smooth(&result.path)
    } else {
        result.path.clone()
    };

    println!(
        "Path found on attempt {} (seed {}): {} waypoints, {} iterations, {} nodes",
        outcome.attempts,
        outcome.seed,
        smoothed.len(),
        result.iterations,
        result.nodes
    );
    println!(
        "Length: raw {:.1}, smoothed {:.1}",
        result.length(),
        smoothed.length()
    );

    let saved = if config.output.world_coordinates {
        config.map.transform.apply(&smoothed)
    } else {
        smoothed.clone()
    };
    let path_file = output_file(&args.output, &config.output.path_file);
    save_path(&saved, &path_file)?;
    println!("Saved path to {}", path_file.display());

    if config.output.write_svg {
        let mut svg = SvgVisualizer::new(&scan.map, SvgConfig::default())
            .with_title(format!(
                "RRT* seed {}: {} waypoints, length {:.1}",
                outcome.seed,
                smoothed.len(),
                smoothed.length()
            ))
            .with_tree(result.tree_edges)
            .with_path(result.path)
            .with_endpoints(scan.start, scan.goal);
        if config.smoothing.enabled {
            svg = svg.with_smoothed_path(smoothed);
        }
        svg.save(&svg_file)?;
        info!("[Cli] visualization at {}", svg_file.display());
    }

    Ok(true)
}

fn apply_overrides(config: &mut MargaConfig, args: &Args) {
    if let Some(seed) = args.seed {
        config.retry.base_seed = seed;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.retry.max_attempts = max_attempts;
    }
    if args.no_smooth {
        config.smoothing.enabled = false;
    }
    if args.world {
        config.output.world_coordinates = true;
    }
    // Tree edges are only used by the SVG
    config.planner.record_tree = config.output.write_svg;
}

/// Place a configured file under the output directory, if one was given
fn output_file(output_dir: &Option<PathBuf>, configured: &str) -> PathBuf {
    let configured = Path::new(configured);
    match output_dir {
        Some(dir) => dir.join(configured.file_name().unwrap_or(configured.as_os_str())),
        None => configured.to_path_buf(),
    }
}
