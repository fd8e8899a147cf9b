use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use clap::error::ErrorKind;
use log::{error, info, warn};

use terrain_planner::{
    AStarPlanner, Coordinate, MissionConfig, TerrainClass, load_mission, load_terrain,
    save_terrain,
};

/// Plan a robot route across a PPM terrain map and write it back with the
/// route drawn in.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input terrain image (binary PPM)
    terrain_in: PathBuf,

    /// Output terrain image (binary PPM)
    terrain_out: PathBuf,

    /// Mission YAML with start, destination and max_expansions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start cell as `row,col`, overrides the mission file
    #[arg(short, long)]
    start: Option<Coordinate>,

    /// Destination cell as `row,col`, overrides the mission file
    #[arg(short, long)]
    destination: Option<Coordinate>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut mission = match &args.config {
        Some(path) => load_mission(path)?,
        None => MissionConfig::default(),
    };
    if let Some(start) = args.start {
        mission.start = start;
    }
    if let Some(destination) = args.destination {
        mission.destination = destination;
    }

    let terrain = load_terrain(&args.terrain_in)?;
    info!(
        "loaded terrain with size {} x {} ({} unknown cells)",
        terrain.width(),
        terrain.height(),
        terrain.count(TerrainClass::Unknown)
    );

    let planner = AStarPlanner::new(&terrain, mission.planner_config());
    let plan_start = Instant::now();
    let result = planner.plan(mission.start, mission.destination);
    info!(
        "planning finished in {} ms, {} nodes expanded",
        plan_start.elapsed().as_millis(),
        result.nodes_expanded
    );

    match result.failure {
        None => info!(
            "route from {} to {}: {} cells, cost {}",
            mission.start,
            mission.destination,
            result.route.len(),
            result.cost
        ),
        Some(reason) => warn!(
            "no route from {} to {}: {}",
            mission.start, mission.destination, reason
        ),
    }

    let rendered = terrain.overlay(&result.route)?;
    save_terrain(&args.terrain_out, &rendered)?;
    info!("wrote {}", args.terrain_out.display());

    Ok(())
}
