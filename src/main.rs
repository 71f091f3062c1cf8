use std::env;
use tracing::{error, info};
use world_bbox::{report, scene::Scene};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();
    let [_, scene_path] = args.as_slice() else {
        let program = args.first().map(String::as_str).unwrap_or("world-bbox");
        error!("Usage: {} <scene>.json", program);
        std::process::exit(1);
    };

    let scene = Scene::load(scene_path).map_err(|e| {
        error!("Failed to load scene: {}", e);
        e
    })?;
    let object = scene.active()?;
    info!("Computing world bounding box of {}", object.name);

    let bbox = object.world_bbox()?;
    println!("{}", report::render(&bbox));
    Ok(())
}
