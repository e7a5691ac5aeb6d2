//! Lava droplet: total and exterior surface area.

use waypath_demos::lava::{exterior_area, parse, surface_area};
use waypath_demos::{init_logging, input_from_args};

fn main() -> anyhow::Result<()> {
    init_logging();
    let input = input_from_args("lava")?;
    let cubes = parse(&input)?;
    log::info!("{} cubes", cubes.len());

    println!("part 1: {}", surface_area(&cubes));
    println!("part 2: {}", exterior_area(&cubes));
    Ok(())
}
