//! Heightmap climbing: fewest steps to the summit, from `S` and from any
//! lowest cell.

use waypath_demos::hill::{Hill, best_trailhead, climb};
use waypath_demos::{init_logging, input_from_args};

fn main() -> anyhow::Result<()> {
    init_logging();
    let input = input_from_args("hill")?;
    let hill = Hill::parse(&input)?;

    match climb(&hill) {
        Some((steps, path)) => {
            log::debug!("route:\n{}", hill.draw(&path));
            println!("part 1: {steps}");
        }
        None => println!("part 1: summit unreachable"),
    }
    match best_trailhead(&hill) {
        Some(steps) => println!("part 2: {steps}"),
        None => println!("part 2: summit unreachable"),
    }
    Ok(())
}
