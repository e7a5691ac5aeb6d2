//! Chiton cave: lowest total risk across the map and across its five-fold
//! tiling.

use anyhow::Context;
use waypath_demos::chiton::{lowest_risk, lowest_risk_tiled, parse};
use waypath_demos::{init_logging, input_from_args};

fn main() -> anyhow::Result<()> {
    init_logging();
    let input = input_from_args("chiton")?;
    let cave = parse(&input)?;

    let small = lowest_risk(&cave).context("exit unreachable")?;
    println!("part 1: {small}");
    let big = lowest_risk_tiled(&cave).context("exit unreachable in tiled cave")?;
    println!("part 2: {big}");
    Ok(())
}
