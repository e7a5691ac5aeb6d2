//! Valve network: most pressure released alone in 30 minutes and with a
//! helper in 26.

use waypath_demos::volcano::{Volcano, pair, solo};
use waypath_demos::{init_logging, input_from_args};

fn main() -> anyhow::Result<()> {
    init_logging();
    let input = input_from_args("volcano")?;
    let volcano = Volcano::parse(&input)?;
    log::info!("{} useful valves", volcano.useful().len());

    println!("part 1: {}", solo(&volcano, 30));
    println!("part 2: {}", pair(&volcano, 26));
    Ok(())
}
