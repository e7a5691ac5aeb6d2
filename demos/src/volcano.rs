//! Valve network: open valves within a time budget to release the most
//! pressure.
//!
//! Only valves with a positive flow rate are worth visiting, so the tunnel
//! graph is collapsed into a [`DistanceTable`] between those valves and the
//! entrance, and the candidate orders come from [`tours`].

use rustc_hash::FxHashMap;
use waypath_paths::{DistanceTable, SimpleGraph, Stop, tours};

use crate::error::ParseError;

/// Valve everyone starts at.
pub const ENTRANCE: &str = "AA";

/// Most valves with a positive flow rate; [`pair`] keys valve sets by a
/// `u64` bitmask.
pub const MAX_USEFUL: usize = u64::BITS as usize;

/// Tunnel network and the flow rate of every valve.
#[derive(Debug, Clone)]
pub struct Volcano {
    tunnels: SimpleGraph<String>,
    flow: FxHashMap<String, u32>,
}

impl Volcano {
    /// Parse lines of the form
    /// `Valve BB has flow rate=13; tunnels lead to valves CC, AA`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut tunnels = SimpleGraph::new();
        let mut flow = FxHashMap::default();
        for (i, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let bad = || ParseError::BadLine {
                line: i + 1,
                text: line.to_string(),
            };
            let rest = line.strip_prefix("Valve ").ok_or_else(bad)?;
            let (name, rest) = rest.split_once(" has flow rate=").ok_or_else(bad)?;
            let (rate, rest) = rest.split_once(';').ok_or_else(bad)?;
            let targets = ["valves ", "valve "]
                .iter()
                .find_map(|marker| rest.split_once(marker).map(|(_, t)| t))
                .ok_or_else(bad)?;

            flow.insert(name.to_string(), rate.parse::<u32>()?);
            tunnels.add_node(name.to_string());
            for target in targets.split(", ") {
                tunnels.add_edge(name.to_string(), target.trim().to_string());
            }
        }
        if !flow.contains_key(ENTRANCE) {
            return Err(ParseError::MissingValve(ENTRANCE.to_string()));
        }
        let found = flow.values().filter(|&&f| f > 0).count();
        if found > MAX_USEFUL {
            return Err(ParseError::TooManyValves {
                found,
                max: MAX_USEFUL,
            });
        }
        log::debug!("parsed {} valves", flow.len());
        Ok(Self { tunnels, flow })
    }

    /// The tunnel graph, one node per valve.
    pub fn tunnels(&self) -> &SimpleGraph<String> {
        &self.tunnels
    }

    /// Flow rate of `valve`, 0 for unknown valves.
    pub fn flow(&self, valve: &str) -> u32 {
        self.flow.get(valve).copied().unwrap_or(0)
    }

    /// Valves with a positive flow rate, sorted by name.
    pub fn useful(&self) -> Vec<String> {
        let mut v: Vec<String> = self
            .flow
            .iter()
            .filter(|&(_, &f)| f > 0)
            .map(|(name, _)| name.clone())
            .collect();
        v.sort();
        v
    }

    /// Steps between the entrance and every useful valve.
    pub fn distances(&self) -> DistanceTable<String> {
        let mut nodes = self.useful();
        nodes.push(ENTRANCE.to_string());
        DistanceTable::from_bfs(&self.tunnels, nodes)
    }

    /// Pressure released by a tour: each valve vents for the time left after
    /// it was opened.
    pub fn released(&self, tour: &[Stop<String>]) -> u32 {
        tour.iter()
            .map(|(valve, left)| self.flow(valve) * left)
            .sum()
    }
}

/// Most pressure one worker can release in `minutes`.
pub fn solo(volcano: &Volcano, minutes: u32) -> u32 {
    let table = volcano.distances();
    tours(&table, ENTRANCE.to_string(), volcano.useful(), minutes)
        .map(|tour| volcano.released(&tour))
        .max()
        .unwrap_or(0)
}

/// Most pressure two workers can release in `minutes` when they never open
/// the same valve.
pub fn pair(volcano: &Volcano, minutes: u32) -> u32 {
    let table = volcano.distances();
    let useful = volcano.useful();
    // Parsing caps `useful` at MAX_USEFUL, so every shift is in range.
    let bit: FxHashMap<&str, u64> = useful
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), 1u64 << i))
        .collect();

    let mut best: FxHashMap<u64, u32> = FxHashMap::default();
    for tour in tours(&table, ENTRANCE.to_string(), useful.iter().cloned(), minutes) {
        let mask = tour.iter().fold(0, |m, (v, _)| m | bit[v.as_str()]);
        let score = volcano.released(&tour);
        let slot = best.entry(mask).or_default();
        *slot = (*slot).max(score);
    }
    log::debug!("{} distinct valve sets", best.len());

    let mut ranked: Vec<(u64, u32)> = best.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let mut answer = 0;
    for (i, &(mask_a, a)) in ranked.iter().enumerate() {
        if 2 * a < answer {
            break;
        }
        for &(mask_b, b) in &ranked[i..] {
            if a + b <= answer {
                break;
            }
            if mask_a & mask_b == 0 {
                answer = a + b;
            }
        }
    }
    answer
}
