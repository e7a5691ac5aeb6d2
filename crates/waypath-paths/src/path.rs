use crate::frontier::CameFrom;
use crate::traits::Location;

/// Shape of the sequence produced by [`reconstruct_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathOptions {
    /// Read start → goal instead of goal → start.
    pub reverse: bool,
    /// Include `start` itself.
    pub add_start: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            reverse: true,
            add_start: true,
        }
    }
}

impl PathOptions {
    /// Goal → start order, start included.
    pub fn backward() -> Self {
        Self {
            reverse: false,
            ..Self::default()
        }
    }

    /// Start → goal order without `start`: one entry per step taken.
    pub fn steps() -> Self {
        Self {
            add_start: false,
            ..Self::default()
        }
    }
}

/// Walk `came_from` back from `goal` to `start`.
///
/// Returns an empty path when `goal` was never reached, or when the chain of
/// predecessors ends without passing through `start` (the map came from a
/// search rooted elsewhere).
pub fn reconstruct_path<L: Location>(
    came_from: &CameFrom<L>,
    start: &L,
    goal: &L,
    options: PathOptions,
) -> Vec<L> {
    if !came_from.contains(goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current.clone());
        match came_from.predecessor(current) {
            Some(Some(prev)) => current = prev,
            _ => {
                log::debug!("reconstruct_path: {goal:?} is not reachable from {start:?}");
                return Vec::new();
            }
        }
        if path.len() > came_from.len() {
            log::debug!("reconstruct_path: predecessor cycle while walking back from {goal:?}");
            return Vec::new();
        }
    }
    if options.add_start {
        path.push(start.clone());
    }
    if options.reverse {
        path.reverse();
    }
    path
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let o: PathOptions = serde_json::from_str(r#"{"add_start": false}"#).unwrap();
        assert_eq!(o, PathOptions::steps());
        let json = serde_json::to_string(&PathOptions::backward()).unwrap();
        let back: PathOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PathOptions::backward());
    }
}
