use crate::BenchmarkConfig;
use knapbench_algorithms::knapsack::{backtracking, brute_force, dynamic, greedy, SolveFn};
use knapbench_challenges::knapsack::Track;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Greedy,
    DynamicProgramming,
    Backtracking,
    BruteForce,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::DynamicProgramming => "dynamic_programming",
            Algorithm::Backtracking => "backtracking",
            Algorithm::BruteForce => "brute_force",
        }
    }

    pub fn solve_fn(&self) -> SolveFn {
        match self {
            Algorithm::Greedy => greedy::solve_challenge,
            Algorithm::DynamicProgramming => dynamic::solve_challenge,
            Algorithm::Backtracking => backtracking::solve_challenge,
            Algorithm::BruteForce => brute_force::solve_challenge,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decides whether a solver is worth running on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    MaxItems(usize),
    MaxItemsAtCapacity { max_items: usize, capacity: u32 },
    Never,
}

impl Gate {
    pub fn admits(&self, track: &Track) -> bool {
        match *self {
            Gate::Always => true,
            Gate::MaxItems(max_items) => track.n_items <= max_items,
            Gate::MaxItemsAtCapacity {
                max_items,
                capacity,
            } => track.n_items <= max_items && track.capacity == capacity,
            Gate::Never => false,
        }
    }
}

/// Ordered table of solvers and the cells they run on. Rows come out in
/// table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<(Algorithm, Gate)>,
}

impl Schedule {
    pub fn new(entries: Vec<(Algorithm, Gate)>) -> Self {
        Self { entries }
    }

    pub fn from_config(config: &BenchmarkConfig) -> Self {
        let dp_gate = match config.dp_capacity() {
            Some(capacity) => Gate::MaxItemsAtCapacity {
                max_items: config.dp_max_items,
                capacity,
            },
            None => Gate::Never,
        };
        let exhaustive_gate = Gate::MaxItems(config.exhaustive_max_items);
        Self::new(vec![
            (Algorithm::Greedy, Gate::Always),
            (Algorithm::DynamicProgramming, dp_gate),
            (Algorithm::Backtracking, exhaustive_gate),
            (Algorithm::BruteForce, exhaustive_gate),
        ])
    }

    pub fn applicable<'a>(&'a self, track: &'a Track) -> impl Iterator<Item = Algorithm> + 'a {
        self.entries
            .iter()
            .filter(move |(_, gate)| gate.admits(track))
            .map(|&(algorithm, _)| algorithm)
    }
}
