pub mod backtracking;
pub mod brute_force;
pub mod dynamic;
pub mod greedy;

use anyhow::Result;
use knapbench_challenges::knapsack::{Challenge, SolverOutput};

/// Signature shared by every solver in this module.
pub type SolveFn = fn(&Challenge) -> Result<SolverOutput>;
