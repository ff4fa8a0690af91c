use anyhow::{anyhow, Result};
use knapbench_challenges::knapsack::*;

/// Largest item count whose subsets fit in the enumeration counter.
pub const MAX_ITEMS: usize = 63;

/// Enumerates every subset, reading bit `i` of the counter as "item `i` is
/// taken". The first subset (lowest counter) reaching the best value wins.
pub fn solve_challenge(challenge: &Challenge) -> Result<SolverOutput> {
    let num_items = challenge.num_items();
    if num_items > MAX_ITEMS {
        return Err(anyhow!(
            "Brute force supports at most {} items, got {}",
            MAX_ITEMS,
            num_items
        ));
    }
    let capacity = challenge.capacity as u64;

    let mut best_value = 0.0;
    let mut best_subset = 0u64;
    let mut visited_states = 0u64;

    for subset in 0..(1u64 << num_items) {
        visited_states += 1;
        let mut total_value = 0.0;
        let mut total_weight = 0u64;
        for (i, item) in challenge.items.iter().enumerate() {
            if (subset >> i) & 1 == 1 {
                total_value += item.value;
                total_weight += item.weight as u64;
            }
        }

        if total_weight <= capacity && total_value > best_value {
            best_value = total_value;
            best_subset = subset;
        }
    }

    let solution = Solution {
        selected: (0..num_items).map(|i| (best_subset >> i) & 1 == 1).collect(),
    };

    Ok(SolverOutput {
        value: best_value,
        solution,
        visited_states,
    })
}
