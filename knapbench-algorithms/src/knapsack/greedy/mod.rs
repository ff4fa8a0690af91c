use anyhow::Result;
use knapbench_challenges::knapsack::*;

/// Takes items in descending value/weight order while they fit. Equal ratios
/// are taken in ascending id order.
pub fn solve_challenge(challenge: &Challenge) -> Result<SolverOutput> {
    let capacity = challenge.capacity as u64;

    let mut sorted_items: Vec<(f64, &Item)> =
        challenge.items.iter().map(|item| (item.ratio(), item)).collect();
    sorted_items.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));

    let mut solution = Solution::new(challenge.num_items());
    let mut total_value = 0.0;
    let mut total_weight = 0u64;
    let mut visited_states = 0u64;

    for &(_, item) in &sorted_items {
        visited_states += 1;
        if total_weight + item.weight as u64 <= capacity {
            solution.selected[item.id] = true;
            total_value += item.value;
            total_weight += item.weight as u64;
        }
    }

    Ok(SolverOutput {
        value: total_value,
        solution,
        visited_states,
    })
}
