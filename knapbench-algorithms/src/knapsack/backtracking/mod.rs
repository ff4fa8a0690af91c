use anyhow::Result;
use knapbench_challenges::knapsack::*;

struct Search<'a> {
    items: &'a [Item],
    capacity: u64,
    best_value: f64,
    best_selection: Vec<bool>,
    visited_states: u64,
}

impl<'a> Search<'a> {
    /// Depth-first over include/exclude decisions. `current` is the single
    /// in-progress selection; every include is undone before returning.
    fn explore(&mut self, idx: usize, current: &mut [bool], value: f64, weight: u64) {
        self.visited_states += 1;

        // A full knapsack cannot take anything else on this path.
        if idx == self.items.len() || weight == self.capacity {
            if value > self.best_value {
                self.best_value = value;
                self.best_selection.copy_from_slice(current);
            }
            return;
        }

        self.explore(idx + 1, current, value, weight);

        let item = self.items[idx];
        if weight + item.weight as u64 <= self.capacity {
            current[item.id] = true;
            self.explore(idx + 1, current, value + item.value, weight + item.weight as u64);
            current[item.id] = false;
        }
    }
}

pub fn solve_challenge(challenge: &Challenge) -> Result<SolverOutput> {
    let num_items = challenge.num_items();
    let mut search = Search {
        items: &challenge.items,
        capacity: challenge.capacity as u64,
        best_value: 0.0,
        best_selection: vec![false; num_items],
        visited_states: 0,
    };

    let mut current = vec![false; num_items];
    search.explore(0, &mut current, 0.0, 0);

    Ok(SolverOutput {
        value: search.best_value,
        solution: Solution {
            selected: search.best_selection,
        },
        visited_states: search.visited_states,
    })
}
