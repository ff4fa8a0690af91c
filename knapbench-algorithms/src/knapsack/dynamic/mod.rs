use anyhow::Result;
use knapbench_challenges::knapsack::*;

/// Best value per capacity `0..=capacity`, plus one traceback row per item
/// recording where that item improved the table during its pass.
///
/// Memory is `O(num_items * capacity)`; callers are expected to bound both.
pub struct DpTable {
    capacity: usize,
    values: Vec<f64>,
    track_selection: Vec<bool>,
    rows: usize,
    visited_states: u64,
}

impl DpTable {
    pub fn new(num_items: usize, capacity: u32) -> Self {
        let capacity = capacity as usize;
        Self {
            capacity,
            values: vec![0.0; capacity + 1],
            track_selection: vec![false; num_items * (capacity + 1)],
            rows: 0,
            visited_states: 0,
        }
    }

    /// Applies the 0/1 recurrence for the next item, walking capacities from
    /// high to low so the item is counted at most once.
    pub fn insert(&mut self, item: &Item) {
        let row = self.rows * (self.capacity + 1);
        if self.track_selection.len() < row + self.capacity + 1 {
            self.track_selection.resize(row + self.capacity + 1, false);
        }
        let weight = item.weight as usize;
        if weight <= self.capacity {
            for j in (weight..=self.capacity).rev() {
                self.visited_states += 1;
                let option = self.values[j - weight] + item.value;
                if option > self.values[j] {
                    self.values[j] = option;
                    self.track_selection[row + j] = true;
                }
            }
        }
        self.rows += 1;
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn best_value(&self) -> f64 {
        self.values[self.capacity]
    }

    pub fn visited_states(&self) -> u64 {
        self.visited_states
    }

    /// Walks the inserted items last to first, consuming capacity for every
    /// item marked at the current residual capacity.
    pub fn traceback(&self, items: &[Item]) -> Solution {
        let mut solution = Solution::new(items.len());
        let mut remaining = self.capacity;
        for i in (0..self.rows.min(items.len())).rev() {
            if self.track_selection[i * (self.capacity + 1) + remaining] {
                solution.selected[items[i].id] = true;
                remaining -= items[i].weight as usize;
            }
        }
        solution
    }
}

pub fn solve_challenge(challenge: &Challenge) -> Result<SolverOutput> {
    let mut table = DpTable::new(challenge.num_items(), challenge.capacity);
    for item in &challenge.items {
        table.insert(item);
    }

    Ok(SolverOutput {
        value: table.best_value(),
        solution: table.traceback(&challenge.items),
        visited_states: table.visited_states(),
    })
}
