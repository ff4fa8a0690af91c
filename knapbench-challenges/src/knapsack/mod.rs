use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Relative tolerance used when comparing a claimed value against the
/// recomputed sum of selected values.
pub const VALUE_TOLERANCE: f64 = 1e-6;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: usize,
    pub weight: u32,
    pub value: f64,
}

impl Item {
    pub fn ratio(&self) -> f64 {
        self.value / self.weight as f64
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Track {
    pub n_items: usize,
    pub capacity: u32,
}

/// Bounds the generator draws weights and values from. Values are drawn on a
/// grid of hundredths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ItemDistribution {
    pub min_weight: u32,
    pub max_weight: u32,
    pub min_value: f64,
    pub max_value: f64,
}

impl Default for ItemDistribution {
    fn default() -> Self {
        Self {
            min_weight: 1,
            max_weight: 100,
            min_value: 100.0,
            max_value: 1000.0,
        }
    }
}

impl ItemDistribution {
    pub fn validate(&self) -> Result<()> {
        if self.min_weight == 0 {
            return Err(anyhow!("Minimum weight must be positive"));
        }
        if self.min_weight > self.max_weight {
            return Err(anyhow!(
                "Minimum weight ({}) exceeds maximum weight ({})",
                self.min_weight,
                self.max_weight
            ));
        }
        if !(self.min_value > 0.0) || !self.max_value.is_finite() {
            return Err(anyhow!("Value range must be positive and finite"));
        }
        if self.min_value > self.max_value {
            return Err(anyhow!(
                "Minimum value ({}) exceeds maximum value ({})",
                self.min_value,
                self.max_value
            ));
        }
        let (lo, hi) = self.value_cents();
        if lo > hi {
            return Err(anyhow!(
                "Value range {}..={} contains no multiple of 0.01",
                self.min_value,
                self.max_value
            ));
        }
        Ok(())
    }

    // the slack absorbs binary rounding of decimal bounds such as 0.29
    fn value_cents(&self) -> (u64, u64) {
        let lo = ((self.min_value * 100.0 - 1e-9).ceil() as u64).max(1);
        let hi = (self.max_value * 100.0 + 1e-9).floor() as u64;
        (lo, hi)
    }
}

/// Selection vector indexed by item id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub selected: Vec<bool>,
}

impl Solution {
    pub fn new(num_items: usize) -> Self {
        Self {
            selected: vec![false; num_items],
        }
    }

    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| if s { Some(i) } else { None })
    }

    pub fn num_selected(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }
}

/// What every solver hands back to the harness.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolverOutput {
    pub value: f64,
    pub solution: Solution,
    pub visited_states: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub items: Vec<Item>,
    pub capacity: u32,
}

impl Challenge {
    /// Builds an instance from explicit items. Ids must equal positions.
    pub fn new(items: Vec<Item>, capacity: u32) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            if item.id != i {
                return Err(anyhow!("Item at position {} has id {}", i, item.id));
            }
            if item.weight == 0 {
                return Err(anyhow!("Item ({}) has zero weight", i));
            }
            if !(item.value > 0.0) || !item.value.is_finite() {
                return Err(anyhow!("Item ({}) has non-positive value {}", i, item.value));
            }
        }
        Ok(Self {
            seed: [0; 32],
            items,
            capacity,
        })
    }

    pub fn from_weights_and_values(weights: &[u32], values: &[f64], capacity: u32) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(anyhow!(
                "Got {} weights but {} values",
                weights.len(),
                values.len()
            ));
        }
        let items = weights
            .iter()
            .zip(values)
            .enumerate()
            .map(|(id, (&weight, &value))| Item { id, weight, value })
            .collect();
        Self::new(items, capacity)
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        Self::generate_instance_with(seed, track, &ItemDistribution::default())
    }

    pub fn generate_instance_with(
        seed: &[u8; 32],
        track: &Track,
        distribution: &ItemDistribution,
    ) -> Result<Self> {
        distribution.validate()?;
        let mut rng = SmallRng::from_seed(seed.clone());
        let (min_cents, max_cents) = distribution.value_cents();

        let items = (0..track.n_items)
            .map(|id| {
                let weight = rng.gen_range(distribution.min_weight..=distribution.max_weight);
                let value = rng.gen_range(min_cents..=max_cents) as f64 / 100.0;
                Item { id, weight, value }
            })
            .collect();

        Ok(Challenge {
            seed: seed.clone(),
            items,
            capacity: track.capacity,
        })
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_weight(&self, solution: &Solution) -> u64 {
        solution
            .items()
            .map(|i| self.items[i].weight as u64)
            .sum()
    }

    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<f64> {
        if solution.selected.len() != self.items.len() {
            return Err(anyhow!(
                "Selection has {} entries but instance has {} items",
                solution.selected.len(),
                self.items.len()
            ));
        }

        let total_weight = self.total_weight(solution);
        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }

        Ok(solution.items().map(|i| self.items[i].value).sum())
    }

    /// Checks the selection is feasible and that the claimed value is the sum
    /// of the selected values.
    pub fn verify_output(&self, output: &SolverOutput) -> Result<f64> {
        let total_value = self.evaluate_total_value(&output.solution)?;
        let tolerance = VALUE_TOLERANCE * total_value.abs().max(1.0);
        if (total_value - output.value).abs() > tolerance {
            return Err(anyhow!(
                "Claimed value ({}) does not match selected value ({})",
                output.value,
                total_value
            ));
        }
        Ok(total_value)
    }
}
