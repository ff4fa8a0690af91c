use anyhow::{anyhow, Result};
use knapbench_algorithms::knapsack::brute_force;
use knapbench_challenges::knapsack::ItemDistribution;
use serde::{Deserialize, Serialize};
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

pub const DEFAULT_EXPORT_ITEMS: usize = 1000;

/// Which generated instance gets written out as a sample dataset. The export
/// happens at the first configured capacity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemsExport {
    pub n_items: usize,
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub item_counts: Vec<usize>,
    pub capacities: Vec<u32>,
    pub seed: Option<String>,
    pub dp_max_items: usize,
    pub exhaustive_max_items: usize,
    pub distribution: ItemDistribution,
    pub items_export: Option<ItemsExport>,
    pub results_path: PathBuf,
    pub verify_solutions: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            item_counts: vec![
                10, 20, 30, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10000, 20000,
                40000, 80000, 160000, 320000,
            ],
            capacities: vec![10000, 100000, 1000000],
            seed: None,
            dp_max_items: 10000,
            exhaustive_max_items: 30,
            distribution: ItemDistribution::default(),
            items_export: Some(ItemsExport {
                n_items: DEFAULT_EXPORT_ITEMS,
                path: PathBuf::from("items.csv"),
            }),
            results_path: PathBuf::from("final_results.csv"),
            verify_solutions: true,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.item_counts.is_empty() {
            return Err(anyhow!("At least one item count is required"));
        }
        if self.capacities.is_empty() {
            return Err(anyhow!("At least one capacity is required"));
        }
        if self.exhaustive_max_items > brute_force::MAX_ITEMS {
            return Err(anyhow!(
                "Exhaustive solvers support at most {} items, got {}",
                brute_force::MAX_ITEMS,
                self.exhaustive_max_items
            ));
        }
        self.distribution.validate()
    }

    /// Dynamic programming only runs at this capacity.
    pub fn dp_capacity(&self) -> Option<u32> {
        self.capacities.iter().min().copied()
    }

    /// The configured seed, or one derived from the clock. Callers should log
    /// the result so a run can be reproduced.
    pub fn resolve_seed(&self) -> String {
        match &self.seed {
            Some(seed) => seed.clone(),
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos().to_string())
                .unwrap_or_default(),
        }
    }
}
