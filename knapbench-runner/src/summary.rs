use crate::ResultRow;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: String,
    pub runs: usize,
    pub total_ms: f64,
    pub max_ms: f64,
    pub largest_n: usize,
}

impl AlgorithmSummary {
    pub fn mean_ms(&self) -> f64 {
        if self.runs == 0 {
            f64::NAN
        } else {
            self.total_ms / self.runs as f64
        }
    }
}

/// Groups rows per algorithm, in order of first appearance.
pub fn summarize(rows: &[ResultRow]) -> Vec<AlgorithmSummary> {
    let mut summaries: Vec<AlgorithmSummary> = Vec::new();
    for row in rows {
        let idx = match summaries.iter().position(|s| s.algorithm == row.algorithm) {
            Some(idx) => idx,
            None => {
                summaries.push(AlgorithmSummary {
                    algorithm: row.algorithm.clone(),
                    runs: 0,
                    total_ms: 0.0,
                    max_ms: 0.0,
                    largest_n: 0,
                });
                summaries.len() - 1
            }
        };
        let summary = &mut summaries[idx];
        summary.runs += 1;
        summary.total_ms += row.time_ms;
        summary.max_ms = summary.max_ms.max(row.time_ms);
        summary.largest_n = summary.largest_n.max(row.n_items);
    }
    summaries
}

pub fn format_summary(summaries: &[AlgorithmSummary]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<20} {:>6} {:>12} {:>10} {:>10} {:>10}",
        "algorithm", "runs", "total_ms", "mean_ms", "max_ms", "largest_n"
    )
    .unwrap();
    writeln!(out, "{}", "─".repeat(73)).unwrap();
    for s in summaries {
        writeln!(
            out,
            "{:<20} {:>6} {:>12.2} {:>10.2} {:>10.2} {:>10}",
            s.algorithm,
            s.runs,
            s.total_ms,
            s.mean_ms(),
            s.max_ms,
            s.largest_n
        )
        .unwrap();
    }
    out
}
