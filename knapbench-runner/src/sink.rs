use anyhow::{anyhow, Result};
use knapbench_challenges::knapsack::Item;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const RESULTS_HEADER: &str = "algorithm,n,capacity,value,time_ms,visited_states";
pub const ITEMS_HEADER: &str = "id,weight,value";

/// One solver invocation on one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub algorithm: String,
    pub n_items: usize,
    pub capacity: u32,
    pub value: f64,
    pub time_ms: f64,
    pub visited_states: u64,
}

pub trait ResultSink {
    fn record(&mut self, row: &ResultRow) -> Result<()>;
}

/// Keeps rows in memory.
impl ResultSink for Vec<ResultRow> {
    fn record(&mut self, row: &ResultRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }
}

pub struct CsvResultSink<W: Write> {
    writer: W,
}

impl CsvResultSink<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| anyhow!("Failed to create results file {}: {}", path.display(), e))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvResultSink<W> {
    /// Writes the header immediately.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", RESULTS_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for CsvResultSink<W> {
    fn record(&mut self, row: &ResultRow) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{:.2},{:.2},{}",
            row.algorithm, row.n_items, row.capacity, row.value, row.time_ms, row.visited_states
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn write_items<W: Write>(writer: &mut W, items: &[Item]) -> Result<()> {
    writeln!(writer, "{}", ITEMS_HEADER)?;
    for item in items {
        writeln!(writer, "{},{},{:.2}", item.id, item.weight, item.value)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_items<P: AsRef<Path>>(path: P, items: &[Item]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| anyhow!("Failed to create items file {}: {}", path.display(), e))?;
    write_items(&mut BufWriter::new(file), items)
}
