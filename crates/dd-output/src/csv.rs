//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `delivery_legs.csv`
//! - `day_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, LegRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    legs:      Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut legs = Writer::from_path(dir.join("delivery_legs.csv"))?;
        legs.write_record([
            "day", "robot_id", "task", "from_node", "to_node", "quantity", "distance", "reachable", "path",
        ])?;

        let mut summaries = Writer::from_path(dir.join("day_summaries.csv"))?;
        summaries.write_record(["day", "tasks", "legs", "packages", "distance", "unreachable"])?;

        Ok(Self {
            legs,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_legs(&mut self, rows: &[LegRow]) -> OutputResult<()> {
        for row in rows {
            self.legs.write_record(&[
                row.day.to_string(),
                row.robot_id.to_string(),
                row.task.to_string(),
                row.from_node.to_string(),
                row.to_node.to_string(),
                row.quantity.to_string(),
                format!("{:.6}", row.distance),
                (row.reachable as u8).to_string(),
                row.path.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.day.to_string(),
            row.tasks.to_string(),
            row.legs.to_string(),
            row.packages.to_string(),
            format!("{:.6}", row.distance),
            row.unreachable.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.legs.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
