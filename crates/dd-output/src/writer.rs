//! The `OutputWriter` trait implemented by backend writers.

use crate::{DaySummaryRow, LegRow, OutputResult};

/// Trait implemented by output backends (currently CSV).
///
/// The observer never propagates these errors. The first one is
/// stored and retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of delivery legs.
    fn write_legs(&mut self, rows: &[LegRow]) -> OutputResult<()>;

    /// Write one day summary row.
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
