//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use dd_dispatch::DeliveryLeg;
use dd_sim::{DaySummary, RunSummary, SimObserver};

use crate::row::{DaySummaryRow, LegRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes delivery legs and day summaries to any
/// [`OutputWriter`] backend.
///
/// Legs are buffered per day and written when the day ends.  Errors from the
/// writer are stored internally because `SimObserver` methods have no return
/// value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<LegRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_leg(&mut self, day: u64, task: usize, leg: &DeliveryLeg) {
        self.pending.push(LegRow {
            day,
            robot_id:  leg.robot.0,
            task,
            from_node: leg.from().0,
            to_node:   leg.order.node.0,
            quantity:  leg.order.quantity,
            distance:  leg.route.distance,
            reachable: leg.reachable(),
            path:      leg
                .route
                .path
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        });
    }

    fn on_day_end(&mut self, summary: &DaySummary) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_legs(&rows);
            self.store_err(result);
        }
        let row = DaySummaryRow {
            day:         summary.day,
            tasks:       summary.tasks as u64,
            legs:        summary.legs as u64,
            packages:    summary.packages,
            distance:    summary.distance,
            unreachable: summary.unreachable as u64,
        };
        let result = self.writer.write_day_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
