//! Console route printer, optionally teeing into CSV output.

use dd_core::{Order, RobotId};
use dd_dispatch::DeliveryLeg;
use dd_output::{CsvWriter, OutputError, SimOutputObserver};
use dd_sim::{DaySummary, RunSummary, SimObserver};

pub struct RoutePrinter {
    csv: Option<SimOutputObserver<CsvWriter>>,
}

impl RoutePrinter {
    pub fn new(csv: Option<SimOutputObserver<CsvWriter>>) -> Self {
        Self { csv }
    }

    pub fn take_output_error(&mut self) -> Option<OutputError> {
        self.csv.as_mut()?.take_error()
    }
}

impl SimObserver for RoutePrinter {
    fn on_day_start(&mut self, day: u64, orders: &[Order]) {
        println!("=== Day {day} ===");
        let counts: Vec<String> = orders.iter().skip(1).map(|o| o.quantity.to_string()).collect();
        println!("Orders: {}", counts.join(" "));
        if let Some(csv) = &mut self.csv {
            csv.on_day_start(day, orders);
        }
    }

    fn on_task_start(&mut self, day: u64, robot: RobotId, task: usize) {
        println!("-- Robot {robot}, task {} --", task + 1);
        if let Some(csv) = &mut self.csv {
            csv.on_task_start(day, robot, task);
        }
    }

    fn on_leg(&mut self, day: u64, task: usize, leg: &DeliveryLeg) {
        println!("{leg}");
        if let Some(csv) = &mut self.csv {
            csv.on_leg(day, task, leg);
        }
    }

    fn on_day_end(&mut self, summary: &DaySummary) {
        if summary.tasks == 0 {
            println!("No deliveries today.");
        }
        println!();
        if let Some(csv) = &mut self.csv {
            csv.on_day_end(summary);
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(summary);
        }
    }
}
