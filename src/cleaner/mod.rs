pub mod plan;
pub mod report;
pub mod runner;
pub mod selection;

pub use plan::{plan, DeletionPlan, PlannedItem, PlannedKind};
pub use report::{DeletionReport, Outcome, ReportEntry, COMPLETION_MARKER};
pub use runner::{run, run_with_progress};
pub use selection::Selection;
