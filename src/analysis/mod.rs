pub mod aggregator;
pub mod pipeline;

pub use aggregator::aggregate;
pub use pipeline::{ReportPipeline, ReviewOutcome};
