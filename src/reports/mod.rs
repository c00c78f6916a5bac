//! Report generation for recorded traces
//!
//! - human: styled console output
//! - json: JSON for programmatic use
//!
//! A [`TraceReport`] resolves every recorded pointer pair to list positions
//! once, so generators only format data and never walk the chain.

pub mod human;
pub mod json;

use serde::Serialize;
use tracing::debug;

use crate::chain::Chain;
use crate::core::{Algorithm, ListInput, PointerLabels};
use crate::detector::{ResolvedStep, Trace, TraceOutcome};
use crate::error::CycleStepperError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report for a single trace
    fn generate_report(&self, report: &TraceReport) -> Result<String, CycleStepperError>;

    /// Generate a side-by-side report of both algorithms
    fn generate_comparison(&self, report: &CompareReport) -> Result<String, CycleStepperError>;
}

/// How a trace ended, expressed as list positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportOutcome {
    Empty,
    NoCycle,
    CycleFound {
        meeting_index: usize,
        entry_index: usize,
        cycle_length: usize,
    },
}

/// A trace with every step resolved against its list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceReport {
    pub algorithm: Algorithm,
    pub labels: PointerLabels,
    pub values: Vec<i64>,
    /// Index the tail links back to, if any
    pub cycle_index: Option<usize>,
    /// Index a null fast pointer resolves to
    pub past_the_end: usize,
    pub steps: Vec<ResolvedStep>,
    pub outcome: ReportOutcome,
}

impl TraceReport {
    /// Build the chain for `input`, run `algorithm` over it and resolve the trace
    pub fn new(input: &ListInput, algorithm: Algorithm) -> Self {
        let chain = Chain::from(input);
        let trace = algorithm.trace(&chain);
        Self::from_trace(input, &chain, &trace)
    }

    pub fn from_trace(input: &ListInput, chain: &Chain, trace: &Trace) -> Self {
        let table = chain.index_table();

        let outcome = match (trace.outcome(), trace.cycle_info(chain)) {
            (TraceOutcome::Empty, _) => ReportOutcome::Empty,
            (TraceOutcome::CycleFound { meeting }, Some(info)) => {
                match (table.index_of(meeting), table.index_of(info.entry)) {
                    (Some(meeting_index), Some(entry_index)) => ReportOutcome::CycleFound {
                        meeting_index,
                        entry_index,
                        cycle_length: info.length,
                    },
                    _ => ReportOutcome::NoCycle,
                }
            }
            _ => ReportOutcome::NoCycle,
        };

        debug!(
            algorithm = %trace.algorithm(),
            steps = trace.len(),
            ?outcome,
            "resolved trace report"
        );

        Self {
            algorithm: trace.algorithm(),
            labels: trace.algorithm().pointer_labels(),
            values: input.values().to_vec(),
            cycle_index: input.cycle(),
            past_the_end: table.past_the_end(),
            steps: trace.resolve(&table),
            outcome,
        }
    }

    pub fn has_cycle(&self) -> bool {
        matches!(self.outcome, ReportOutcome::CycleFound { .. })
    }

    pub fn meeting_index(&self) -> Option<usize> {
        match self.outcome {
            ReportOutcome::CycleFound { meeting_index, .. } => Some(meeting_index),
            _ => None,
        }
    }

    /// Value stored at `index`, or `None` for the null slot
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }
}

/// Floyd and Brent run over the same list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    pub values: Vec<i64>,
    pub cycle_index: Option<usize>,
    pub floyd: TraceReport,
    pub brent: TraceReport,
    /// Both algorithms reached the same verdict on cycle presence
    pub agree: bool,
}

impl CompareReport {
    pub fn new(input: &ListInput) -> Self {
        let floyd = TraceReport::new(input, Algorithm::Floyd);
        let brent = TraceReport::new(input, Algorithm::Brent);
        let agree = floyd.has_cycle() == brent.has_cycle();

        Self {
            values: input.values().to_vec(),
            cycle_index: input.cycle(),
            floyd,
            brent,
            agree,
        }
    }

    pub fn reports(&self) -> [&TraceReport; 2] {
        [&self.floyd, &self.brent]
    }
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
