use serde::Serialize;

use crate::chain::{Chain, IndexTable, NodeId};
use crate::core::Algorithm;

/// Positions of the two pointers at one step
///
/// The slow pointer always trails the fast one through non-null nodes, so
/// only the fast side can be null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointerPair {
    pub slow: NodeId,
    pub fast: Option<NodeId>,
}

impl PointerPair {
    pub fn new(slow: NodeId, fast: Option<NodeId>) -> Self {
        Self { slow, fast }
    }

    /// Whether both pointers reference the same node
    pub fn aliased(&self) -> bool {
        self.fast == Some(self.slow)
    }
}

/// How a trace ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceOutcome {
    /// The chain is empty; nothing was recorded
    Empty,
    /// The fast pointer (or its successor) reached null
    NoCycle,
    /// Both pointers met on `meeting`
    CycleFound { meeting: NodeId },
}

/// Every pointer pair an algorithm visited, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    steps: Vec<PointerPair>,
    outcome: TraceOutcome,
}

impl Trace {
    pub(crate) fn new(algorithm: Algorithm, steps: Vec<PointerPair>, outcome: TraceOutcome) -> Self {
        Self {
            algorithm,
            steps,
            outcome,
        }
    }

    pub(crate) fn empty(algorithm: Algorithm) -> Self {
        Self::new(algorithm, Vec::new(), TraceOutcome::Empty)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn steps(&self) -> &[PointerPair] {
        &self.steps
    }

    pub fn get(&self, step: usize) -> Option<&PointerPair> {
        self.steps.get(step)
    }

    pub fn last(&self) -> Option<&PointerPair> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn outcome(&self) -> TraceOutcome {
        self.outcome
    }

    pub fn found_cycle(&self) -> bool {
        matches!(self.outcome, TraceOutcome::CycleFound { .. })
    }

    /// Resolve every step to list positions
    pub fn resolve(&self, table: &IndexTable) -> Vec<ResolvedStep> {
        self.steps
            .iter()
            .enumerate()
            .map(|(step, pair)| ResolvedStep {
                step,
                slow_index: table.index_of(pair.slow),
                fast_index: table.resolve(pair.fast),
            })
            .collect()
    }
}

/// A step expressed as list positions rather than node handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedStep {
    pub step: usize,
    pub slow_index: Option<usize>,
    pub fast_index: Option<usize>,
}

/// A cycle detection algorithm that records every step it takes
pub trait TraceAlgorithm {
    fn algorithm(&self) -> Algorithm;

    /// Run the detection over `chain` and record each pointer pair
    fn trace(&self, chain: &Chain) -> Trace;
}
