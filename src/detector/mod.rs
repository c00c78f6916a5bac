//! # Cycle Detection Module
//!
//! This module implements the two-pointer cycle detection algorithms as pure
//! functions from a [`Chain`](crate::chain::Chain) to a [`Trace`]: the ordered
//! list of every pointer pair the algorithm visited.
//!
//! ## Algorithms
//!
//! - **Floyd**: `slow` advances one node and `fast` two per step. Terminates
//!   within `n` steps on a list of `n` nodes.
//! - **Brent**: the hare advances one node per step; the tortoise teleports to
//!   the hare at every power-of-two boundary. Fewer pointer moves overall.
//!
//! Both algorithms record the pair *before* testing it, so the first entry is
//! always the starting position and the last entry is the terminal one. An
//! empty chain produces an empty trace.
//!
//! ## Example
//!
//! ```
//! use cycle_stepper::chain::build_chain;
//! use cycle_stepper::detector::{Brent, Floyd, TraceAlgorithm, analyze_cycle};
//!
//! let chain = build_chain(&[3, 2, 0, -4], Some(1));
//! let table = chain.index_table();
//!
//! let floyd = Floyd.trace(&chain);
//! let brent = Brent.trace(&chain);
//! assert!(floyd.found_cycle() && brent.found_cycle());
//!
//! // Floyd's pointers meet on index 2; the cycle itself starts at index 1
//! let meeting = floyd.last().unwrap().slow;
//! assert_eq!(table.index_of(meeting), Some(2));
//! let info = analyze_cycle(&chain, meeting).unwrap();
//! assert_eq!(table.index_of(info.entry), Some(1));
//! assert_eq!(info.length, 3);
//! ```

mod analysis;
mod brent;
mod floyd;
mod trace;

pub use analysis::{CycleInfo, analyze_cycle};
pub use brent::Brent;
pub use floyd::Floyd;
pub use trace::{PointerPair, ResolvedStep, Trace, TraceAlgorithm, TraceOutcome};

use crate::chain::Chain;
use crate::core::Algorithm;

impl Algorithm {
    /// Run this algorithm over `chain`
    pub fn trace(self, chain: &Chain) -> Trace {
        match self {
            Algorithm::Floyd => Floyd.trace(chain),
            Algorithm::Brent => Brent.trace(chain),
        }
    }
}

impl Trace {
    /// Cycle entry and length, when the trace found a cycle
    pub fn cycle_info(&self, chain: &Chain) -> Option<CycleInfo> {
        match self.outcome() {
            TraceOutcome::CycleFound { meeting } => analyze_cycle(chain, meeting),
            TraceOutcome::NoCycle | TraceOutcome::Empty => None,
        }
    }
}
