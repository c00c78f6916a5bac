use tracing::debug;

use super::trace::{PointerPair, Trace, TraceAlgorithm, TraceOutcome};
use crate::chain::Chain;
use crate::core::Algorithm;

/// Floyd's tortoise and hare
///
/// `slow` starts on the head and `fast` on its successor. Each step records
/// the pair, then stops if they coincide or if `fast` cannot take two more
/// hops; otherwise `slow` advances one node and `fast` two.
#[derive(Debug, Clone, Copy, Default)]
pub struct Floyd;

impl TraceAlgorithm for Floyd {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Floyd
    }

    fn trace(&self, chain: &Chain) -> Trace {
        let Some(head) = chain.head() else {
            return Trace::empty(Algorithm::Floyd);
        };

        let mut steps = Vec::new();
        let mut slow = head;
        let mut fast = chain.next(head);

        let outcome = loop {
            let pair = PointerPair::new(slow, fast);
            steps.push(pair);

            if pair.aliased() {
                break TraceOutcome::CycleFound { meeting: slow };
            }

            let Some(hop) = fast.and_then(|f| chain.next(f)) else {
                break TraceOutcome::NoCycle;
            };
            let Some(next_slow) = chain.next(slow) else {
                break TraceOutcome::NoCycle;
            };

            slow = next_slow;
            fast = chain.next(hop);
        };

        debug!(steps = steps.len(), ?outcome, "floyd trace recorded");
        Trace::new(Algorithm::Floyd, steps, outcome)
    }
}
