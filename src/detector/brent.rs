use tracing::debug;

use super::trace::{PointerPair, Trace, TraceAlgorithm, TraceOutcome};
use crate::chain::Chain;
use crate::core::Algorithm;

/// Brent's algorithm
///
/// The hare moves one node per step. Whenever the steps taken in the current
/// phase reach the phase length (a power of two), the tortoise teleports to
/// the hare and the phase length doubles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brent;

impl TraceAlgorithm for Brent {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Brent
    }

    fn trace(&self, chain: &Chain) -> Trace {
        let Some(head) = chain.head() else {
            return Trace::empty(Algorithm::Brent);
        };

        let mut steps = Vec::new();
        let mut power: usize = 1;
        let mut lambda: usize = 1;
        let mut tortoise = head;
        let mut hare = chain.next(head);

        let outcome = loop {
            let pair = PointerPair::new(tortoise, hare);
            steps.push(pair);

            if pair.aliased() {
                break TraceOutcome::CycleFound { meeting: tortoise };
            }

            let Some(current) = hare else {
                break TraceOutcome::NoCycle;
            };

            if power == lambda {
                tortoise = current;
                power *= 2;
                lambda = 0;
            }

            hare = chain.next(current);
            lambda += 1;
        };

        debug!(steps = steps.len(), ?outcome, "brent trace recorded");
        Trace::new(Algorithm::Brent, steps, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::build_chain;

    fn indices(values: &[i64], cycle: Option<usize>) -> Vec<(Option<usize>, Option<usize>)> {
        let chain = build_chain(values, cycle);
        let table = chain.index_table();
        Brent
            .trace(&chain)
            .resolve(&table)
            .into_iter()
            .map(|s| (s.slow_index, s.fast_index))
            .collect()
    }

    #[test]
    fn test_sample_list_teleports_tortoise() {
        assert_eq!(
            indices(&[3, 2, 0, -4], Some(1)),
            vec![
                (Some(0), Some(1)),
                (Some(1), Some(2)),
                (Some(1), Some(3)),
                (Some(3), Some(1)),
                (Some(3), Some(2)),
                (Some(3), Some(3)),
            ]
        );
    }

    #[test]
    fn test_acyclic_list_walks_hare_to_null() {
        assert_eq!(
            indices(&[1, 2, 3], None),
            vec![(Some(0), Some(1)), (Some(1), Some(2)), (Some(1), Some(3))]
        );
    }

    #[test]
    fn test_single_node_without_cycle() {
        assert_eq!(indices(&[1], None), vec![(Some(0), Some(1))]);
    }

    #[test]
    fn test_two_node_loop() {
        let chain = build_chain(&[1, 2], Some(0));
        let trace = Brent.trace(&chain);

        assert!(trace.found_cycle());
        assert!(trace.last().unwrap().aliased());
    }

    #[test]
    fn test_empty_chain_has_empty_trace() {
        let trace = Brent.trace(&build_chain(&[], None));

        assert!(trace.is_empty());
        assert_eq!(trace.outcome(), TraceOutcome::Empty);
    }
}
