use tracing::{debug, warn};

use super::types::{Chain, Node, NodeId};
use crate::core::ListInput;

/// Builds a [`Chain`] from a value sequence, optionally linking the tail back
/// to an earlier node
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    cycle_at: Option<usize>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self { cycle_at: None }
    }

    /// Link the last node back to the node at `index` instead of null
    pub fn with_cycle_at(mut self, index: Option<usize>) -> Self {
        self.cycle_at = index;
        self
    }

    pub fn build(&self, values: &[i64]) -> Chain {
        if values.is_empty() {
            return Chain::default();
        }

        let mut nodes: Vec<Node> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Node {
                value,
                next: (i + 1 < values.len()).then_some(NodeId(i + 1)),
            })
            .collect();

        let tail_next = match self.cycle_at {
            Some(index) if index < values.len() => Some(NodeId(index)),
            Some(index) => {
                warn!(
                    index,
                    len = values.len(),
                    "cycle index out of range, building an acyclic chain"
                );
                None
            }
            None => None,
        };

        if let Some(tail) = nodes.last_mut() {
            tail.next = tail_next;
        }

        debug!(len = values.len(), cycle_at = ?tail_next.map(NodeId::handle), "built chain");

        Chain::from_parts(nodes, Some(NodeId(0)))
    }
}

/// Build a chain from `values`, closing a cycle at `cycle` when given
pub fn build_chain(values: &[i64], cycle: Option<usize>) -> Chain {
    ChainBuilder::new().with_cycle_at(cycle).build(values)
}

impl From<&ListInput> for Chain {
    fn from(input: &ListInput) -> Self {
        build_chain(input.values(), input.cycle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(chain: &Chain, steps: usize) -> Vec<i64> {
        let mut out = Vec::new();
        let mut current = chain.head();
        for _ in 0..steps {
            let Some(id) = current else { break };
            out.push(chain.value(id).unwrap());
            current = chain.next(id);
        }
        out
    }

    #[test]
    fn test_empty_values_have_no_head() {
        let chain = build_chain(&[], None);

        assert!(chain.is_empty());
        assert_eq!(chain.head(), None);
    }

    #[test]
    fn test_acyclic_chain_ends_in_null() {
        let chain = build_chain(&[1, 2, 3], None);

        assert_eq!(walk(&chain, 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_cycle_links_tail_to_index() {
        let chain = build_chain(&[3, 2, 0, -4], Some(1));

        assert_eq!(walk(&chain, 7), vec![3, 2, 0, -4, 2, 0, -4]);
    }

    #[test]
    fn test_cycle_at_head() {
        let chain = build_chain(&[9], Some(0));
        let head = chain.head().unwrap();

        assert_eq!(chain.next(head), Some(head));
    }

    #[test]
    fn test_out_of_range_cycle_builds_acyclic_chain() {
        let chain = ChainBuilder::new().with_cycle_at(Some(5)).build(&[1, 2]);

        assert_eq!(walk(&chain, 10), vec![1, 2]);
    }

    #[test]
    fn test_from_list_input() {
        let input = ListInput::new(vec![4, 5], 0).unwrap();
        let chain = Chain::from(&input);

        assert_eq!(walk(&chain, 4), vec![4, 5, 4, 5]);
    }
}
