use serde::Serialize;

use crate::chain::{Chain, NodeId};

/// Shape of the cycle a trace ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleInfo {
    /// First node of the cycle when walking from the head
    pub entry: NodeId,
    /// Number of nodes on the cycle
    pub length: usize,
}

/// Derive the cycle entry and length from a node known to lie on the cycle.
///
/// Returns `None` if `meeting` is not on a cycle. Every walk is bounded by the
/// chain length.
pub fn analyze_cycle(chain: &Chain, meeting: NodeId) -> Option<CycleInfo> {
    let length = cycle_length(chain, meeting)?;

    // Lead pointer starts `length` nodes ahead; both then move together until
    // they meet on the entry.
    let mut lead = chain.head()?;
    for _ in 0..length {
        lead = chain.next(lead)?;
    }

    let mut trail = chain.head()?;
    for _ in 0..=chain.len() {
        if trail == lead {
            return Some(CycleInfo {
                entry: trail,
                length,
            });
        }
        trail = chain.next(trail)?;
        lead = chain.next(lead)?;
    }

    None
}

fn cycle_length(chain: &Chain, start: NodeId) -> Option<usize> {
    let mut current = chain.next(start)?;
    let mut length = 1;

    while current != start {
        if length > chain.len() {
            return None;
        }
        current = chain.next(current)?;
        length += 1;
    }

    Some(length)
}
