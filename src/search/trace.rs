//! Parent-pointer path reconstruction

use crate::graph::NodeId;
use std::collections::HashMap;

/// Walk parent links from `target` back to `source` and reverse into
/// source -> target order
///
/// Callers only invoke this after the target was actually reached, so
/// every node on the walk except `source` has a parent entry. A cycle
/// in the parent table means a strategy bug (the closed-set discipline
/// forbids it), so it panics rather than returning a mangled route.
pub(crate) fn reconstruct(
    parents: &HashMap<NodeId, NodeId>,
    source: &NodeId,
    target: &NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target.clone()];
    let mut current = target.clone();

    while current != *source {
        assert!(
            path.len() <= parents.len() + 1,
            "cycle while walking parent links from {target}"
        );
        match parents.get(&current) {
            Some(parent) => {
                current = parent.clone();
                path.push(current.clone());
            }
            None => panic!("broken parent chain at {current}"),
        }
    }

    path.reverse();
    path
}
