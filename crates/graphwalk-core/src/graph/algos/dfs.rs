use super::{checked_neighbors, start};
use crate::error::Result;
use crate::graph::types::{Predecessors, Strategy};
use crate::graph::{GraphProvider, VertexId};

/// Depth-first predecessor tree from `source`, using an explicit stack.
///
/// A vertex is only marked discovered when it is popped, and a popped vertex
/// that is already discovered is skipped. Every neighbor of a newly
/// discovered vertex is pushed, and any neighbor not yet discovered gets its
/// predecessor set at push time. A vertex can therefore be pushed several
/// times before its first pop, and the last push wins the predecessor slot.
///
/// The source is not pre-marked discovered; it is discovered by its own pop,
/// which always comes first, so it keeps the sentinel.
#[tracing::instrument(skip(provider), fields(size = provider.vertex_count()))]
pub fn dfs(provider: &dyn GraphProvider, source: VertexId) -> Result<Predecessors> {
    let (mut prev, mut discovered) = start(provider, source, Strategy::Dfs)?;
    let mut stack: Vec<VertexId> = vec![source];

    while let Some(current) = stack.pop() {
        if discovered[current] {
            continue;
        }
        discovered[current] = true;

        for n in checked_neighbors(provider, current)? {
            stack.push(n);
            if !discovered[n] {
                prev.set(n, current);
            }
        }
    }

    tracing::debug!(reached = discovered.iter().filter(|&&d| d).count(), "dfs complete");
    Ok(prev)
}
