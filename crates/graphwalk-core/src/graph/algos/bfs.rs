use std::collections::VecDeque;

use super::{checked_neighbors, start};
use crate::error::Result;
use crate::graph::types::{Predecessors, Strategy};
use crate::graph::{GraphProvider, VertexId};

/// Breadth-first predecessor tree from `source`.
///
/// The source is marked discovered before the loop. Each neighbor is marked
/// discovered, given its predecessor and enqueued the first time it is seen,
/// so the first vertex to reach it (in queue order, ascending neighbors within
/// a pop) wins and later edges into it are ignored. The result is a
/// shortest-hop tree.
#[tracing::instrument(skip(provider), fields(size = provider.vertex_count()))]
pub fn bfs(provider: &dyn GraphProvider, source: VertexId) -> Result<Predecessors> {
    let (mut prev, mut discovered) = start(provider, source, Strategy::Bfs)?;
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    discovered[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for n in checked_neighbors(provider, current)? {
            if !discovered[n] {
                discovered[n] = true;
                prev.set(n, current);
                queue.push_back(n);
            }
        }
    }

    tracing::debug!(reached = discovered.iter().filter(|&&d| d).count(), "bfs complete");
    Ok(prev)
}
