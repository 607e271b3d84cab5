use crate::bail_out_of_range;
use crate::error::{GraphError, Result, VertexRole};

/// Zero-based vertex index.
pub type VertexId = usize;

/// Fixed-size, unweighted graph: a 0/1 adjacency matrix plus one display
/// label per vertex.
///
/// The adjacency relation is stored row-major in a flat `Vec<bool>`;
/// `adjacency[from * size + to]` is true iff there is an edge `from -> to`.
/// Symmetry is not enforced; an undirected graph simply sets both cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    adjacency: Vec<bool>,
    labels: Vec<String>,
}

impl Graph {
    /// Build a graph from per-vertex labels and adjacency rows.
    ///
    /// Fails if the graph is empty, if the number of rows differs from the
    /// number of labels, or if any row is not exactly `labels.len()` wide.
    pub fn new(labels: Vec<String>, rows: Vec<Vec<bool>>) -> Result<Self> {
        let size = labels.len();
        if size == 0 {
            return Err(GraphError::invalid_graph("graph must have at least one vertex"));
        }
        if rows.len() != size {
            return Err(GraphError::invalid_graph(format!(
                "expected {} adjacency rows, found {}",
                size,
                rows.len()
            )));
        }

        let mut adjacency = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::invalid_graph(format!(
                    "adjacency row {} has {} entries, expected {}",
                    index,
                    row.len(),
                    size
                )));
            }
            adjacency.extend(row);
        }

        Ok(Self {
            size,
            adjacency,
            labels,
        })
    }

    /// Build an undirected graph from labels and an edge list.
    ///
    /// Each `(a, b)` pair sets both `a -> b` and `b -> a`.
    pub fn from_undirected_edges<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let size = labels.len();
        let mut rows = vec![vec![false; size]; size];
        for &(a, b) in edges {
            if a >= size {
                bail_out_of_range!(VertexRole::Vertex, a, size);
            }
            if b >= size {
                bail_out_of_range!(VertexRole::Vertex, b, size);
            }
            rows[a][b] = true;
            rows[b][a] = true;
        }
        Self::new(labels, rows)
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reject `vertex` unless it lies in `[0, size)`.
    pub fn check_vertex(&self, role: VertexRole, vertex: VertexId) -> Result<()> {
        if vertex >= self.size {
            bail_out_of_range!(role, vertex, self.size);
        }
        Ok(())
    }

    /// Every `n` with an edge `vertex -> n`, in ascending index order.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        let row = self.row(vertex)?;
        Ok(row
            .iter()
            .enumerate()
            .filter_map(|(n, &edge)| edge.then_some(n))
            .collect())
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.check_vertex(VertexRole::Neighbor, to)?;
        Ok(self.row(from)?[to])
    }

    /// Display label for `vertex`.
    pub fn label(&self, vertex: VertexId) -> Result<&str> {
        self.check_vertex(VertexRole::Vertex, vertex)?;
        Ok(&self.labels[vertex])
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of edges. A symmetric graph counts each undirected edge once;
    /// otherwise every directed arc counts.
    pub fn edge_count(&self) -> usize {
        let arcs = self.adjacency.iter().filter(|&&edge| edge).count();
        if !self.is_symmetric() {
            return arcs;
        }
        let loops = (0..self.size)
            .filter(|&v| self.adjacency[v * self.size + v])
            .count();
        (arcs + loops) / 2
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size)
                .all(|j| self.adjacency[i * self.size + j] == self.adjacency[j * self.size + i])
        })
    }

    fn row(&self, vertex: VertexId) -> Result<&[bool]> {
        self.check_vertex(VertexRole::Vertex, vertex)?;
        let start = vertex * self.size;
        Ok(&self.adjacency[start..start + self.size])
    }
}
