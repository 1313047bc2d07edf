use crate::error::{Error, Result};

/// A graph over the vertices `0..vertex_count`.
///
/// Edges are kept both in an adjacency matrix, for constant-time lookups, and in
/// per-vertex neighbour lists in insertion order. Both always describe the same
/// edge set. Edges can be added but never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    directed: bool,
    matrix: Vec<bool>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with no edges.
    ///
    /// # Panics
    ///
    /// Panics if the adjacency matrix for `vertex_count` vertices cannot be allocated;
    /// use [`Graph::try_new`] for sizes which come from untrusted input.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        match Self::try_new(vertex_count, directed) {
            Ok(graph) => graph,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_new(vertex_count: usize, directed: bool) -> Result<Self> {
        let too_many = || Error::TooManyVertices { vertex_count };
        let cells = vertex_count.checked_mul(vertex_count).ok_or_else(too_many)?;

        let mut matrix = Vec::new();
        matrix.try_reserve_exact(cells).map_err(|_| too_many())?;
        matrix.resize(cells, false);

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(|_| too_many())?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(Graph {
            vertex_count,
            directed,
            matrix,
            adjacency,
        })
    }

    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, false)
    }

    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, true)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds the edge `u -> v`, plus `v -> u` when the graph is undirected.
    ///
    /// Adding an edge which already exists does nothing. If either endpoint is out
    /// of range an error is returned and the graph is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.vertex_count {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }

        self.insert_arc(u, v);
        if !self.directed && u != v {
            self.insert_arc(v, u);
        }

        Ok(())
    }

    fn insert_arc(&mut self, u: usize, v: usize) {
        let index = u * self.vertex_count + v;
        if !self.matrix[index] {
            self.matrix[index] = true;
            self.adjacency[u].push(v);
        }
    }

    /// Whether the path may step from `u` to `v`; `false` for vertices outside the graph.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.vertex_count && v < self.vertex_count && self.is_arc(u, v)
    }

    #[inline]
    pub(crate) fn is_arc(&self, u: usize, v: usize) -> bool {
        self.matrix[u * self.vertex_count + v]
    }

    /// Outgoing neighbours of `u` in the order their edges were added.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        match self.adjacency.get(u) {
            Some(neighbors) => neighbors,
            None => &[],
        }
    }

    /// The edges of the graph; an undirected edge is listed once, from its lower endpoint.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if self.directed || u <= v {
                    edges.push((u, v));
                }
            }
        }

        edges
    }

    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.adjacency.iter().map(Vec::len).sum()
        } else {
            self.adjacency
                .iter()
                .enumerate()
                .map(|(u, neighbors)| neighbors.iter().filter(|&&v| u <= v).count())
                .sum()
        }
    }

    /// Checks that `path` visits every vertex exactly once along existing edges.
    pub fn is_hamiltonian_path(&self, path: &[usize]) -> bool {
        if self.vertex_count == 0 || path.len() != self.vertex_count {
            return false;
        }

        let mut seen = vec![false; self.vertex_count];
        for &vertex in path {
            if vertex >= self.vertex_count || seen[vertex] {
                return false;
            }
            seen[vertex] = true;
        }

        path.windows(2).all(|pair| self.is_arc(pair[0], pair[1]))
    }
}
