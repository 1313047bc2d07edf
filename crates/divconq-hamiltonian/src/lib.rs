//! Hamiltonian path search by exhaustive backtracking.
//!
//! ```
//! use divconq_hamiltonian::Graph;
//!
//! let mut graph = Graph::undirected(3);
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! assert_eq!(graph.find_hamiltonian_path(), Some(vec![0, 1, 2]));
//! ```

mod error;
mod graph;
mod search;

pub use crate::error::{Error, Result};
pub use crate::graph::Graph;
pub use crate::search::{Outcome, Search, SearchConfig, STEP_BUDGET_ENV};
