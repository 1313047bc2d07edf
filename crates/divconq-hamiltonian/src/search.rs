use log::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::Graph;

pub const STEP_BUDGET_ENV: &str = "DIVCONQ_HAMILTONIAN_STEP_BUDGET";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    step_budget: Option<u64>,
}

impl SearchConfig {
    /// Creates a new default configuration: the search runs until it is exhausted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new default configuration and seeds it from the environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();
        if let Some(value) = lookup(STEP_BUDGET_ENV) {
            let budget = value.trim().parse::<u64>().map_err(|_| Error::InvalidConfig {
                name: STEP_BUDGET_ENV,
                value,
            })?;
            config.set_step_budget(Some(budget));
        }

        Ok(config)
    }

    /// The maximum number of path extensions the search may attempt.
    pub fn step_budget(&self) -> Option<u64> {
        self.step_budget
    }

    pub fn set_step_budget(&mut self, budget: Option<u64>) -> &mut Self {
        self.step_budget = budget;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(Vec<usize>),
    NotFound,
    BudgetExhausted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    pub outcome: Outcome,
    /// How many times a vertex was appended to the partial path.
    pub steps: u64,
}

impl Search {
    pub fn path(&self) -> Option<&[usize]> {
        match self.outcome {
            Outcome::Found(ref path) => Some(path.as_slice()),
            Outcome::NotFound | Outcome::BudgetExhausted => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<usize>> {
        match self.outcome {
            Outcome::Found(path) => Some(path),
            Outcome::NotFound | Outcome::BudgetExhausted => None,
        }
    }
}

impl Graph {
    /// Finds a path through every vertex, trying start vertices and extensions in
    /// increasing index order, so the result is the same on every call.
    pub fn find_hamiltonian_path(&self) -> Option<Vec<usize>> {
        self.search(&SearchConfig::default()).into_path()
    }

    /// Exhaustive backtracking search with an optional step budget.
    ///
    /// The partial path is grown on an explicit stack; `cursors[k]` holds the lowest
    /// vertex not yet tried as the successor of `path[k]`.
    pub fn search(&self, config: &SearchConfig) -> Search {
        let vertex_count = self.vertex_count();
        let mut steps = 0;
        if vertex_count == 0 {
            return Search {
                outcome: Outcome::NotFound,
                steps,
            };
        }

        let mut path = Vec::with_capacity(vertex_count);
        let mut cursors = Vec::with_capacity(vertex_count);
        let mut visited = vec![false; vertex_count];

        for start in 0..vertex_count {
            trace!("Starting search from vertex {start}");
            path.push(start);
            cursors.push(0);
            visited[start] = true;

            while !path.is_empty() {
                if path.len() == vertex_count {
                    debug!("Found a Hamiltonian path after {steps} steps");
                    return Search {
                        outcome: Outcome::Found(path),
                        steps,
                    };
                }

                let depth = path.len() - 1;
                let last = path[depth];
                let candidate = (cursors[depth]..vertex_count).find(|&vertex| !visited[vertex] && self.is_arc(last, vertex));

                if let Some(vertex) = candidate {
                    if config.step_budget.is_some_and(|budget| steps >= budget) {
                        debug!("Step budget exhausted after {steps} steps");
                        return Search {
                            outcome: Outcome::BudgetExhausted,
                            steps,
                        };
                    }

                    steps += 1;
                    cursors[depth] = vertex + 1;
                    path.push(vertex);
                    cursors.push(0);
                    visited[vertex] = true;
                } else {
                    cursors.pop();
                    if let Some(vertex) = path.pop() {
                        visited[vertex] = false;
                    }
                }
            }
        }

        debug!("No Hamiltonian path exists; explored {steps} steps");
        Search {
            outcome: Outcome::NotFound,
            steps,
        }
    }
}
