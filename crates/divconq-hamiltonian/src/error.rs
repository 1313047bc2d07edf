use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge endpoint does not name a vertex of the graph
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    /// The adjacency matrix for this many vertices cannot be allocated
    TooManyVertices { vertex_count: usize },
    /// A configuration value could not be used
    InvalidConfig { name: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::VertexOutOfRange { vertex, vertex_count } => {
                write!(f, "vertex {vertex} is out of range for a graph with {vertex_count} vertices")
            }
            Error::TooManyVertices { vertex_count } => write!(f, "a graph with {vertex_count} vertices is too large"),
            Error::InvalidConfig { name, value } => write!(f, "invalid value for {name}: '{value}'"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
