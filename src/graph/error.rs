use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange(usize, usize),
    SelfLoop(usize),
    Asymmetric(usize, usize),
    UnknownVertex(String),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange(v, n) => {
                write!(f, "Vertex {} out of range for graph of order {}", v, n)
            }
            GraphError::SelfLoop(v) => write!(f, "Self loop at vertex {}", v),
            GraphError::Asymmetric(u, v) => write!(
                f,
                "Asymmetric adjacency: {} lists {} but not the other way around",
                u, v
            ),
            GraphError::UnknownVertex(name) => write!(f, "Unknown vertex name: {}", name),
        }
    }
}

impl Error for GraphError {}

impl From<GraphError> for io::Error {
    fn from(e: GraphError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    }
}
