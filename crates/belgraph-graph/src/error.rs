use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A set operation received a right-hand side that is not a graph.
    #[error("second element is not a graph")]
    TypeMismatch,

    /// A non-empty record batch was required.
    #[error("no relationship records given")]
    EmptyInput,
}
