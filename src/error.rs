use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
