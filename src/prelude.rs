use thiserror::Error;

/// Error type for RustFFNN
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix or Network operation.
    #[error("dimension mismatch")]
    DimensionErr,
    /// A cell or column outside of the matrix was addressed.
    #[error("index ({row}, {col}) out of range for matrix of dimension {dim:?}")]
    IndexErr {
        row: usize,
        col: usize,
        dim: (usize, usize),
    },
    /// The network could not be built from its configuration.
    #[error("invalid configuration: {0}")]
    ConfigErr(String),
}

pub type Result<T> = std::result::Result<T, Error>;
