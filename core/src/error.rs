use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtenderError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("unsupported hash: {0}")]
    UnsupportedHash(String),
}

/// Caller-side argument violations. Always raised before any hashing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("dst is {0} bytes long, at most 255 allowed")]
    DstTooLong(usize),

    #[error("expansion needs {0} blocks, at most 65535 allowed")]
    TooManyBlocks(usize),

    #[error("value {value} does not fit in {width} bytes")]
    IntegerTooWide { value: usize, width: usize },
}
