//! Error types for n-gram sequence construction and access

use thiserror::Error;

/// Errors raised by n-gram sequences and the decoding layer beneath them
#[derive(Error, Debug)]
pub enum NgramError {
    /// Window size below one
    #[error("invalid window size {window_size}: must be at least 1")]
    InvalidArgument {
        /// The rejected window size
        window_size: usize,
    },

    /// Offset outside `[0, length)`
    #[error("the offset '{offset}' doesn't exist on a sequence of length {length}")]
    OutOfRange {
        /// The requested offset
        offset: usize,
        /// Number of windows in the sequence
        length: usize,
    },

    /// Attempted write to an n-gram sequence
    #[error("n-gram sequence is immutable")]
    Immutable,

    /// Encoding label not recognised
    #[error("unsupported encoding: {label}")]
    UnsupportedEncoding {
        /// The label as given by the caller
        label: String,
    },

    /// Input bytes are not valid in the declared encoding
    #[error("malformed {encoding} input at byte {position}")]
    MalformedInput {
        /// Canonical name of the encoding
        encoding: &'static str,
        /// Byte offset of the first malformed sequence
        position: usize,
    },

    /// Text holds characters the target encoding cannot represent
    #[error("text cannot be represented in {encoding}")]
    Unencodable {
        /// Canonical name of the encoding
        encoding: &'static str,
    },

    /// Process-wide default encoding set more than once
    #[error("default encoding has already been configured")]
    DefaultAlreadyConfigured,

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NgramError {
    /// Whether this error reports an offset outside the sequence
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, NgramError::OutOfRange { .. })
    }

    /// Whether this error reports a write attempt
    pub fn is_immutable(&self) -> bool {
        matches!(self, NgramError::Immutable)
    }
}

/// Result type for n-gram operations
pub type Result<T> = std::result::Result<T, NgramError>;
