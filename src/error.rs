//! Error types for dump parsing and data-file generation.

/// Result type alias for parse and encode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing dumps or building data files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dump content that does not follow the expected grammar: an unexpected
    /// line inside an active metadata group, or a field block without a
    /// single `Key: Value` line.
    #[error("Malformed dump input: {0}")]
    MalformedDump(String),

    /// The requested encoding label is not known to the runtime.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Input bytes that are invalid for the declared encoding, or text that
    /// the declared target encoding cannot represent.
    #[error("Cannot transcode text as {encoding}")]
    Transcode {
        /// Canonical name of the encoding involved
        encoding: String,
    },

    /// IO error from the file-writing helpers
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
