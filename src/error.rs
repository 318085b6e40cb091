//! Contains the Error and Result type used by the codec and decoder.

/// Various errors that can occur while decoding NBT data.
#[derive(Debug)]
pub enum Error {
    /// A primitive decode was given a byte window of the wrong size. Always a
    /// framing or programming error in the caller.
    LengthMismatch { expected: usize, actual: usize },
    /// The stream ended before a declared length or count was satisfied.
    TruncatedStream,
    /// A type byte outside the recognized tag enumeration was encountered.
    UnknownTagType(u8),
    /// Nesting exceeded the decoder's recursion limit.
    DepthExceeded(usize),
    /// Any other I/O failure from the underlying reader.
    Io(std::io::Error),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LengthMismatch { expected, actual } => f.write_fmt(format_args!(
                "expected {} bytes, got {}",
                expected, actual
            )),
            Error::TruncatedStream => f.write_str("stream ended part way through a value"),
            Error::UnknownTagType(tag) => {
                f.write_fmt(format_args!("invalid nbt tag value: {}", tag))
            }
            Error::DepthExceeded(limit) => {
                f.write_fmt(format_args!("nesting deeper than {} levels", limit))
            }
            Error::Io(e) => f.write_fmt(format_args!("io error: {}", e)),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::TruncatedStream,
            _ => Error::Io(e),
        }
    }
}
