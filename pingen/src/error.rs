// Licensed under the Apache-2.0 license

use thiserror::Error;

/// Errors that can occur while scanning a pin table or rendering it.
#[derive(Error, Debug)]
pub enum PingenError {
    /// The `sercom_pads[]` array could not be delimited, or a field in it
    /// does not fit the record shape.
    #[error("malformed source: {reason}")]
    MalformedSource { reason: String },

    /// A record line appeared before any `CONFIG_MACH_*` conditional.
    #[error("line {line}: pin record outside of any chip family conditional")]
    NoActiveVariant { line: usize },

    /// A `CONFIG_MACH_*` conditional named a family missing from the
    /// family table. Only raised by a strict scan.
    #[error("line {line}: unknown chip family `{family}`")]
    UnknownFamily { family: String, line: usize },

    /// The requested output mode is neither Kconfig nor C.
    #[error("unrecognized mode `{0}` (expected one of k, K, kconfig, Kconfig, c, C)")]
    InvalidMode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid pingen config: {0}")]
    Config(#[from] toml::de::Error),
}

impl PingenError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PingenError::MalformedSource {
            reason: reason.into(),
        }
    }
}

/// Result type for pin table operations
pub type PingenResult<T> = std::result::Result<T, PingenError>;
