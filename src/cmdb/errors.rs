/// Errors from the CMDB document layer.
use std::io;

use thiserror::Error;

/// Errors that can occur while loading or querying a CMDB document.
///
/// The load-failure exit codes are a public contract relied on by calling
/// scripts: 100 format, 101 file access, 102 syntax, 103 anchor. Each error
/// renders as a single stderr line carrying the file path and the underlying
/// cause.
#[derive(Debug, Error)]
pub enum CmdbError {
    /// The input file could not be opened or read.
    #[error("Bad file {path}: {source}")]
    FileAccess {
        /// Path to the input document.
        path: String,
        /// Underlying I/O cause.
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed YAML.
    #[error("Broken yaml {path}: {source}")]
    Syntax {
        /// Path to the input document.
        path: String,
        /// Underlying parser cause.
        #[source]
        source: serde_yaml::Error,
    },

    /// An alias in the input refers to an anchor that was never defined.
    #[error("Broken anchor {path}: {source}")]
    Alias {
        /// Path to the input document.
        path: String,
        /// Underlying parser cause.
        #[source]
        source: serde_yaml::Error,
    },

    /// A parser failure outside the syntax/anchor classification, such as
    /// multi-document input.
    #[error("Bad format {path}: {source}")]
    Format {
        /// Path to the input document.
        path: String,
        /// Underlying parser cause.
        #[source]
        source: serde_yaml::Error,
    },

    /// The document has no top-level `mapping` key to strip in the
    /// all-applications view. Every stack document is expected to carry one.
    #[error("No 'mapping' key in {path}")]
    MissingMapping {
        /// Path to the input document.
        path: String,
    },

    /// The derived structure could not be serialized for output.
    #[error("Bad format {path}: {source}")]
    Render {
        /// Path to the input document.
        path: String,
        /// Underlying serializer cause.
        #[source]
        source: serde_json::Error,
    },
}

impl CmdbError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Format { .. } | Self::Render { .. } => 100,
            Self::FileAccess { .. } => 101,
            Self::Syntax { .. } => 102,
            Self::Alias { .. } => 103,
            Self::MissingMapping { .. } => 1,
        }
    }
}
