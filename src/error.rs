#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the awesome-stars crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Lookup failures are classified into distinct variants so the fetcher can
//! decide per variant whether a failure is absorbed (`NotFound`), recovered by
//! switching credentials (`InvalidCredential`), or fatal (everything else).

use std::path::{Path, PathBuf};

/// Unified error type returned by the library and the CLI.
///
/// Variants never carry credential values. Instances are typically
/// constructed through the helper constructors below or by converting from
/// serde error types via the provided `From` implementation.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading the markdown document.
    #[error("failed to read markdown from {path:?}: {source}")]
    Io {
        /// Location of the markdown document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps I/O errors that occur while writing the generated report.
    #[error("failed to write report to {path:?}: {source}")]
    Output {
        /// Location of the report being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps I/O errors that occur while printing results to stdout.
    #[error("failed to write to standard output: {source}")]
    Stdout {
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps serialization errors when writing JSON output.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Returned when a repository reference cannot be normalized.
    #[error("invalid repository reference: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// The repository does not exist or is not visible.
    #[error("repository '{slug}' was not found")]
    NotFound {
        /// Slug that failed to resolve.
        slug: String
    },
    /// The API rejected the credential used for the request.
    #[error("GitHub rejected the credential: {message}")]
    InvalidCredential {
        /// Message returned by the API.
        message: String
    },
    /// The API quota is exhausted.
    #[error("GitHub rate limit exceeded: {message}")]
    RateLimited {
        /// Message returned by the API.
        message:  String,
        /// Unix timestamp (seconds) at which the quota resets, when known.
        reset_at: Option<u64>
    },
    /// Network level failures such as DNS or connection errors.
    #[error("network error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String
    },
    /// Any other non-success response.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code of the response.
        status:  u16,
        /// Message returned by the API.
        message: String
    },
    /// A successful response whose body could not be decoded.
    #[error("failed to decode metadata for '{slug}': {source}")]
    Decode {
        /// Slug whose metadata was requested.
        slug:   String,
        /// Underlying decoding error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a transport error from the provided displayable value.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Transport {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the markdown document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Output`] variant capturing the failing path and source.
pub fn output_error(path: &Path, source: std::io::Error) -> Error {
    Error::Output {
        path: path.to_path_buf(),
        source
    }
}
