//! CLI command implementations.

pub mod convert;
pub mod inspect;

use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use syncgraph_codec::{
    from_cbor, from_json_slice, to_cbor, to_json_pretty, to_json_string, CodecError, SyncData,
};
use thiserror::Error;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a payload file failed.
    #[error("{path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A payload could not be parsed or encoded.
    #[error("{path}: {source}")]
    Codec {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: CodecError,
    },
}

/// Transit encodings the CLI reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// JSON text.
    Json,
    /// CBOR bytes.
    Cbor,
}

/// Reads and parses a payload file.
pub fn read_payload(path: &Path, encoding: Encoding) -> Result<SyncData, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = match encoding {
        Encoding::Json => from_json_slice(&bytes),
        Encoding::Cbor => from_cbor(&bytes),
    };
    parsed.map_err(|source| CliError::Codec {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes and writes a payload file. Returns the number of bytes written.
pub fn write_payload(
    path: &Path,
    data: &SyncData,
    encoding: Encoding,
    pretty: bool,
) -> Result<usize, CliError> {
    let encoded = match encoding {
        Encoding::Json if pretty => to_json_pretty(data).map(String::into_bytes),
        Encoding::Json => to_json_string(data).map(String::into_bytes),
        Encoding::Cbor => to_cbor(data),
    }
    .map_err(|source| CliError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, &encoded).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encoded.len())
}
