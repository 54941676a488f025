//! Convert command implementation.

use super::{read_payload, write_payload, CliError, Encoding};
use std::path::Path;
use tracing::{debug, info};

/// Runs the convert command.
pub fn run(
    input: &Path,
    output: &Path,
    from: Encoding,
    to: Encoding,
    pretty: bool,
) -> Result<(), CliError> {
    let data = read_payload(input, from)?;
    debug!(entries = data.len(), ?from, "read payload");

    let written = write_payload(output, &data, to, pretty)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = written,
        "converted payload"
    );
    Ok(())
}
