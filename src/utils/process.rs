use std::path::Path;
use std::process::Command;

use log::debug;

use crate::utils::error::Error;

/// Runs the external authenticator at `program` with no arguments and
/// captures its standard output in full.
///
/// # Arguments:
/// - `program` - Path to the executable to invoke. The production entry point
/// passes the fixed helper path; tests substitute a stub.
///
/// The captured output is returned only for a clean exit. A launch failure or
/// a non-zero exit status yields an error carrying the diagnostic instead, so
/// no partial output ever escapes.
pub fn run_authenticator(program: &Path) -> Result<Vec<u8>, Error> {
    debug!("running authenticator {:?}", program);

    let output = Command::new(program)
        .output()
        .map_err(|source| Error::ProcessLaunch {
            program: program.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::ProcessFailed {
            program: program.display().to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output.stdout)
}
