use std::io::Write;
use std::path::Path;

use workload_deployer::utils::error::Error;
use workload_deployer::utils::process::run_authenticator;

/// Path to the authentication helper, relative to the invocation directory.
const AUTHENTICATOR_PATH: &str = "./bin/aws-iam-authenticator";

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let token = run_authenticator(Path::new(AUTHENTICATOR_PATH))?;

    // Relay the helper's output verbatim, bytes and all.
    std::io::stdout().write_all(&token)?;

    Ok(())
}
