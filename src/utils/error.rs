/// Utility enum that covers all possible errors across both entry points.
/// Library code only ever returns these; deciding how to terminate the
/// process is left to the binaries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The kubeconfig credential bundle is missing, unreadable or malformed.
    #[error("Failed to load kubeconfig: {source}")]
    Config { source: kube::Error },

    /// A client could not be built from an otherwise well-formed config,
    /// typically a malformed cluster endpoint.
    #[error("Failed to construct Kubernetes client: {source}")]
    ClientConstruction { source: kube::Error },

    /// The control plane rejected the create call or could not be reached.
    #[error("Kubernetes reported error: {source}")]
    Submission { source: kube::Error },

    /// The external authenticator could not be launched at all.
    #[error("Failed to run {program}: {source}")]
    ProcessLaunch {
        program: String,
        source: std::io::Error,
    },

    /// The external authenticator ran but exited unsuccessfully.
    #[error("{program} failed ({status}): {stderr}")]
    ProcessFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;
    use kube::error::ErrorResponse;

    #[test]
    fn submission_error_surfaces_control_plane_diagnostic() {
        let source = kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "deployments.apps is forbidden: quota exceeded".to_string(),
            reason: "Forbidden".to_string(),
            code: 403,
        });

        let error = Error::Submission { source };
        let rendered = format!("{}", error);

        assert!(rendered.contains("deployments.apps is forbidden: quota exceeded"));
    }
}
