use std::convert::TryFrom;
use std::path::Path;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use log::debug;

use crate::utils::error::Error;

/// Builds a Kubernetes client from the credential bundle at `path`.
///
/// # Arguments:
/// - `path` - Path to a kubeconfig file holding cluster endpoint and authentication data.
///
/// A missing or malformed kubeconfig and a config that cannot be turned into
/// a client are reported as distinct errors; both are fatal to the invocation
/// and never retried.
pub async fn client_from_kubeconfig(path: &Path) -> Result<Client, Error> {
    debug!("loading kubeconfig from {:?}", path);

    let kubeconfig =
        Kubeconfig::read_from(path).map_err(|source| Error::Config { source: source.into() })?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|source| Error::Config { source: source.into() })?;

    Client::try_from(config).map_err(|source| Error::ClientConstruction { source })
}
