use k8s_openapi::api::apps::v1::Deployment;
use kube::api::PostParams;
use kube::{Api, Client};
use log::debug;

use crate::models::workload::WorkloadTemplate;
use crate::utils::error::Error;
use crate::utils::names::generate_workload_name;

pub struct Deployer {
    client: Client,
    template: WorkloadTemplate,
}

impl Deployer {
    /// Constructs a new instance of Deployer.
    ///
    /// # Arguments:
    /// - `client` - A Kubernetes client to create the deployment with.
    /// - `template` - The fixed workload shape to deploy.
    pub fn new(client: Client, template: WorkloadTemplate) -> Self {
        Deployer { client, template }
    }

    /// Creates a deployment with a freshly generated name in the template's
    /// namespace and returns the name the control plane accepted.
    ///
    /// Each call creates a new, independent resource; names are never reused,
    /// so the call is deliberately not idempotent. A rejection or a transport
    /// failure ends the invocation, there is no retry tier.
    pub async fn create_deployment(&self) -> Result<String, Error> {
        debug!("Deployer create_deployment");

        let name = generate_workload_name();
        let deployment = self.template.to_deployment(&name);

        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.template.namespace);
        let created = api
            .create(&PostParams::default(), &deployment)
            .await
            .map_err(|source| Error::Submission { source })?;

        // The control plane's response is authoritative for what was persisted.
        Ok(created.metadata.name.unwrap_or(name))
    }
}
