use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;

/// The fixed shape of the workload this service deploys. Everything except
/// the per-invocation name is a constant of the deployment, held here as
/// explicit values so the build path stays testable by substitution.
pub struct WorkloadTemplate {
    // namespace the deployment is created in
    pub namespace: String,

    // number of pod replicas the deployment maintains
    pub replicas: i32,

    // value of the "app" label binding the selector to the pod template
    pub app: String,

    // the single container the pods run
    pub container_name: String,
    pub image: String,

    // the container port the pods expose
    pub port_name: String,
    pub container_port: i32,
}

impl Default for WorkloadTemplate {
    fn default() -> Self {
        WorkloadTemplate {
            namespace: "default".to_string(),
            replicas: 2,
            app: "demo".to_string(),
            container_name: "web".to_string(),
            image: "nginx:1.12".to_string(),
            port_name: "http".to_string(),
            container_port: 80,
        }
    }
}

impl WorkloadTemplate {
    /// Builds the complete Deployment specification for `name`.
    ///
    /// Pure construction with no failure mode. The selector match labels and
    /// the pod template labels are cloned from the same map, so the selector
    /// can never disagree with the pods it is meant to match.
    pub fn to_deployment(&self, name: &str) -> Deployment {
        let labels: BTreeMap<String, String> = [("app".to_string(), self.app.clone())]
            .iter()
            .cloned()
            .collect();

        Deployment {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(self.replicas),
                selector: LabelSelector {
                    match_labels: Some(labels.clone()),
                    ..LabelSelector::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(labels),
                        ..ObjectMeta::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![Container {
                            name: self.container_name.clone(),
                            image: Some(self.image.clone()),
                            ports: Some(vec![ContainerPort {
                                name: Some(self.port_name.clone()),
                                protocol: Some("TCP".to_string()),
                                container_port: self.container_port,
                                ..ContainerPort::default()
                            }]),
                            ..Container::default()
                        }],
                        ..PodSpec::default()
                    }),
                },
                ..DeploymentSpec::default()
            }),
            ..Deployment::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::workload::WorkloadTemplate;

    #[test]
    fn builds_the_fixed_shape() {
        let deployment = WorkloadTemplate::default().to_deployment("test-workload");
        let value = serde_json::to_value(&deployment).unwrap();

        assert_eq!(value["metadata"]["name"], json!("test-workload"));
        assert_eq!(value["spec"]["replicas"], json!(2));
        assert_eq!(
            value["spec"]["selector"]["matchLabels"],
            json!({ "app": "demo" })
        );

        let container = &value["spec"]["template"]["spec"]["containers"][0];
        assert_eq!(container["name"], json!("web"));
        assert_eq!(container["image"], json!("nginx:1.12"));
        assert_eq!(
            container["ports"][0],
            json!({ "name": "http", "protocol": "TCP", "containerPort": 80 })
        );
    }

    #[test]
    fn two_builds_differ_only_in_name() {
        let template = WorkloadTemplate::default();

        let mut first = template.to_deployment("first-name");
        let second = template.to_deployment("second-name");

        assert_ne!(first.metadata.name, second.metadata.name);

        first.metadata.name = second.metadata.name.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn pod_template_labels_contain_the_selector() {
        let deployment = WorkloadTemplate::default().to_deployment("test-workload");
        let spec = deployment.spec.unwrap();

        let selector = spec.selector.match_labels.unwrap();
        let labels = spec.template.metadata.unwrap().labels.unwrap();

        for (key, value) in &selector {
            assert_eq!(labels.get(key), Some(value));
        }
    }
}
